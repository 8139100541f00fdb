pub(crate) mod error;
pub(crate) mod file_store;
pub(crate) mod load_result;
pub(crate) mod memory_store;

pub use error::{Result as StoreResult, StoreError};
pub use file_store::FileSessionStore;
pub use load_result::LoadResult;
pub use memory_store::MemorySessionStore;

use vh_core::User;

/// Durable mirror of the signed-in identity.
///
/// Holds at most one record. A record that exists but cannot be decoded is
/// reported through [`LoadResult::corruption_error`] rather than as an error,
/// so callers can treat it as "no session".
///
/// Calls are synchronous and made from async code while the session write lock
/// is held. Implementations must stay quick: one small record, no network.
/// A store backed by slow I/O should be wrapped so that its work runs on
/// `tokio::task::spawn_blocking`.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> StoreResult<LoadResult>;

    /// Replace the stored record with `user`.
    fn save(&self, user: &User) -> StoreResult<()>;

    /// Remove the stored record. Clearing an empty store is not an error.
    fn clear(&self) -> StoreResult<()>;
}
