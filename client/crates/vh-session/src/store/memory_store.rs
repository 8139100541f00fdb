use crate::store::{LoadResult, SessionStore, StoreResult};

use std::sync::{Mutex, PoisonError};

use vh_core::User;

/// In-process store holding the serialized record.
///
/// Keeps the JSON text rather than the value so that it behaves like the file
/// store: records are encoded on save and decoded on load.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    record: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with raw record text, which need not be valid.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            record: Mutex::new(Some(raw.into())),
        }
    }

    /// Raw record text currently stored.
    pub fn raw(&self) -> Option<String> {
        self.record
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> StoreResult<LoadResult> {
        let record = self.record.lock().unwrap_or_else(PoisonError::into_inner);

        let Some(raw) = record.as_deref() else {
            return Ok(LoadResult::empty());
        };

        match serde_json::from_str::<User>(raw) {
            Ok(user) => Ok(LoadResult::loaded(user)),
            Err(e) => Ok(LoadResult::corrupted(e.to_string())),
        }
    }

    fn save(&self, user: &User) -> StoreResult<()> {
        let json = serde_json::to_string(user)?;
        *self.record.lock().unwrap_or_else(PoisonError::into_inner) = Some(json);
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        *self.record.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}
