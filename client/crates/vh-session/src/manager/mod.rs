pub(crate) mod error;
pub(crate) mod session_manager;

pub use error::{Result as SessionResult, SessionError};
pub use session_manager::SessionManager;
