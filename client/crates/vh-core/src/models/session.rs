use crate::User;

use serde::Serialize;

/// Point-in-time view of the session.
///
/// `is_authenticated` is computed from `user` on construction and cannot be
/// set independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    user: Option<User>,
    is_authenticated: bool,
    is_loading: bool,
}

impl Session {
    pub fn new(user: Option<User>, is_loading: bool) -> Self {
        Self {
            is_authenticated: user.is_some(),
            user,
            is_loading,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn into_user(self) -> Option<User> {
        self.user
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }
}

impl Default for Session {
    /// Startup state: nothing restored yet, still loading.
    fn default() -> Self {
        Self::new(None, true)
    }
}
