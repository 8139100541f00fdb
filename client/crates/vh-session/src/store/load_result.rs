use vh_core::User;

/// Result of loading the persisted session - distinguishes "nothing stored" from corruption.
#[derive(Debug, Default)]
pub struct LoadResult {
    pub user: Option<User>,
    /// Present if a record exists but could not be decoded
    pub corruption_error: Option<String>,
}

impl LoadResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn loaded(user: User) -> Self {
        Self {
            user: Some(user),
            corruption_error: None,
        }
    }

    pub fn corrupted(message: impl Into<String>) -> Self {
        Self {
            user: None,
            corruption_error: Some(message.into()),
        }
    }
}
