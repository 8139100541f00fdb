use crate::{ConfigError, ConfigErrorResult, DEFAULT_SESSION_DIR, DEFAULT_SESSION_FILE};

use serde::Deserialize;

/// Where the persisted session record lives, relative to the config directory
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub dir: String,
    pub file_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_SESSION_DIR),
            file_name: String::from(DEFAULT_SESSION_FILE),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let dir = std::path::Path::new(&self.dir);
        if dir.is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::session(
                "session.dir must be relative and cannot contain '..'",
            ));
        }

        if self.file_name.is_empty()
            || self.file_name.contains('/')
            || self.file_name.contains('\\')
        {
            return Err(ConfigError::session(format!(
                "session.file_name must be a plain file name, got '{}'",
                self.file_name
            )));
        }

        Ok(())
    }
}
