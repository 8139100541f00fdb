use crate::{ConfigError, ConfigErrorResult, DEFAULT_API_BASE_URL, MAX_TIMEOUT_SECS};

use std::time::Duration;

use serde::Deserialize;

/// Remote backend the session talks to
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Per-request timeout. Unset means requests wait indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_API_BASE_URL),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::api(format!(
                "api.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if let Some(secs) = self.timeout_secs
            && (secs == 0 || secs > MAX_TIMEOUT_SECS)
        {
            return Err(ConfigError::api(format!(
                "api.timeout_secs must be 1-{MAX_TIMEOUT_SECS}, got {secs}"
            )));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
