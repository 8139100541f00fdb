use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Actor role. Selects the field set, the login endpoint and the update endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "VOLUNTEER")]
    Volunteer,
    #[serde(rename = "ORGANIZATION_ADMIN")]
    OrganizationAdmin,
}

impl Role {
    /// Wire representation, as sent in login and registration payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Volunteer => "VOLUNTEER",
            Self::OrganizationAdmin => "ORGANIZATION_ADMIN",
        }
    }

    /// Path segment of the role's login endpoint (`/login/{segment}`)
    pub fn login_segment(&self) -> &'static str {
        match self {
            Self::Volunteer => "volunteer",
            Self::OrganizationAdmin => "organization",
        }
    }

    /// Resource collection the role's account lives under (`/{collection}/create`)
    pub fn collection(&self) -> &'static str {
        match self {
            Self::Volunteer => "volunteers",
            Self::OrganizationAdmin => "organizations",
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "volunteer" => Ok(Self::Volunteer),
            "organization" | "organization_admin" => Ok(Self::OrganizationAdmin),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
