use crate::{ClientError, SessionError};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use vh_core::Role;

/// Errors surfaced by a [`ProfileEditor`](crate::ProfileEditor).
///
/// None of these mutate the session; the editor stays usable after any of them.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Profile editor is not open {location}")]
    NotOpen { location: ErrorLocation },

    #[error("No signed-in user {location}")]
    NotAuthenticated { location: ErrorLocation },

    #[error("Editor for {expected} cannot edit a {actual} profile {location}")]
    RoleMismatch {
        expected: Role,
        actual: Role,
        location: ErrorLocation,
    },

    #[error("Profile update failed: {source} {location}")]
    Update {
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },

    #[error("Could not encode profile update: {source} {location}")]
    Payload {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Could not store updated profile: {source} {location}")]
    Session {
        #[source]
        source: SessionError,
        location: ErrorLocation,
    },
}

impl EditorError {
    #[track_caller]
    pub fn not_open() -> Self {
        Self::NotOpen {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_authenticated() -> Self {
        Self::NotAuthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn role_mismatch(expected: Role, actual: Role) -> Self {
        Self::RoleMismatch {
            expected,
            actual,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn update(source: ClientError) -> Self {
        Self::Update {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn session(source: SessionError) -> Self {
        Self::Session {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for EditorError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Payload {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, EditorError>;
