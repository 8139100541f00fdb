use crate::{ClientError, StoreError};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use vh_core::Role;

/// Why a session operation failed. The session is unchanged whenever one of these is returned.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Login failed for {role}: {source} {location}")]
    Login {
        role: Role,
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },

    #[error("{role} registration failed: {source} {location}")]
    Registration {
        role: Role,
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },

    #[error("Session storage failed: {source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

impl SessionError {
    #[track_caller]
    pub fn login(role: Role, source: ClientError) -> Self {
        Self::Login {
            role,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn registration(role: Role, source: ClientError) -> Self {
        Self::Registration {
            role,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Backend-side failure (status or business rule) rather than transport or local storage.
    pub fn is_rejected_by_backend(&self) -> bool {
        match self {
            Self::Login { source, .. } | Self::Registration { source, .. } => matches!(
                source,
                ClientError::Api { .. } | ClientError::Rejected { .. }
            ),
            Self::Store { .. } => false,
        }
    }
}

impl From<StoreError> for SessionError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
