use crate::ProviderError;

use std::panic::Location;

use error_location::ErrorLocation;
use falcon_core::CoreError;
use thiserror::Error;

/// Message shown when an operation needs a signed-in identity
pub const NOT_AUTHENTICATED_MESSAGE: &str = "You must be signed in to do that";

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Not authenticated {location}")]
    NotAuthenticated { location: ErrorLocation },

    #[error("{operation} failed: {source} {location}")]
    Provider {
        operation: &'static str,
        #[source]
        source: ProviderError,
        location: ErrorLocation,
    },

    #[error("Invalid input: {source} {location}")]
    Validation {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn not_authenticated() -> Self {
        Self::NotAuthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn provider(operation: &'static str, source: ProviderError) -> Self {
        Self::Provider {
            operation,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(source: CoreError) -> Self {
        Self::Validation {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotAuthenticated { .. } => "NOT_AUTHENTICATED",
            Self::Provider { .. } => "PROVIDER_ERROR",
            Self::Validation { .. } => "VALIDATION_ERROR",
        }
    }

    /// Text surfaced to the user; provider failures show the provider's own message
    pub fn user_message(&self) -> String {
        match self {
            Self::NotAuthenticated { .. } => NOT_AUTHENTICATED_MESSAGE.to_string(),
            Self::Provider { source, .. } => source.user_message().to_string(),
            Self::Validation { source, .. } => match source {
                CoreError::Validation { field, message, .. } => format!("{field} {message}"),
                other => other.to_string(),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
