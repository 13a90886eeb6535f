use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Storage code for "single row requested, zero rows returned"
pub const NO_ROWS_CODE: &str = "PGRST116";
/// Storage code for a unique constraint violation
pub const UNIQUE_VIOLATION_CODE: &str = "23505";

/// Failure reported by the external auth or storage provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider rejected request ({}): {message} {location}", code.as_deref().unwrap_or("no code"))]
    Rejected {
        status: Option<u16>,
        code: Option<String>,
        message: String,
        location: ErrorLocation,
    },

    #[error("Provider unreachable: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unexpected provider response: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },
}

impl ProviderError {
    #[track_caller]
    pub fn rejected(status: Option<u16>, code: Option<String>, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            code,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Rejection carrying the "no rows" code
    #[track_caller]
    pub fn no_rows(message: impl Into<String>) -> Self {
        Self::rejected(None, Some(NO_ROWS_CODE.to_string()), message)
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Rejected { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => *status,
            _ => None,
        }
    }

    /// Message suitable for showing to the user (no source location)
    pub fn user_message(&self) -> &str {
        match self {
            Self::Rejected { message, .. }
            | Self::Transport { message, .. }
            | Self::Decode { message, .. } => message,
        }
    }

    pub fn is_no_rows(&self) -> bool {
        self.code() == Some(NO_ROWS_CODE)
    }

    pub fn is_unique_violation(&self) -> bool {
        self.code() == Some(UNIQUE_VIOLATION_CODE)
    }
}

pub type ProviderResult<T> = std::result::Result<T, ProviderError>;
