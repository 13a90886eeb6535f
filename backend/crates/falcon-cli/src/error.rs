use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] falcon_config::ConfigError),

    #[error("Backend client error: {0}")]
    Client(#[from] falcon_client::ClientError),

    #[error("{0}")]
    Auth(#[from] falcon_auth::AuthError),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Timed out waiting for {what} {location}")]
    Timeout {
        what: &'static str,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn timeout(what: &'static str) -> Self {
        Self::Timeout {
            what,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
