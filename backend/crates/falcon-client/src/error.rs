use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use falcon_auth::ProviderError;
use thiserror::Error;

/// Errors that can occur talking to the hosted backend
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error {status}: {message} (code: {}) {location}", code.as_deref().unwrap_or("none"))]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid URL '{url}': {message} {location}")]
    Url {
        url: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Session file error at {path}: {source} {location}")]
    SessionFile {
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn api(status: u16, code: Option<String>, message: impl Into<String>) -> Self {
        ClientError::Api {
            status,
            code,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn url(url: impl Into<String>, message: impl Into<String>) -> Self {
        ClientError::Url {
            url: url.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn session_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ClientError::SessionFile {
            path: path.into(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<ClientError> for ProviderError {
    #[track_caller]
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Api {
                status,
                code,
                message,
                ..
            } => ProviderError::rejected(Some(status), code, message),
            ClientError::Http { message, .. } => ProviderError::transport(message),
            ClientError::Json { message, .. } => ProviderError::decode(message),
            other @ (ClientError::Url { .. } | ClientError::SessionFile { .. }) => {
                ProviderError::transport(other.to_string())
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
