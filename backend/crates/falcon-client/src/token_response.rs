use crate::{ClientError, ClientResult};

use chrono::{DateTime, TimeDelta, Utc};
use falcon_core::{Identity, Session};
use log::warn;
use serde::Deserialize;
use serde_json::Value;

/// Session payload returned by the token and signup endpoints
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: Identity,
}

/// Lifetime assumed when the backend omits or garbles `expires_in`
const DEFAULT_EXPIRES_IN_SECS: i64 = 3600;

impl TokenResponse {
    pub fn into_session(self, now: DateTime<Utc>) -> Session {
        let expires_at = self
            .expires_at
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .unwrap_or_else(|| expiry_from_lifetime(now, self.expires_in));

        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user,
        }
    }
}

fn expiry_from_lifetime(now: DateTime<Utc>, expires_in: Option<i64>) -> DateTime<Utc> {
    let lifetime = expires_in.unwrap_or(DEFAULT_EXPIRES_IN_SECS);
    TimeDelta::try_seconds(lifetime)
        .and_then(|delta| now.checked_add_signed(delta))
        .unwrap_or_else(|| {
            warn!("Ignoring out-of-range expires_in {lifetime}, using {DEFAULT_EXPIRES_IN_SECS}s");
            now + TimeDelta::seconds(DEFAULT_EXPIRES_IN_SECS)
        })
}

/// Signup answers with a session when confirmation is off, or with the bare
/// user record when an email must be confirmed first.
pub(crate) fn session_from_signup(body: Value, now: DateTime<Utc>) -> ClientResult<Option<Session>> {
    if body.get("access_token").is_none() {
        return Ok(None);
    }

    let token: TokenResponse = serde_json::from_value(body).map_err(ClientError::from_json)?;
    Ok(Some(token.into_session(now)))
}
