use crate::ProfilePatch;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Upsert payload: identity key, the patch fields, and the update stamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileUpsert {
    pub user_id: String,
    #[serde(flatten)]
    pub patch: ProfilePatch,
    pub updated_at: DateTime<Utc>,
}

impl ProfileUpsert {
    pub fn new(user_id: impl Into<String>, patch: ProfilePatch, updated_at: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.into(),
            patch,
            updated_at,
        }
    }
}
