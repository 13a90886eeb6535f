use crate::{CoreError, CoreResult, MAX_PROFILE_TEXT_LENGTH};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Upper bound on unknown metadata keys carried through from the provider
pub const MAX_EXTRA_METADATA_KEYS: usize = 32;

/// Metadata attached to an identity at sign-up.
///
/// The known profile seed fields are typed; anything else the provider sends
/// is kept in `extra` so it survives a round trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl UserMetadata {
    pub fn full_name_or_empty(&self) -> &str {
        self.full_name.as_deref().unwrap_or_default()
    }

    pub fn site_name_or_empty(&self) -> &str {
        self.site_name.as_deref().unwrap_or_default()
    }

    pub fn mobile_number_or_empty(&self) -> &str {
        self.mobile_number.as_deref().unwrap_or_default()
    }

    /// Check bounds before the metadata is sent to the provider
    pub fn validate(&self) -> CoreResult<()> {
        let fields = [
            ("full_name", &self.full_name),
            ("site_name", &self.site_name),
            ("mobile_number", &self.mobile_number),
        ];
        for (field, value) in fields {
            if let Some(value) = value
                && value.chars().count() > MAX_PROFILE_TEXT_LENGTH
            {
                return Err(CoreError::validation(
                    field,
                    format!("must be at most {MAX_PROFILE_TEXT_LENGTH} characters"),
                ));
            }
        }

        if self.extra.len() > MAX_EXTRA_METADATA_KEYS {
            return Err(CoreError::validation(
                "user_metadata",
                format!(
                    "{} extra keys exceeds the limit of {MAX_EXTRA_METADATA_KEYS}",
                    self.extra.len()
                ),
            ));
        }

        Ok(())
    }
}
