//! Profile - application-owned record extending an identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Greeting used when the profile has no name
pub const DEFAULT_GREETING_NAME: &str = "Operator";
/// Site label used when the profile has no site name
pub const DEFAULT_SITE_LABEL: &str = "Site Location";

/// A row of the `profiles` table. At most one exists per identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique key, the identity id
    #[serde(rename = "user_id")]
    pub identity_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub site_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub mobile_number: String,
    #[serde(default)]
    pub site_latitude: Option<f64>,
    #[serde(default)]
    pub site_longitude: Option<f64>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Profile {
    pub fn greeting_name(&self) -> &str {
        non_empty_or(&self.full_name, DEFAULT_GREETING_NAME)
    }

    pub fn site_label(&self) -> &str {
        non_empty_or(&self.site_name, DEFAULT_SITE_LABEL)
    }

    /// Site coordinates as "lat, lon" with six decimals, when both are known
    pub fn coordinates(&self) -> Option<String> {
        match (self.site_latitude, self.site_longitude) {
            (Some(lat), Some(lon)) => Some(format!("{lat:.6}, {lon:.6}")),
            _ => None,
        }
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
