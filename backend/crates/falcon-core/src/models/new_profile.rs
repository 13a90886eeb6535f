use crate::Identity;

use serde::Serialize;

/// Insert payload for a profile created on first sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewProfile {
    pub user_id: String,
    pub full_name: String,
    pub site_name: String,
    pub email: String,
    pub mobile_number: String,
}

impl NewProfile {
    /// Seed from identity metadata; absent fields become empty strings and the
    /// email is copied verbatim.
    pub fn seeded_from(identity: &Identity) -> Self {
        let metadata = &identity.metadata;
        Self {
            user_id: identity.id.clone(),
            full_name: metadata.full_name_or_empty().to_string(),
            site_name: metadata.site_name_or_empty().to_string(),
            email: identity.email_or_empty().to_string(),
            mobile_number: metadata.mobile_number_or_empty().to_string(),
        }
    }
}
