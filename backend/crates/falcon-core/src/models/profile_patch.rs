use crate::{CoreError, CoreResult, Profile};

use serde::{Deserialize, Serialize};

/// Longest accepted value for any free-text profile field
pub const MAX_PROFILE_TEXT_LENGTH: usize = 256;

/// Partial profile update. Only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfilePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_longitude: Option<f64>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.site_name.is_none()
            && self.email.is_none()
            && self.mobile_number.is_none()
            && self.site_latitude.is_none()
            && self.site_longitude.is_none()
    }

    /// Validate before the patch reaches storage
    pub fn validate(&self) -> CoreResult<()> {
        if self.is_empty() {
            return Err(CoreError::validation("profile", "patch has no fields"));
        }

        let texts = [
            ("full_name", &self.full_name),
            ("site_name", &self.site_name),
            ("email", &self.email),
            ("mobile_number", &self.mobile_number),
        ];
        for (field, value) in texts {
            if let Some(value) = value
                && value.chars().count() > MAX_PROFILE_TEXT_LENGTH
            {
                return Err(CoreError::validation(
                    field,
                    format!("must be at most {MAX_PROFILE_TEXT_LENGTH} characters"),
                ));
            }
        }

        if let Some(email) = &self.email
            && !email.is_empty()
            && !email.contains('@')
        {
            return Err(CoreError::validation("email", "must contain '@'"));
        }

        check_coordinate("site_latitude", self.site_latitude, 90.0)?;
        check_coordinate("site_longitude", self.site_longitude, 180.0)?;

        Ok(())
    }

    /// Merge the patch over an existing row
    pub fn apply_to(&self, profile: &mut Profile) {
        if let Some(value) = &self.full_name {
            profile.full_name = value.clone();
        }
        if let Some(value) = &self.site_name {
            profile.site_name = value.clone();
        }
        if let Some(value) = &self.email {
            profile.email = value.clone();
        }
        if let Some(value) = &self.mobile_number {
            profile.mobile_number = value.clone();
        }
        if self.site_latitude.is_some() {
            profile.site_latitude = self.site_latitude;
        }
        if self.site_longitude.is_some() {
            profile.site_longitude = self.site_longitude;
        }
    }
}

#[track_caller]
fn check_coordinate(field: &'static str, value: Option<f64>, bound: f64) -> CoreResult<()> {
    match value {
        Some(v) if !v.is_finite() => Err(CoreError::validation(field, "must be a finite number")),
        Some(v) if v.abs() > bound => Err(CoreError::validation(
            field,
            format!("must be within [-{bound}, {bound}]"),
        )),
        _ => Ok(()),
    }
}
