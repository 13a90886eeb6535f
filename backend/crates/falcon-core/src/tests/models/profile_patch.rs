use crate::{MAX_PROFILE_TEXT_LENGTH, Profile, ProfilePatch, ProfileUpsert};

use chrono::{TimeZone, Utc};
use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serde_json::json;

#[test]
fn given_empty_patch_when_validate_then_err() {
    let patch = ProfilePatch::default();

    assert!(patch.is_empty());
    assert_that!(patch.validate(), err(anything()));
}

#[test]
fn given_site_name_patch_when_validate_then_ok() {
    let patch = ProfilePatch {
        site_name: Some(String::from("HQ")),
        ..Default::default()
    };

    assert_that!(patch.validate(), ok(anything()));
}

#[test]
fn given_latitude_out_of_range_when_validate_then_err_names_field() {
    let patch = ProfilePatch {
        site_latitude: Some(91.0),
        ..Default::default()
    };

    let result = patch.validate();

    assert_eq!(result.err().and_then(|e| e.field()), Some("site_latitude"));
}

#[test]
fn given_non_finite_longitude_when_validate_then_err() {
    let patch = ProfilePatch {
        site_longitude: Some(f64::NAN),
        ..Default::default()
    };

    assert_that!(patch.validate(), err(anything()));
}

#[test]
fn given_overlong_name_when_validate_then_err() {
    let patch = ProfilePatch {
        full_name: Some("x".repeat(MAX_PROFILE_TEXT_LENGTH + 1)),
        ..Default::default()
    };

    assert_that!(patch.validate(), err(anything()));
}

#[test]
fn given_email_without_at_when_validate_then_err() {
    let patch = ProfilePatch {
        email: Some(String::from("not-an-email")),
        ..Default::default()
    };

    assert_that!(patch.validate(), err(anything()));
}

#[test]
fn given_patch_when_applied_then_only_present_fields_change() {
    let mut profile: Profile = serde_json::from_value(json!({
        "user_id": "u1",
        "full_name": "Ada",
        "site_name": "Old Site",
        "email": "a@b.com"
    }))
    .unwrap();
    let patch = ProfilePatch {
        site_name: Some(String::from("HQ")),
        site_latitude: Some(10.0),
        ..Default::default()
    };

    patch.apply_to(&mut profile);

    assert_eq!(profile.full_name, "Ada");
    assert_eq!(profile.site_name, "HQ");
    assert_eq!(profile.site_latitude, Some(10.0));
    assert_eq!(profile.site_longitude, None);
}

#[test]
fn given_upsert_when_serialized_then_patch_is_flattened_with_stamp() {
    let updated_at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let upsert = ProfileUpsert::new(
        "u1",
        ProfilePatch {
            site_name: Some(String::from("HQ")),
            ..Default::default()
        },
        updated_at,
    );

    let json = serde_json::to_value(&upsert).unwrap();

    assert_eq!(
        json,
        json!({
            "user_id": "u1",
            "site_name": "HQ",
            "updated_at": "2024-06-01T12:00:00Z"
        })
    );
}
