use crate::{DEFAULT_GREETING_NAME, DEFAULT_SITE_LABEL, Profile};

use serde_json::json;

fn profile_from(value: serde_json::Value) -> Profile {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_profile_deserializes_row_with_nulls() {
    let profile = profile_from(json!({
        "id": "7c1d3c8e-0000-0000-0000-000000000001",
        "user_id": "u1",
        "full_name": null,
        "site_name": "HQ",
        "email": "a@b.com",
        "mobile_number": null,
        "site_latitude": null,
        "site_longitude": null,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-02T00:00:00Z"
    }));

    assert_eq!(profile.identity_id, "u1");
    assert_eq!(profile.full_name, "");
    assert_eq!(profile.mobile_number, "");
    assert_eq!(profile.site_name, "HQ");
    assert!(profile.updated_at.is_some());
}

#[test]
fn test_profile_greeting_falls_back_to_operator() {
    let profile = profile_from(json!({ "user_id": "u1", "full_name": "  " }));
    assert_eq!(profile.greeting_name(), DEFAULT_GREETING_NAME);
    assert_eq!(profile.site_label(), DEFAULT_SITE_LABEL);
}

#[test]
fn test_profile_greeting_uses_full_name() {
    let profile = profile_from(json!({
        "user_id": "u1",
        "full_name": "Ada Lovelace",
        "site_name": "HQ"
    }));
    assert_eq!(profile.greeting_name(), "Ada Lovelace");
    assert_eq!(profile.site_label(), "HQ");
}

#[test]
fn test_profile_coordinates_need_both_values() {
    let mut profile = profile_from(json!({ "user_id": "u1", "site_latitude": 51.5 }));
    assert_eq!(profile.coordinates(), None);

    profile.site_longitude = Some(-0.1275);
    assert_eq!(
        profile.coordinates().as_deref(),
        Some("51.500000, -0.127500")
    );
}
