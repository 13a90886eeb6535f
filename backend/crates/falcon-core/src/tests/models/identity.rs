use crate::{Identity, MAX_EXTRA_METADATA_KEYS, UserMetadata};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serde_json::json;

#[test]
fn given_provider_user_json_when_deserialized_then_metadata_is_typed() {
    let json = json!({
        "id": "u1",
        "email": "a@b.com",
        "user_metadata": {
            "full_name": "Ada Lovelace",
            "site_name": "HQ",
            "theme": "dark"
        },
        "aud": "authenticated"
    });

    let identity: Identity = serde_json::from_value(json).unwrap();

    assert_eq!(identity.id, "u1");
    assert_eq!(identity.metadata.full_name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(identity.metadata.mobile_number, None);
    assert_eq!(identity.metadata.extra.get("theme"), Some(&json!("dark")));
}

#[test]
fn given_missing_metadata_when_deserialized_then_defaults_to_empty() {
    let identity: Identity = serde_json::from_value(json!({ "id": "u2" })).unwrap();

    assert_eq!(identity.email, None);
    assert_eq!(identity.metadata, UserMetadata::default());
    assert_that!(identity.email_or_empty().len(), eq(0));
}

#[test]
fn given_too_many_extra_keys_when_validate_then_err() {
    let mut metadata = UserMetadata::default();
    for i in 0..=MAX_EXTRA_METADATA_KEYS {
        metadata.extra.insert(format!("key_{i}"), json!(i));
    }

    assert_that!(metadata.validate(), err(anything()));
}

#[test]
fn given_seed_fields_when_validate_then_ok() {
    let metadata = UserMetadata {
        full_name: Some(String::from("Ada")),
        site_name: Some(String::from("HQ")),
        mobile_number: Some(String::from("+1-555-0100")),
        ..Default::default()
    };

    assert_that!(metadata.validate(), ok(anything()));
}

#[test]
fn given_metadata_when_serialized_then_absent_fields_are_omitted() {
    let metadata = UserMetadata {
        site_name: Some(String::from("HQ")),
        ..Default::default()
    };

    let json = serde_json::to_value(&metadata).unwrap();

    assert_eq!(json, json!({ "site_name": "HQ" }));
}
