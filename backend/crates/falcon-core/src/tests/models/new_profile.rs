use crate::{Identity, NewProfile, UserMetadata};

use serde_json::json;

#[test]
fn given_identity_without_metadata_when_seeded_then_fields_default_to_empty() {
    let identity = Identity::new("u1", Some(String::from("a@b.com")));

    let profile = NewProfile::seeded_from(&identity);

    assert_eq!(
        profile,
        NewProfile {
            user_id: String::from("u1"),
            full_name: String::new(),
            site_name: String::new(),
            email: String::from("a@b.com"),
            mobile_number: String::new(),
        }
    );
}

#[test]
fn given_identity_with_metadata_when_seeded_then_fields_are_copied() {
    let identity = Identity::new("u1", Some(String::from("Ops@Site.example"))).with_metadata(
        UserMetadata {
            full_name: Some(String::from("Grace Hopper")),
            site_name: Some(String::from("North Yard")),
            mobile_number: Some(String::from("+1-555-0199")),
            ..Default::default()
        },
    );

    let profile = NewProfile::seeded_from(&identity);

    assert_eq!(profile.full_name, "Grace Hopper");
    assert_eq!(profile.site_name, "North Yard");
    assert_eq!(profile.mobile_number, "+1-555-0199");
    assert_eq!(profile.email, "Ops@Site.example");
}

#[test]
fn given_new_profile_when_serialized_then_uses_user_id_key() {
    let identity = Identity::new("u1", Some(String::from("a@b.com")));

    let json = serde_json::to_value(NewProfile::seeded_from(&identity)).unwrap();

    assert_eq!(
        json,
        json!({
            "user_id": "u1",
            "full_name": "",
            "site_name": "",
            "email": "a@b.com",
            "mobile_number": ""
        })
    );
}
