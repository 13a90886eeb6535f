use crate::AuthEvent;

use std::str::FromStr;

#[test]
fn test_auth_event_as_str() {
    assert_eq!(AuthEvent::SignedIn.as_str(), "SIGNED_IN");
    assert_eq!(AuthEvent::SignedOut.as_str(), "SIGNED_OUT");
    assert_eq!(AuthEvent::TokenRefreshed.as_str(), "TOKEN_REFRESHED");
}

#[test]
fn test_auth_event_from_str() {
    assert_eq!(
        AuthEvent::from_str("SIGNED_IN").unwrap(),
        AuthEvent::SignedIn
    );
    assert_eq!(
        AuthEvent::from_str("INITIAL_SESSION").unwrap(),
        AuthEvent::InitialSession
    );
    assert!(AuthEvent::from_str("signed_in").is_err());
}

#[test]
fn test_auth_event_serde_uses_wire_names() {
    let json = serde_json::to_string(&AuthEvent::SignedOut).unwrap();
    assert_eq!(json, "\"SIGNED_OUT\"");

    let parsed: AuthEvent = serde_json::from_str("\"USER_UPDATED\"").unwrap();
    assert_eq!(parsed, AuthEvent::UserUpdated);
}
