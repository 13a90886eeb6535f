use crate::tests::fixed_now;
use crate::{Identity, Session};

use chrono::Duration;

fn session_expiring_in(delta: Duration) -> Session {
    Session {
        access_token: String::from("access-secret"),
        refresh_token: String::from("refresh-secret"),
        expires_at: fixed_now() + delta,
        user: Identity::new("u1", Some(String::from("a@b.com"))),
    }
}

#[test]
fn test_session_not_expired_outside_margin() {
    let session = session_expiring_in(Duration::minutes(10));
    assert!(!session.is_expired(fixed_now(), Duration::seconds(60)));
}

#[test]
fn test_session_expired_inside_margin() {
    let session = session_expiring_in(Duration::seconds(30));
    assert!(session.is_expired(fixed_now(), Duration::seconds(60)));
}

#[test]
fn test_session_debug_redacts_tokens() {
    let session = session_expiring_in(Duration::minutes(10));
    let debug = format!("{session:?}");

    assert!(!debug.contains("access-secret"));
    assert!(!debug.contains("refresh-secret"));
    assert!(debug.contains("u1"));
}
