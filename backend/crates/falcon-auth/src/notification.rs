//! User-visible notifications, kept apart from the operations that cause them.

use crate::{AuthOutcome, AuthResult};

use falcon_core::AuthEvent;

pub const WELCOME_MESSAGE: &str = "Welcome to FALCON Command Center";
pub const SIGNED_OUT_MESSAGE: &str = "Signed out successfully";
pub const SIGNED_UP_MESSAGE: &str =
    "Account created! Please check your email to confirm your account.";
pub const PROFILE_UPDATED_MESSAGE: &str = "Profile updated successfully";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    /// Sign-in and sign-out are announced by the change stream, not here.
    pub fn for_outcome(outcome: &AuthOutcome) -> Option<Self> {
        match outcome {
            AuthOutcome::SignedUp { .. } => Some(Self::success(SIGNED_UP_MESSAGE)),
            AuthOutcome::ProfileUpdated => Some(Self::success(PROFILE_UPDATED_MESSAGE)),
            AuthOutcome::SignedIn | AuthOutcome::SignedOut => None,
        }
    }

    pub fn for_event(event: AuthEvent) -> Option<Self> {
        match event {
            AuthEvent::SignedIn => Some(Self::success(WELCOME_MESSAGE)),
            AuthEvent::SignedOut => Some(Self::success(SIGNED_OUT_MESSAGE)),
            _ => None,
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Notify for `result` and hand it back unchanged
pub fn report(notifier: &dyn Notifier, result: AuthResult<AuthOutcome>) -> AuthResult<AuthOutcome> {
    match &result {
        Ok(outcome) => {
            if let Some(notification) = Notification::for_outcome(outcome) {
                notifier.notify(notification);
            }
        }
        Err(e) => notifier.notify(Notification::error(e.user_message())),
    }
    result
}
