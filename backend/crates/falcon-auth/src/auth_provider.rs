//! Boundary to the external identity provider.

use crate::ProviderResult;

use async_trait::async_trait;
use falcon_core::{AuthStateChange, Session, UserMetadata};
use log::warn;
use tokio::sync::broadcast;

/// Options forwarded with a sign-up request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignUpOptions {
    /// Stored by the provider as the identity's metadata
    pub data: UserMetadata,
    /// Where the confirmation email should send the user
    pub email_redirect_to: Option<String>,
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> ProviderResult<Session>;

    /// Returns `None` when the provider requires email confirmation first
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        options: SignUpOptions,
    ) -> ProviderResult<Option<Session>>;

    async fn sign_out(&self) -> ProviderResult<()>;

    async fn get_session(&self) -> ProviderResult<Option<Session>>;

    /// Subscribe to auth state changes from this point on
    fn on_auth_state_change(&self) -> AuthSubscription;
}

/// Fan-out of auth state changes to any number of subscribers.
#[derive(Debug, Clone)]
pub struct AuthEventBus {
    sender: broadcast::Sender<AuthStateChange>,
}

impl AuthEventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publish to current subscribers. Returns how many received it.
    pub fn publish(&self, change: AuthStateChange) -> usize {
        // No subscribers is not an error: nothing has mounted yet.
        self.sender.send(change).unwrap_or(0)
    }

    pub fn subscribe(&self) -> AuthSubscription {
        AuthSubscription::new(self.sender.subscribe())
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for AuthEventBus {
    fn default() -> Self {
        Self::new(16)
    }
}

/// Live handle on the change stream. Dropping it unsubscribes.
#[derive(Debug)]
pub struct AuthSubscription {
    receiver: broadcast::Receiver<AuthStateChange>,
}

impl AuthSubscription {
    pub fn new(receiver: broadcast::Receiver<AuthStateChange>) -> Self {
        Self { receiver }
    }

    /// Next change, or `None` once the provider side is gone.
    ///
    /// A lagging subscriber skips what it missed; each change replaces state
    /// wholesale so only the latest matters.
    pub async fn next(&mut self) -> Option<AuthStateChange> {
        loop {
            match self.receiver.recv().await {
                Ok(change) => return Some(change),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!("Auth subscription lagged, skipped {skipped} change(s)");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}
