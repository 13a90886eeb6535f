//! Auth Facade: the operations the UI calls.
//!
//! Each operation returns a plain `AuthResult<AuthOutcome>`. Turning that
//! into something the user sees is the caller's job (see [`crate::report`]).

use crate::{
    AuthError, AuthOutcome, AuthProvider, AuthResult, ProfileSynchronizer, SessionReader,
    SignUpOptions,
};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use falcon_core::{Profile, ProfilePatch, ProfileUpsert, UserMetadata};
use log::{info, warn};

/// Source of "now" for update stamps
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

pub struct AuthFacade {
    provider: Arc<dyn AuthProvider>,
    profiles: ProfileSynchronizer,
    session: SessionReader,
    email_redirect_to: Option<String>,
    clock: Clock,
}

impl AuthFacade {
    pub fn new(
        provider: Arc<dyn AuthProvider>,
        profiles: ProfileSynchronizer,
        session: SessionReader,
    ) -> Self {
        Self {
            provider,
            profiles,
            session,
            email_redirect_to: None,
            clock: Arc::new(Utc::now),
        }
    }

    pub fn with_email_redirect(mut self, redirect_to: impl Into<String>) -> Self {
        self.email_redirect_to = Some(redirect_to.into());
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// On success the new session arrives through the change stream.
    pub async fn sign_in(&self, email: &str, password: &str) -> AuthResult<AuthOutcome> {
        self.provider
            .sign_in_with_password(email, password)
            .await
            .map_err(|e| {
                warn!("Sign-in rejected: {e}");
                AuthError::provider("sign_in", e)
            })?;

        info!("Sign-in accepted");
        Ok(AuthOutcome::SignedIn)
    }

    /// `seed` is stored as identity metadata and later copied into the profile
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        seed: UserMetadata,
    ) -> AuthResult<AuthOutcome> {
        seed.validate().map_err(AuthError::validation)?;

        let options = SignUpOptions {
            data: seed,
            email_redirect_to: self.email_redirect_to.clone(),
        };
        let session = self
            .provider
            .sign_up(email, password, options)
            .await
            .map_err(|e| {
                warn!("Sign-up rejected: {e}");
                AuthError::provider("sign_up", e)
            })?;

        let confirmation_required = session.is_none();
        info!("Account created (confirmation required: {confirmation_required})");
        Ok(AuthOutcome::SignedUp {
            confirmation_required,
        })
    }

    pub async fn sign_out(&self) -> AuthResult<AuthOutcome> {
        self.provider.sign_out().await.map_err(|e| {
            warn!("Sign-out failed: {e}");
            AuthError::provider("sign_out", e)
        })?;

        Ok(AuthOutcome::SignedOut)
    }

    /// Upsert `patch` into the current identity's profile.
    ///
    /// Fails with `NotAuthenticated` before touching storage when nobody is
    /// signed in.
    pub async fn update_profile(&self, patch: ProfilePatch) -> AuthResult<AuthOutcome> {
        let identity = self
            .session
            .current_identity()
            .ok_or_else(AuthError::not_authenticated)?;

        patch.validate().map_err(AuthError::validation)?;

        let upsert = ProfileUpsert::new(identity.id.as_str(), patch, (self.clock)());
        self.profiles
            .store()
            .upsert(upsert)
            .await
            .map_err(|e| AuthError::provider("update_profile", e))?;

        info!("Profile updated for {}", identity.id);
        Ok(AuthOutcome::ProfileUpdated)
    }

    /// Profile of the signed-in identity; `None` when signed out or not yet created
    pub async fn current_profile(&self) -> AuthResult<Option<Profile>> {
        let Some(identity) = self.session.current_identity() else {
            return Ok(None);
        };

        self.profiles
            .fetch(&identity.id)
            .await
            .map_err(|e| AuthError::provider("load_profile", e))
    }

    pub fn session(&self) -> &SessionReader {
        &self.session
    }
}
