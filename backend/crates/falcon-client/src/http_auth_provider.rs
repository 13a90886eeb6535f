//! `AuthProvider` backed by the hosted auth API.
//!
//! Holds the live session in a [`SessionSlot`] shared with the profile store
//! so table requests are made as the signed-in user. Every state change is
//! mirrored to the optional session file and published on the event bus.

use crate::rest_client::RestClient;
use crate::token_response::{TokenResponse, session_from_signup};
use crate::{ClientResult, SessionFile};

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use falcon_auth::{
    AuthEventBus, AuthProvider, AuthSubscription, ProviderError, ProviderResult, SignUpOptions,
};
use falcon_core::{AuthStateChange, Session, UserMetadata};
use log::{debug, info, warn};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;

/// Current session, shared between the auth provider and the profile store
pub type SessionSlot = Arc<RwLock<Option<Session>>>;

const TOKEN_PATH: &str = "/auth/v1/token";
const SIGNUP_PATH: &str = "/auth/v1/signup";
const LOGOUT_PATH: &str = "/auth/v1/logout";

pub struct HttpAuthProvider {
    client: RestClient,
    slot: SessionSlot,
    bus: AuthEventBus,
    session_file: Option<SessionFile>,
    refresh_margin: Duration,
}

impl HttpAuthProvider {
    /// Create the provider, restoring any persisted session from `session_file`
    pub fn new(
        client: RestClient,
        session_file: Option<SessionFile>,
        refresh_margin: Duration,
    ) -> Self {
        let restored = session_file.as_ref().and_then(SessionFile::load);
        Self {
            client,
            slot: Arc::new(RwLock::new(restored)),
            bus: AuthEventBus::default(),
            session_file,
            refresh_margin,
        }
    }

    pub fn session_slot(&self) -> SessionSlot {
        Arc::clone(&self.slot)
    }

    async fn token_request<B: Serialize>(
        &self,
        grant_type: &str,
        body: &B,
    ) -> ClientResult<Session> {
        let req = self
            .client
            .request(Method::POST, TOKEN_PATH, &[("grant_type", grant_type)], None)?
            .json(body);
        let token: TokenResponse = self.client.execute_json(req).await?;
        Ok(token.into_session(Utc::now()))
    }

    async fn refresh(&self, session: &Session) -> ClientResult<Session> {
        #[derive(Serialize)]
        struct RefreshRequest<'a> {
            refresh_token: &'a str,
        }

        self.token_request(
            "refresh_token",
            &RefreshRequest {
                refresh_token: &session.refresh_token,
            },
        )
        .await
    }

    async fn store(&self, session: Option<Session>) {
        match (&self.session_file, &session) {
            (Some(file), Some(session)) => {
                if let Err(e) = file.save(session) {
                    warn!("Failed to persist session: {e}");
                }
            }
            (Some(file), None) => {
                if let Err(e) = file.remove() {
                    warn!("Failed to remove session file: {e}");
                }
            }
            (None, _) => {}
        }

        *self.slot.write().await = session;
    }
}

#[async_trait]
impl AuthProvider for HttpAuthProvider {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> ProviderResult<Session> {
        #[derive(Serialize)]
        struct PasswordRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let session = self
            .token_request("password", &PasswordRequest { email, password })
            .await?;

        info!("Signed in as {}", session.user.id);
        self.store(Some(session.clone())).await;
        self.bus.publish(AuthStateChange::signed_in(session.clone()));
        Ok(session)
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        options: SignUpOptions,
    ) -> ProviderResult<Option<Session>> {
        #[derive(Serialize)]
        struct SignUpRequest<'a> {
            email: &'a str,
            password: &'a str,
            data: &'a UserMetadata,
        }

        let query: Vec<(&str, &str)> = options
            .email_redirect_to
            .as_deref()
            .map(|redirect| ("redirect_to", redirect))
            .into_iter()
            .collect();
        let req = self
            .client
            .request(Method::POST, SIGNUP_PATH, &query, None)?
            .json(&SignUpRequest {
                email,
                password,
                data: &options.data,
            });
        let body: Value = self.client.execute_json(req).await?;
        let session = session_from_signup(body, Utc::now())?;

        if let Some(session) = &session {
            info!("Signed up and signed in as {}", session.user.id);
            self.store(Some(session.clone())).await;
            self.bus.publish(AuthStateChange::signed_in(session.clone()));
        } else {
            info!("Signed up, awaiting email confirmation");
        }

        Ok(session)
    }

    async fn sign_out(&self) -> ProviderResult<()> {
        let current = self.slot.read().await.clone();

        if let Some(session) = current {
            let req = self.client.request(
                Method::POST,
                LOGOUT_PATH,
                &[],
                Some(&session.access_token),
            )?;
            match self.client.execute_empty(req).await {
                Ok(()) => {}
                // The token is already invalid server-side; finish locally.
                Err(e) if matches!(e.status(), Some(401 | 403 | 404)) => {
                    debug!("Logout reported session already gone: {e}");
                }
                Err(e) => return Err(ProviderError::from(e)),
            }
        }

        self.store(None).await;
        self.bus.publish(AuthStateChange::signed_out());
        info!("Signed out");
        Ok(())
    }

    /// The cached session, refreshed first when it is about to expire.
    async fn get_session(&self) -> ProviderResult<Option<Session>> {
        let Some(session) = self.slot.read().await.clone() else {
            return Ok(None);
        };

        if !session.is_expired(Utc::now(), self.refresh_margin) {
            return Ok(Some(session));
        }

        debug!("Session for {} is expiring, refreshing", session.user.id);
        match self.refresh(&session).await {
            Ok(refreshed) => {
                self.store(Some(refreshed.clone())).await;
                self.bus
                    .publish(AuthStateChange::token_refreshed(refreshed.clone()));
                Ok(Some(refreshed))
            }
            Err(e) if matches!(e.status(), Some(400..=499)) => {
                warn!("Refresh token rejected, discarding session: {e}");
                self.store(None).await;
                Ok(None)
            }
            Err(e) => Err(ProviderError::from(e)),
        }
    }

    fn on_auth_state_change(&self) -> AuthSubscription {
        self.bus.subscribe()
    }
}
