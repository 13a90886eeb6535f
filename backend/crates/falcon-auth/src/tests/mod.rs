
use crate::{
    AuthEventBus, AuthFacade, AuthProvider, AuthSubscription, ProfileStore, ProfileSyncHandle,
    ProfileSyncWorker, ProfileSynchronizer, ProviderError, ProviderResult, SessionStore,
    SignUpOptions, SnapshotSource, UNIQUE_VIOLATION_CODE,
};

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use falcon_core::{
    AuthEvent, AuthStateChange, Identity, NewProfile, Profile, ProfileUpsert, Session,
};
use futures::StreamExt;
use tokio::sync::{Notify, Semaphore};

pub(crate) const WRONG_PASSWORD: &str = "wrong-password";

pub(crate) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub(crate) fn identity(id: &str, email: &str) -> Identity {
    Identity::new(id, Some(email.to_string()))
}

pub(crate) fn session_for(identity: Identity) -> Session {
    Session {
        access_token: format!("access-{}", identity.id),
        refresh_token: format!("refresh-{}", identity.id),
        expires_at: fixed_now() + Duration::hours(1),
        user: identity,
    }
}

// =========================================================================
// Fake auth provider
// =========================================================================

#[derive(Default)]
pub(crate) struct FakeAuthProvider {
    pub(crate) bus: AuthEventBus,
    initial_session: Mutex<Option<Session>>,
    fail_get_session: bool,
    gate: Option<Semaphore>,
    get_session_returned: Notify,
    pub(crate) calls: Mutex<Vec<String>>,
    pub(crate) sign_up_options: Mutex<Option<SignUpOptions>>,
}

impl FakeAuthProvider {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_initial_session(session: Session) -> Self {
        let provider = Self::default();
        *provider.initial_session.lock().unwrap() = Some(session);
        provider
    }

    pub(crate) fn failing_get_session() -> Self {
        Self {
            fail_get_session: true,
            ..Self::default()
        }
    }

    /// `get_session` blocks until `release_get_session` is called
    pub(crate) fn gated(session: Option<Session>) -> Self {
        Self {
            initial_session: Mutex::new(session),
            gate: Some(Semaphore::new(0)),
            ..Self::default()
        }
    }

    pub(crate) fn release_get_session(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    pub(crate) async fn get_session_finished(&self) {
        self.get_session_returned.notified().await;
    }

    pub(crate) fn emit(&self, change: AuthStateChange) {
        self.bus.publish(change);
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
    }
}

#[async_trait]
impl AuthProvider for FakeAuthProvider {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> ProviderResult<Session> {
        self.record("sign_in");
        if password == WRONG_PASSWORD {
            return Err(ProviderError::rejected(
                Some(400),
                Some(String::from("invalid_credentials")),
                "Invalid login credentials",
            ));
        }

        let session = session_for(identity("u1", email));
        self.bus.publish(AuthStateChange::signed_in(session.clone()));
        Ok(session)
    }

    async fn sign_up(
        &self,
        _email: &str,
        _password: &str,
        options: SignUpOptions,
    ) -> ProviderResult<Option<Session>> {
        self.record("sign_up");
        *self.sign_up_options.lock().unwrap() = Some(options);
        Ok(None)
    }

    async fn sign_out(&self) -> ProviderResult<()> {
        self.record("sign_out");
        self.bus.publish(AuthStateChange::signed_out());
        Ok(())
    }

    async fn get_session(&self) -> ProviderResult<Option<Session>> {
        self.record("get_session");
        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }

        let result = if self.fail_get_session {
            Err(ProviderError::transport("connection refused"))
        } else {
            Ok(self.initial_session.lock().unwrap().clone())
        };
        self.get_session_returned.notify_one();
        result
    }

    fn on_auth_state_change(&self) -> AuthSubscription {
        self.bus.subscribe()
    }
}

// =========================================================================
// In-memory profile store
// =========================================================================

#[derive(Default)]
pub(crate) struct InMemoryProfileStore {
    rows: Mutex<HashMap<String, Profile>>,
    pub(crate) inserts: Mutex<Vec<NewProfile>>,
    pub(crate) upserts: Mutex<Vec<ProfileUpsert>>,
    select_calls: Mutex<usize>,
    select_failure: Mutex<Option<String>>,
    /// Simulate another client inserting between our lookup and insert
    race_on_insert: Mutex<bool>,
}

impl InMemoryProfileStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_profile(profile: Profile) -> Self {
        let store = Self::default();
        store
            .rows
            .lock()
            .unwrap()
            .insert(profile.identity_id.clone(), profile);
        store
    }

    pub(crate) fn fail_selects(&self, message: Option<&str>) {
        *self.select_failure.lock().unwrap() = message.map(str::to_string);
    }

    pub(crate) fn race_next_insert(&self) {
        *self.race_on_insert.lock().unwrap() = true;
    }

    pub(crate) fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub(crate) fn row(&self, user_id: &str) -> Option<Profile> {
        self.rows.lock().unwrap().get(user_id).cloned()
    }

    pub(crate) fn select_calls(&self) -> usize {
        *self.select_calls.lock().unwrap()
    }

    pub(crate) fn inserts(&self) -> Vec<NewProfile> {
        self.inserts.lock().unwrap().clone()
    }

    pub(crate) fn upserts(&self) -> Vec<ProfileUpsert> {
        self.upserts.lock().unwrap().clone()
    }
}

pub(crate) fn blank_profile(user_id: &str) -> Profile {
    Profile {
        identity_id: user_id.to_string(),
        full_name: String::new(),
        site_name: String::new(),
        email: String::new(),
        mobile_number: String::new(),
        site_latitude: None,
        site_longitude: None,
        updated_at: None,
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn select_by_user(&self, user_id: &str) -> ProviderResult<Profile> {
        *self.select_calls.lock().unwrap() += 1;
        if let Some(message) = self.select_failure.lock().unwrap().clone() {
            return Err(ProviderError::rejected(Some(500), None, message));
        }

        self.rows
            .lock()
            .unwrap()
            .get(user_id)
            .cloned()
            .ok_or_else(|| ProviderError::no_rows("The result contains 0 rows"))
    }

    async fn insert(&self, profile: NewProfile) -> ProviderResult<()> {
        let mut race = self.race_on_insert.lock().unwrap();
        if *race {
            *race = false;
            self.rows
                .lock()
                .unwrap()
                .insert(profile.user_id.clone(), blank_profile(&profile.user_id));
        }

        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(&profile.user_id) {
            return Err(ProviderError::rejected(
                Some(409),
                Some(UNIQUE_VIOLATION_CODE.to_string()),
                "duplicate key value violates unique constraint",
            ));
        }

        rows.insert(
            profile.user_id.clone(),
            Profile {
                identity_id: profile.user_id.clone(),
                full_name: profile.full_name.clone(),
                site_name: profile.site_name.clone(),
                email: profile.email.clone(),
                mobile_number: profile.mobile_number.clone(),
                ..blank_profile(&profile.user_id)
            },
        );
        self.inserts.lock().unwrap().push(profile);
        Ok(())
    }

    async fn upsert(&self, upsert: ProfileUpsert) -> ProviderResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .entry(upsert.user_id.clone())
            .or_insert_with(|| blank_profile(&upsert.user_id));
        upsert.patch.apply_to(row);
        row.updated_at = Some(upsert.updated_at);
        self.upserts.lock().unwrap().push(upsert);
        Ok(())
    }
}

// =========================================================================
// Wiring
// =========================================================================

pub(crate) struct Harness {
    pub(crate) provider: Arc<FakeAuthProvider>,
    pub(crate) profiles: Arc<InMemoryProfileStore>,
    pub(crate) sync: ProfileSyncHandle,
    pub(crate) store: SessionStore,
    pub(crate) facade: AuthFacade,
}

impl Harness {
    pub(crate) fn new() -> Self {
        Self::with(FakeAuthProvider::new(), InMemoryProfileStore::new())
    }

    pub(crate) fn with(provider: FakeAuthProvider, profiles: InMemoryProfileStore) -> Self {
        let provider = Arc::new(provider);
        let profiles = Arc::new(profiles);

        let auth: Arc<dyn AuthProvider> = provider.clone();
        let storage: Arc<dyn ProfileStore> = profiles.clone();
        let synchronizer = ProfileSynchronizer::new(storage);
        let (sync, _worker) = ProfileSyncWorker::spawn(synchronizer.clone(), 8);

        let store = SessionStore::new(auth.clone(), sync.clone());
        let facade = AuthFacade::new(auth, synchronizer, store.reader())
            .with_email_redirect("http://127.0.0.1:8080/")
            .with_clock(Arc::new(fixed_now));

        Self {
            provider,
            profiles,
            sync,
            store,
            facade,
        }
    }

    /// Mount and wait for the initial state to resolve
    pub(crate) async fn mounted(mut self) -> Self {
        self.store.mount();
        self.store.reader().loaded().await.unwrap();
        self
    }

    /// Deliver a sign-in event and wait for its side effects.
    ///
    /// Waits for the snapshot published after the emit, so a repeated
    /// sign-in is not mistaken for the previous one.
    pub(crate) async fn sign_in_as(&self, identity: Identity) {
        let mut snapshots = Box::pin(self.store.observe());
        snapshots.next().await.unwrap();
        self.provider
            .emit(AuthStateChange::signed_in(session_for(identity)));
        while let Some(snapshot) = snapshots.next().await {
            if snapshot.source == SnapshotSource::ChangeEvent(AuthEvent::SignedIn) {
                break;
            }
        }
        self.sync.flush().await;
    }
}
