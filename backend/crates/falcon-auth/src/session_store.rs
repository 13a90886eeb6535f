//! Session Store.
//!
//! Holds the current session and publishes it as a stream of snapshots.
//! State is populated from two unordered sources once mounted: a one-shot
//! `get_session` call and the provider's change stream. Whichever resolves
//! first clears `loading`; after a change event has been applied a late
//! one-shot result is discarded.
//!
//! Identity work is queued for the profile sync worker before the snapshot
//! that reports it is published, so anyone who has seen the snapshot can
//! `flush` the queue and observe the ensure.

use crate::{AuthProvider, ProfileSyncHandle, SessionSnapshot, SnapshotSource};

use std::sync::Arc;

use falcon_core::{AuthEvent, Identity, Session};
use futures::Stream;
use log::{debug, info, warn};
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;

pub struct SessionStore {
    writer: SessionWriter,
    provider: Arc<dyn AuthProvider>,
    listener: Option<JoinHandle<()>>,
    initial_fetch: Option<JoinHandle<()>>,
}

/// Identity work produced by applying a new session
enum Transition {
    None,
    /// A different identity took over
    SignedIn(Identity),
    /// Same identity signed in again; the worker skips it if already ensured
    Resync(Identity),
    SignedOut,
}

impl SessionStore {
    pub fn new(provider: Arc<dyn AuthProvider>, sync: ProfileSyncHandle) -> Self {
        let (state, _) = watch::channel(SessionSnapshot::loading());
        Self {
            writer: SessionWriter {
                state: Arc::new(state),
                sync,
                apply_lock: Arc::new(Mutex::new(())),
            },
            provider,
            listener: None,
            initial_fetch: None,
        }
    }

    /// Subscribe to the change stream and start the one-shot session fetch.
    ///
    /// Must be called from within a Tokio runtime. Mounting twice is a no-op.
    pub fn mount(&mut self) {
        if self.listener.is_some() {
            warn!("Session store already mounted");
            return;
        }

        // Subscribe before anything can resolve so no event is missed.
        let mut subscription = self.provider.on_auth_state_change();

        let writer = self.writer.clone();
        self.listener = Some(tokio::spawn(async move {
            while let Some(change) = subscription.next().await {
                debug!("Auth state change: {}", change.event);
                writer
                    .apply(change.session, SnapshotSource::ChangeEvent(change.event))
                    .await;
            }
            debug!("Auth change stream closed");
        }));

        let writer = self.writer.clone();
        let provider = Arc::clone(&self.provider);
        self.initial_fetch = Some(tokio::spawn(async move {
            let session = match provider.get_session().await {
                Ok(session) => session,
                Err(e) => {
                    warn!("Failed to fetch current session, continuing signed out: {e}");
                    None
                }
            };
            writer.apply(session, SnapshotSource::InitialFetch).await;
        }));

        debug!("Session store mounted");
    }

    /// Abort the listener and drop the subscription. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        if let Some(listener) = self.listener.take() {
            listener.abort();
            debug!("Session store listener stopped");
        }
        if let Some(initial_fetch) = self.initial_fetch.take() {
            initial_fetch.abort();
        }
    }

    /// True while the change-stream listener is running
    pub fn is_subscribed(&self) -> bool {
        self.listener
            .as_ref()
            .is_some_and(|listener| !listener.is_finished())
    }

    /// Lazy, restartable stream of snapshots starting with the current one.
    ///
    /// Intermediate snapshots may be coalesced; the latest always arrives.
    pub fn observe(&self) -> impl Stream<Item = SessionSnapshot> + Send + 'static {
        self.reader().into_stream()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.writer.state.borrow().clone()
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.writer.state.borrow().identity().cloned()
    }

    /// Read-only handle for components that only consume session state
    pub fn reader(&self) -> SessionReader {
        SessionReader {
            receiver: self.writer.state.subscribe(),
        }
    }
}

impl Drop for SessionStore {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Write side shared by the listener and the one-shot fetch
#[derive(Clone)]
struct SessionWriter {
    state: Arc<watch::Sender<SessionSnapshot>>,
    sync: ProfileSyncHandle,
    apply_lock: Arc<Mutex<()>>,
}

impl SessionWriter {
    async fn apply(&self, next: Option<Session>, source: SnapshotSource) {
        // Held from the decision through the publish so both see the same prior state.
        let _guard = self.apply_lock.lock().await;

        let transition = {
            let current = self.state.borrow();
            if source == SnapshotSource::InitialFetch
                && matches!(current.source, SnapshotSource::ChangeEvent(_))
            {
                debug!("Discarded initial session fetch, a change event already arrived");
                return;
            }
            transition_for(current.identity(), next.as_ref(), source)
        };

        match transition {
            Transition::SignedIn(identity) => {
                info!("Session established for identity {}", identity.id);
                self.sync.enqueue(identity).await;
            }
            Transition::Resync(identity) => {
                debug!("Sign-in repeated for identity {}", identity.id);
                self.sync.enqueue(identity).await;
            }
            Transition::SignedOut => {
                info!("Session cleared");
                self.sync.forget_all().await;
            }
            Transition::None => {}
        }

        self.state.send_modify(|snapshot| {
            snapshot.loading = false;
            snapshot.session = next;
            snapshot.source = source;
        });
    }
}

fn transition_for(
    previous: Option<&Identity>,
    next: Option<&Session>,
    source: SnapshotSource,
) -> Transition {
    let previous_id = previous.map(|identity| identity.id.as_str());
    match next.map(Session::identity) {
        Some(identity) if previous_id != Some(identity.id.as_str()) => {
            Transition::SignedIn(identity.clone())
        }
        Some(identity)
            if matches!(
                source,
                SnapshotSource::InitialFetch | SnapshotSource::ChangeEvent(AuthEvent::SignedIn)
            ) =>
        {
            Transition::Resync(identity.clone())
        }
        Some(_) => Transition::None,
        None if previous_id.is_some() => Transition::SignedOut,
        None => Transition::None,
    }
}

/// Cloneable read handle on the session state.
#[derive(Debug, Clone)]
pub struct SessionReader {
    receiver: watch::Receiver<SessionSnapshot>,
}

impl SessionReader {
    pub fn snapshot(&self) -> SessionSnapshot {
        self.receiver.borrow().clone()
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.receiver.borrow().identity().cloned()
    }

    pub fn current_session(&self) -> Option<Session> {
        self.receiver.borrow().session.clone()
    }

    /// Wait until either population source has resolved.
    ///
    /// Returns `None` if the store was dropped first.
    pub async fn loaded(&mut self) -> Option<SessionSnapshot> {
        self.wait_until(|snapshot| !snapshot.loading).await
    }

    /// Wait until a change event of the given kind has been applied
    pub async fn wait_for_event(&mut self, event: AuthEvent) -> Option<SessionSnapshot> {
        self.wait_until(move |snapshot| snapshot.source == SnapshotSource::ChangeEvent(event))
            .await
    }

    async fn wait_until(
        &mut self,
        predicate: impl FnMut(&SessionSnapshot) -> bool,
    ) -> Option<SessionSnapshot> {
        self.receiver
            .wait_for(predicate)
            .await
            .ok()
            .map(|snapshot| snapshot.clone())
    }

    pub fn into_stream(self) -> impl Stream<Item = SessionSnapshot> + Send + 'static {
        futures::stream::unfold((self.receiver, true), |(mut receiver, first)| async move {
            if !first && receiver.changed().await.is_err() {
                return None;
            }
            let snapshot = receiver.borrow_and_update().clone();
            Some((snapshot, (receiver, false)))
        })
    }
}
