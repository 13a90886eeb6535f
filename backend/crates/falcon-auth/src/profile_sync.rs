//! Profile Synchronizer.
//!
//! Guarantees a `profiles` row exists for each identity that signs in. All
//! ensure work runs on a single worker task fed by a bounded queue, so
//! duplicate triggers for one sign-in are serialized and the repeat is a
//! no-op. The "already ensured" set lives only in memory and is cleared on
//! sign-out.

use crate::{ProfileStore, ProviderResult};

use std::collections::HashSet;
use std::sync::Arc;

use falcon_core::{Identity, NewProfile, Profile};
use log::{debug, error, info, warn};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

/// Result of one ensure attempt. Failures are logged, never raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// A row was already there (or another client created it concurrently)
    Existing,
    /// This call inserted the row
    Created,
    /// Lookup or insert failed; nothing was guaranteed
    Skipped,
}

impl SyncOutcome {
    pub fn is_ensured(&self) -> bool {
        matches!(self, Self::Existing | Self::Created)
    }
}

#[derive(Clone)]
pub struct ProfileSynchronizer {
    store: Arc<dyn ProfileStore>,
}

impl ProfileSynchronizer {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// Make sure a profile exists for `identity`, creating it when missing
    pub async fn ensure(&self, identity: &Identity) -> SyncOutcome {
        match self.store.select_by_user(&identity.id).await {
            Ok(_) => {
                debug!("Profile already exists for {}", identity.id);
                SyncOutcome::Existing
            }
            Err(e) if e.is_no_rows() => self.create(identity).await,
            Err(e) => {
                error!("Profile lookup failed for {}: {e}", identity.id);
                SyncOutcome::Skipped
            }
        }
    }

    async fn create(&self, identity: &Identity) -> SyncOutcome {
        let profile = NewProfile::seeded_from(identity);
        match self.store.insert(profile).await {
            Ok(()) => {
                info!("Created profile for {}", identity.id);
                SyncOutcome::Created
            }
            Err(e) if e.is_unique_violation() => {
                debug!("Profile for {} was created concurrently", identity.id);
                SyncOutcome::Existing
            }
            Err(e) => {
                error!("Failed to create profile for {}: {e}", identity.id);
                SyncOutcome::Skipped
            }
        }
    }

    /// The profile for `identity_id`, `None` when no row exists
    pub async fn fetch(&self, identity_id: &str) -> ProviderResult<Option<Profile>> {
        match self.store.select_by_user(identity_id).await {
            Ok(profile) => Ok(Some(profile)),
            Err(e) if e.is_no_rows() => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn store(&self) -> &Arc<dyn ProfileStore> {
        &self.store
    }
}

enum SyncCommand {
    Ensure(Identity),
    ForgetAll,
    Flush(oneshot::Sender<()>),
}

impl std::fmt::Debug for SyncCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ensure(identity) => write!(f, "Ensure({})", identity.id),
            Self::ForgetAll => write!(f, "ForgetAll"),
            Self::Flush(_) => write!(f, "Flush"),
        }
    }
}

/// Serial consumer of the sync queue
pub struct ProfileSyncWorker {
    synchronizer: ProfileSynchronizer,
    receiver: mpsc::Receiver<SyncCommand>,
    ensured: HashSet<String>,
}

impl ProfileSyncWorker {
    /// Start the worker. It runs until every handle has been dropped.
    pub fn spawn(
        synchronizer: ProfileSynchronizer,
        capacity: usize,
    ) -> (ProfileSyncHandle, JoinHandle<()>) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        let worker = Self {
            synchronizer,
            receiver,
            ensured: HashSet::new(),
        };
        let join = tokio::spawn(worker.run());
        (ProfileSyncHandle { sender }, join)
    }

    async fn run(mut self) {
        debug!("Profile sync worker started");
        while let Some(command) = self.receiver.recv().await {
            match command {
                SyncCommand::Ensure(identity) => self.ensure(identity).await,
                SyncCommand::ForgetAll => {
                    debug!("Clearing {} ensured identities", self.ensured.len());
                    self.ensured.clear();
                }
                SyncCommand::Flush(done) => {
                    let _ = done.send(());
                }
            }
        }
        debug!("Profile sync worker stopped");
    }

    async fn ensure(&mut self, identity: Identity) {
        if self.ensured.contains(&identity.id) {
            debug!("Profile for {} already ensured this session", identity.id);
            return;
        }

        if self.synchronizer.ensure(&identity).await.is_ensured() {
            self.ensured.insert(identity.id);
        }
    }
}

/// Producer side of the sync queue. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ProfileSyncHandle {
    sender: mpsc::Sender<SyncCommand>,
}

impl ProfileSyncHandle {
    /// Queue an ensure for `identity`. Returns false if the worker is gone.
    pub async fn enqueue(&self, identity: Identity) -> bool {
        self.send(SyncCommand::Ensure(identity)).await
    }

    /// Reset the in-memory guard, e.g. after sign-out
    pub async fn forget_all(&self) -> bool {
        self.send(SyncCommand::ForgetAll).await
    }

    /// Wait until everything queued before this call has been processed
    pub async fn flush(&self) -> bool {
        let (done, wait) = oneshot::channel();
        if !self.send(SyncCommand::Flush(done)).await {
            return false;
        }
        wait.await.is_ok()
    }

    async fn send(&self, command: SyncCommand) -> bool {
        match self.sender.send(command).await {
            Ok(()) => true,
            Err(e) => {
                warn!("Profile sync worker is not running, dropped {:?}", e.0);
                false
            }
        }
    }
}
