//! Wires the session store, profile sync worker and auth facade together and
//! runs one command against them.

use crate::dashboard::{Header, render_profile};
use crate::{CliError, CliResult, Commands, Dashboard, MetricsTicker, ProfileCommands};

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use falcon_auth::{
    AuthError, AuthFacade, AuthOutcome, AuthProvider, Notification, Notifier, ProfileStore,
    ProfileSyncHandle, ProfileSyncWorker, ProfileSynchronizer, SessionStore, report,
};
use falcon_config::Config;
use falcon_core::AuthEvent;
use log::{debug, warn};
use tokio::task::JoinHandle;

/// How long to wait for the change stream to echo a sign-in or sign-out
const EVENT_WAIT: Duration = Duration::from_secs(5);

pub struct App {
    store: SessionStore,
    sync: ProfileSyncHandle,
    sync_worker: JoinHandle<()>,
    facade: AuthFacade,
    notifier: Arc<dyn Notifier>,
    metric_interval: Duration,
    metric_jitter: f64,
}

impl App {
    /// Build and mount everything, then wait for the initial session state
    pub async fn start(
        config: &Config,
        auth: Arc<dyn AuthProvider>,
        profiles: Arc<dyn ProfileStore>,
        notifier: Arc<dyn Notifier>,
    ) -> CliResult<Self> {
        let synchronizer = ProfileSynchronizer::new(profiles);
        let (sync, sync_worker) =
            ProfileSyncWorker::spawn(synchronizer.clone(), config.sync.queue_capacity);

        let mut store = SessionStore::new(Arc::clone(&auth), sync.clone());
        let facade = AuthFacade::new(auth, synchronizer, store.reader())
            .with_email_redirect(config.backend.email_redirect_to.as_str());

        store.mount();
        store.reader().loaded().await;
        debug!(
            "Initial session resolved (signed in: {})",
            store.snapshot().is_authenticated()
        );

        Ok(Self {
            store,
            sync,
            sync_worker,
            facade,
            notifier,
            metric_interval: Duration::from_secs(config.panels.metric_interval_secs),
            metric_jitter: config.panels.metric_jitter,
        })
    }

    pub async fn run(&self, command: Commands) -> CliResult<()> {
        match command {
            Commands::SignIn { email, password } => {
                report(
                    self.notifier.as_ref(),
                    self.facade.sign_in(&email, &password).await,
                )?;
                self.announce(AuthEvent::SignedIn).await;
            }
            Commands::SignUp {
                email,
                password,
                full_name,
                site_name,
                mobile_number,
            } => {
                let seed = Commands::sign_up_seed(full_name, site_name, mobile_number);
                let outcome = report(
                    self.notifier.as_ref(),
                    self.facade.sign_up(&email, &password, seed).await,
                )?;
                if matches!(
                    outcome,
                    AuthOutcome::SignedUp {
                        confirmation_required: false
                    }
                ) {
                    self.announce(AuthEvent::SignedIn).await;
                }
            }
            Commands::SignOut => {
                report(self.notifier.as_ref(), self.facade.sign_out().await)?;
                self.announce(AuthEvent::SignedOut).await;
            }
            Commands::Status => self.status(),
            Commands::Profile { action } => match action.to_patch() {
                Some(patch) => {
                    report(
                        self.notifier.as_ref(),
                        self.facade.update_profile(patch).await,
                    )?;
                }
                None => self.show_profile().await?,
            },
            Commands::Dashboard { ticks } => self.dashboard(ticks).await,
        }

        Ok(())
    }

    /// Drain sync work queued for every published snapshot, then stop listening
    pub async fn shutdown(mut self) {
        self.sync.flush().await;
        self.store.teardown();
        drop(self.sync);
        drop(self.store);
        if let Err(e) = self.sync_worker.await {
            warn!("Profile sync worker ended abnormally: {e}");
        }
    }

    /// Wait for the change stream to apply `event` and show its notification
    async fn announce(&self, event: AuthEvent) {
        let mut reader = self.store.reader();
        match tokio::time::timeout(EVENT_WAIT, reader.wait_for_event(event)).await {
            Ok(Some(_)) => {
                if let Some(notification) = Notification::for_event(event) {
                    self.notifier.notify(notification);
                }
            }
            Ok(None) => debug!("Session store closed before {event} arrived"),
            Err(_) => warn!("{}", CliError::timeout("auth state change")),
        }
    }

    fn status(&self) {
        let snapshot = self.store.snapshot();
        match &snapshot.session {
            Some(session) => {
                let identity = session.identity();
                println!(
                    "Signed in as {} ({})",
                    identity.email.as_deref().unwrap_or("no email"),
                    identity.id
                );
                println!("Session expires {}", session.expires_at.to_rfc3339());
            }
            None => println!("Not signed in"),
        }
    }

    async fn show_profile(&self) -> CliResult<()> {
        let Some(identity) = self.store.current_identity() else {
            let error = AuthError::not_authenticated();
            self.notifier.notify(Notification::error(error.user_message()));
            return Err(error.into());
        };

        match self.facade.current_profile().await {
            Ok(Some(profile)) => println!("{}", render_profile(&profile)),
            Ok(None) => println!("No profile yet for {}", identity.email_or_empty()),
            Err(e) => {
                self.notifier.notify(Notification::error(e.user_message()));
                return Err(e.into());
            }
        }

        Ok(())
    }

    async fn dashboard(&self, ticks: Option<u32>) {
        let profile = match self.facade.current_profile().await {
            Ok(profile) => profile,
            Err(e) => {
                warn!("Could not load profile for dashboard: {e}");
                None
            }
        };
        let header = Header::for_profile(profile.as_ref());

        let mut dashboard = Dashboard::with_fixtures(Utc::now());
        println!("{}", dashboard.render(&header, Utc::now()));

        let Some(ticks) = ticks.filter(|ticks| *ticks > 0) else {
            return;
        };

        let mut ticker = MetricsTicker::spawn(
            dashboard.metrics.clone(),
            self.metric_interval,
            self.metric_jitter,
        );
        let mut updates = ticker.subscribe();
        for _ in 0..ticks {
            if updates.changed().await.is_err() {
                break;
            }
            dashboard.metrics = updates.borrow_and_update().panel.clone();
            println!();
            println!("{}", dashboard.render_metrics());
        }
        ticker.teardown();
    }
}
