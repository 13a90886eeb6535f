pub mod auth_facade;
pub mod auth_outcome;
pub mod auth_provider;
pub mod error;
pub mod notification;
pub mod profile_store;
pub mod profile_sync;
pub mod provider_error;
pub mod session_snapshot;
pub mod session_store;

pub use auth_facade::{AuthFacade, Clock};
pub use auth_outcome::AuthOutcome;
pub use auth_provider::{AuthEventBus, AuthProvider, AuthSubscription, SignUpOptions};
pub use error::{AuthError, Result as AuthResult};
pub use notification::{Notification, NotificationLevel, Notifier, report};
pub use profile_store::ProfileStore;
pub use profile_sync::{ProfileSyncHandle, ProfileSyncWorker, ProfileSynchronizer, SyncOutcome};
pub use provider_error::{NO_ROWS_CODE, ProviderError, ProviderResult, UNIQUE_VIOLATION_CODE};
pub use session_snapshot::{SessionSnapshot, SnapshotSource};
pub use session_store::{SessionReader, SessionStore};

#[cfg(test)]
mod tests;
