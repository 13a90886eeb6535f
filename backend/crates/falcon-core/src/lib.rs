pub mod error;
pub mod models;
pub mod panels;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::auth_event::AuthEvent;
pub use models::auth_state_change::AuthStateChange;
pub use models::identity::Identity;
pub use models::new_profile::NewProfile;
pub use models::profile::{DEFAULT_GREETING_NAME, DEFAULT_SITE_LABEL, Profile};
pub use models::profile_patch::{MAX_PROFILE_TEXT_LENGTH, ProfilePatch};
pub use models::profile_upsert::ProfileUpsert;
pub use models::session::Session;
pub use models::user_metadata::{MAX_EXTRA_METADATA_KEYS, UserMetadata};
pub use panels::alert::{Alert, AlertSeverity};
pub use panels::alert_panel::AlertPanel;
pub use panels::camera::{Camera, CameraStatus};
pub use panels::monitoring_grid::MonitoringGrid;
pub use panels::personnel::{DutyStatus, PersonnelRecord};
pub use panels::personnel_roster::PersonnelRoster;
pub use panels::status_cards::{CardStatus, StatusCard, derive_status_cards};
pub use panels::system_metric::{MetricKind, MetricStatus, SystemMetric};
pub use panels::system_metrics_panel::SystemMetricsPanel;
