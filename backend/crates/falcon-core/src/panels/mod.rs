//! Fixture-backed dashboard panels.
//!
//! Every panel owns its own list of display records. Nothing here is persisted
//! and no panel reads another panel's state; derived values are pure functions
//! of the records and the supplied wall-clock time.

pub mod alert;
pub mod alert_panel;
pub mod camera;
pub mod display;
pub mod monitoring_grid;
pub mod personnel;
pub mod personnel_roster;
pub mod status_cards;
pub mod system_metric;
pub mod system_metrics_panel;
