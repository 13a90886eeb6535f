use crate::panels::display::format_relative_time;
use crate::{Alert, AlertSeverity};

use chrono::{DateTime, Duration, Utc};

/// Alert center state: a locally owned list with acknowledgement.
#[derive(Debug, Clone, Default)]
pub struct AlertPanel {
    alerts: Vec<Alert>,
}

impl AlertPanel {
    pub fn new(alerts: Vec<Alert>) -> Self {
        Self { alerts }
    }

    /// Seed alerts, timestamped relative to `now`
    pub fn with_fixtures(now: DateTime<Utc>) -> Self {
        Self::new(vec![
            Alert {
                id: String::from("1"),
                severity: AlertSeverity::Safe,
                title: String::from("All Systems Operational"),
                message: String::from("FALCON security systems are running normally"),
                timestamp: now,
                location: Some(String::from("Main Control")),
                acknowledged: true,
            },
            Alert {
                id: String::from("2"),
                severity: AlertSeverity::Info,
                title: String::from("Routine Patrol"),
                message: String::from("Security patrol completed - Sector A"),
                timestamp: now - Duration::minutes(5),
                location: Some(String::from("Sector A")),
                acknowledged: true,
            },
            Alert {
                id: String::from("3"),
                severity: AlertSeverity::Medium,
                title: String::from("Maintenance Reminder"),
                message: String::from("Camera system maintenance due in 48 hours"),
                timestamp: now - Duration::minutes(15),
                location: Some(String::from("Equipment Bay")),
                acknowledged: false,
            },
        ])
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Mark an alert acknowledged. Returns false if the id is unknown or the
    /// alert was already acknowledged.
    pub fn acknowledge(&mut self, alert_id: &str) -> bool {
        match self
            .alerts
            .iter_mut()
            .find(|alert| alert.id == alert_id && !alert.acknowledged)
        {
            Some(alert) => {
                alert.acknowledged = true;
                true
            }
            None => false,
        }
    }

    pub fn unacknowledged_count(&self) -> usize {
        self.alerts.iter().filter(|a| !a.acknowledged).count()
    }

    /// Worst severity among alerts still waiting for acknowledgement
    pub fn highest_unacknowledged(&self) -> Option<AlertSeverity> {
        self.alerts
            .iter()
            .filter(|a| !a.acknowledged)
            .map(|a| a.severity)
            .max_by_key(AlertSeverity::rank)
    }

    pub fn relative_time(&self, alert: &Alert, now: DateTime<Utc>) -> String {
        format_relative_time(alert.timestamp, now)
    }
}
