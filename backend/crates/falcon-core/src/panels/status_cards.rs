//! Summary cards across the top of the dashboard.

use crate::{
    AlertPanel, AlertSeverity, CameraStatus, MetricStatus, MonitoringGrid, PersonnelRoster,
    SystemMetricsPanel,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStatus {
    Safe,
    Warning,
    Critical,
}

impl CardStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Safe => "SAFE",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCard {
    pub title: &'static str,
    pub value: String,
    pub description: &'static str,
    pub status: CardStatus,
}

/// Derive the four summary cards from current panel state
pub fn derive_status_cards(
    alerts: &AlertPanel,
    grid: &MonitoringGrid,
    roster: &PersonnelRoster,
    metrics: &SystemMetricsPanel,
) -> Vec<StatusCard> {
    let system = match metrics.worst_status() {
        MetricStatus::Critical => StatusCard {
            title: "System Status",
            value: String::from("DEGRADED"),
            description: "One or more systems need attention",
            status: CardStatus::Critical,
        },
        _ => StatusCard {
            title: "System Status",
            value: String::from("OPERATIONAL"),
            description: "All systems functioning normally",
            status: CardStatus::Safe,
        },
    };

    let offline = grid.count(CameraStatus::Offline);
    let monitors = StatusCard {
        title: "Active Monitors",
        value: grid.count(CameraStatus::Online).to_string(),
        description: "Surveillance systems online",
        status: if offline > 0 {
            CardStatus::Warning
        } else {
            CardStatus::Safe
        },
    };

    let alert_level = match alerts.highest_unacknowledged() {
        Some(AlertSeverity::Critical) => StatusCard {
            title: "Alert Level",
            value: String::from("CRITICAL"),
            description: "Immediate response required",
            status: CardStatus::Critical,
        },
        Some(AlertSeverity::High) => StatusCard {
            title: "Alert Level",
            value: String::from("HIGH"),
            description: "Threat under investigation",
            status: CardStatus::Critical,
        },
        Some(AlertSeverity::Medium) => StatusCard {
            title: "Alert Level",
            value: String::from("ELEVATED"),
            description: "Pending items need review",
            status: CardStatus::Warning,
        },
        _ => StatusCard {
            title: "Alert Level",
            value: String::from("LOW"),
            description: "No immediate threats detected",
            status: CardStatus::Safe,
        },
    };

    let personnel = StatusCard {
        title: "Personnel",
        value: roster.working_count().to_string(),
        description: "Staff members on duty",
        status: CardStatus::Safe,
    };

    vec![system, monitors, alert_level, personnel]
}
