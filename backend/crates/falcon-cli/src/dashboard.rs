//! Text rendering of the command center.

use chrono::{DateTime, Utc};
use falcon_core::{
    AlertPanel, MonitoringGrid, PersonnelRoster, Profile, StatusCard, SystemMetricsPanel,
    DEFAULT_GREETING_NAME, DEFAULT_SITE_LABEL, derive_status_cards,
};

/// Shown for profile fields that were left empty
pub const NOT_CONFIGURED: &str = "Not configured";

/// Who the dashboard is greeting and where they are stationed
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub greeting: String,
    pub site_label: String,
    pub coordinates: Option<String>,
}

impl Header {
    pub fn for_profile(profile: Option<&Profile>) -> Self {
        match profile {
            Some(profile) => Self {
                greeting: profile.greeting_name().to_string(),
                site_label: profile.site_label().to_string(),
                coordinates: profile.coordinates(),
            },
            None => Self {
                greeting: DEFAULT_GREETING_NAME.to_string(),
                site_label: DEFAULT_SITE_LABEL.to_string(),
                coordinates: None,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub alerts: AlertPanel,
    pub grid: MonitoringGrid,
    pub roster: PersonnelRoster,
    pub metrics: SystemMetricsPanel,
}

impl Dashboard {
    pub fn with_fixtures(now: DateTime<Utc>) -> Self {
        Self {
            alerts: AlertPanel::with_fixtures(now),
            grid: MonitoringGrid::with_fixtures(now),
            roster: PersonnelRoster::with_fixtures(now),
            metrics: SystemMetricsPanel::with_fixtures(),
        }
    }

    pub fn status_cards(&self) -> Vec<StatusCard> {
        derive_status_cards(&self.alerts, &self.grid, &self.roster, &self.metrics)
    }

    pub fn render(&self, header: &Header, now: DateTime<Utc>) -> String {
        let mut lines = vec![
            String::from("FALCON COMMAND CENTER"),
            format!("Welcome back, {}", header.greeting),
            match &header.coordinates {
                Some(coordinates) => format!("{} ({coordinates})", header.site_label),
                None => header.site_label.clone(),
            },
            String::new(),
        ];

        for card in self.status_cards() {
            lines.push(format!(
                "[{:<8}] {:<14} {:<12} {}",
                card.status.label(),
                card.title,
                card.value,
                card.description
            ));
        }

        lines.push(String::new());
        lines.push(format!(
            "ALERTS ({} unacknowledged)",
            self.alerts.unacknowledged_count()
        ));
        for alert in self.alerts.alerts() {
            lines.push(format!(
                "  {:<8} {:<32} {:<12} {}",
                alert.severity.label(),
                alert.title,
                self.alerts.relative_time(alert, now),
                alert.location.as_deref().unwrap_or("-")
            ));
        }

        lines.push(String::new());
        lines.push(String::from("CAMERAS"));
        for camera in self.grid.cameras() {
            lines.push(format!(
                "  {:<6} {:<24} {:<20} {}{}",
                camera.id,
                camera.name,
                camera.location,
                camera.feed_label(),
                if camera.recording { " (REC)" } else { "" }
            ));
        }

        lines.push(String::new());
        lines.push(format!(
            "PERSONNEL ({} on duty)",
            self.roster.working_count()
        ));
        for record in self.roster.personnel() {
            lines.push(format!(
                "  {:<2} {:<18} {:<20} {:<9} shift {:<7} check-in {}",
                record.initials(),
                record.name,
                record.role,
                record.status.label(),
                self.roster.shift_time(record, now),
                self.roster.last_check_in(record, now)
            ));
        }

        lines.push(String::new());
        lines.push(self.render_metrics());

        lines.join("\n")
    }

    pub fn render_metrics(&self) -> String {
        let mut lines = vec![String::from("SYSTEM METRICS")];
        for metric in self.metrics.metrics() {
            lines.push(format!(
                "  {:<12} {:>6}  {:<8} {}",
                metric.kind.name(),
                metric.display_value(),
                metric.status.label(),
                metric.kind.description()
            ));
        }
        lines.join("\n")
    }
}

/// Site details card for `profile show`
pub fn render_profile(profile: &Profile) -> String {
    let mut lines = vec![
        format!("Name:     {}", profile.greeting_name()),
        format!("Site:     {}", configured(&profile.site_name)),
    ];
    if let Some(coordinates) = profile.coordinates() {
        lines.push(format!("Location: {coordinates}"));
    }
    lines.push(format!("Email:    {}", configured(&profile.email)));
    lines.push(format!("Mobile:   {}", configured(&profile.mobile_number)));
    if let Some(updated_at) = profile.updated_at {
        lines.push(format!("Updated:  {}", updated_at.to_rfc3339()));
    }
    lines.join("\n")
}

fn configured(value: &str) -> &str {
    if value.trim().is_empty() {
        NOT_CONFIGURED
    } else {
        value
    }
}
