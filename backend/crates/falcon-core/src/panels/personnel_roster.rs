use crate::panels::display::{format_check_in, format_elapsed};
use crate::{DutyStatus, PersonnelRecord};

use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Default)]
pub struct PersonnelRoster {
    personnel: Vec<PersonnelRecord>,
}

impl PersonnelRoster {
    pub fn new(personnel: Vec<PersonnelRecord>) -> Self {
        Self { personnel }
    }

    pub fn with_fixtures(now: DateTime<Utc>) -> Self {
        let record = |id: &str,
                      name: &str,
                      role: &str,
                      status,
                      location: &str,
                      shift: Duration,
                      contact: &str,
                      check_in: Duration| PersonnelRecord {
            id: id.to_string(),
            name: name.to_string(),
            role: role.to_string(),
            status,
            location: location.to_string(),
            shift_start: now - shift,
            contact: contact.to_string(),
            last_check_in: now - check_in,
        };

        Self::new(vec![
            record(
                "1",
                "John Rodriguez",
                "Security Chief",
                DutyStatus::OnDuty,
                "Control Room",
                Duration::hours(4),
                "+1-555-0101",
                Duration::minutes(15),
            ),
            record(
                "2",
                "Sarah Chen",
                "Patrol Officer",
                DutyStatus::Patrol,
                "Building Perimeter",
                Duration::hours(3),
                "+1-555-0102",
                Duration::minutes(8),
            ),
            record(
                "3",
                "Mike Johnson",
                "Gate Security",
                DutyStatus::OnDuty,
                "Main Entrance",
                Duration::hours(5),
                "+1-555-0103",
                Duration::minutes(5),
            ),
            record(
                "4",
                "Lisa Park",
                "Systems Monitor",
                DutyStatus::Break,
                "Break Room",
                Duration::hours(6),
                "+1-555-0104",
                Duration::minutes(20),
            ),
            record(
                "5",
                "David Wilson",
                "Patrol Officer",
                DutyStatus::Patrol,
                "Parking Structure",
                Duration::hours(2),
                "+1-555-0105",
                Duration::minutes(12),
            ),
            record(
                "6",
                "Emma Thompson",
                "Incident Response",
                DutyStatus::OnDuty,
                "Ready Room",
                Duration::minutes(210),
                "+1-555-0106",
                Duration::minutes(3),
            ),
        ])
    }

    pub fn personnel(&self) -> &[PersonnelRecord] {
        &self.personnel
    }

    pub fn count(&self, status: DutyStatus) -> usize {
        self.personnel.iter().filter(|p| p.status == status).count()
    }

    /// Staff on duty or on patrol
    pub fn working_count(&self) -> usize {
        self.personnel
            .iter()
            .filter(|p| p.status.is_working())
            .count()
    }

    pub fn shift_time(&self, record: &PersonnelRecord, now: DateTime<Utc>) -> String {
        format_elapsed(record.shift_start, now)
    }

    pub fn last_check_in(&self, record: &PersonnelRecord, now: DateTime<Utc>) -> String {
        format_check_in(record.last_check_in, now)
    }
}
