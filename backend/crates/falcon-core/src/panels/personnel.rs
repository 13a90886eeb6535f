use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DutyStatus {
    OnDuty,
    OffDuty,
    Break,
    Patrol,
}

impl DutyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnDuty => "on-duty",
            Self::OffDuty => "off-duty",
            Self::Break => "break",
            Self::Patrol => "patrol",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OnDuty => "ON DUTY",
            Self::OffDuty => "OFF DUTY",
            Self::Break => "BREAK",
            Self::Patrol => "PATROL",
        }
    }

    /// Counted as staff on duty on the dashboard
    pub fn is_working(&self) -> bool {
        matches!(self, Self::OnDuty | Self::Patrol)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonnelRecord {
    pub id: String,
    pub name: String,
    pub role: String,
    pub status: DutyStatus,
    pub location: String,
    pub shift_start: DateTime<Utc>,
    pub contact: String,
    pub last_check_in: DateTime<Utc>,
}

impl PersonnelRecord {
    /// Two-letter avatar initials
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}
