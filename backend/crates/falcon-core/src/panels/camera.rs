use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraStatus {
    Online,
    Offline,
    Maintenance,
}

impl CameraStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Maintenance => "maintenance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Online => "ONLINE",
            Self::Offline => "OFFLINE",
            Self::Maintenance => "MAINTENANCE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Camera {
    pub id: String,
    pub name: String,
    pub location: String,
    pub status: CameraStatus,
    pub last_seen: DateTime<Utc>,
    pub recording: bool,
}

impl Camera {
    /// What the feed tile shows
    pub fn feed_label(&self) -> &'static str {
        match self.status {
            CameraStatus::Online => "LIVE",
            CameraStatus::Offline => "Camera Offline",
            CameraStatus::Maintenance => "Under Maintenance",
        }
    }
}
