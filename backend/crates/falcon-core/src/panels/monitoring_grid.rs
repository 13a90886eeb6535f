use crate::{Camera, CameraStatus};

use chrono::{DateTime, Duration, Utc};

/// Surveillance grid: a fixed set of camera tiles.
#[derive(Debug, Clone, Default)]
pub struct MonitoringGrid {
    cameras: Vec<Camera>,
}

impl MonitoringGrid {
    pub fn new(cameras: Vec<Camera>) -> Self {
        Self { cameras }
    }

    pub fn with_fixtures(now: DateTime<Utc>) -> Self {
        let camera = |id: &str, name: &str, location: &str, status, ago: Duration, recording| Camera {
            id: id.to_string(),
            name: name.to_string(),
            location: location.to_string(),
            status,
            last_seen: now - ago,
            recording,
        };

        Self::new(vec![
            camera("1", "Main Entrance", "Gate A", CameraStatus::Online, Duration::zero(), true),
            camera("2", "Parking Lot North", "Sector B", CameraStatus::Online, Duration::zero(), true),
            camera("3", "Building Perimeter", "East Side", CameraStatus::Online, Duration::zero(), true),
            camera("4", "Emergency Exit", "Back Exit", CameraStatus::Maintenance, Duration::minutes(30), false),
            camera("5", "Loading Dock", "West Side", CameraStatus::Online, Duration::zero(), true),
            camera("6", "Roof Access", "Building Top", CameraStatus::Offline, Duration::hours(2), false),
        ])
    }

    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }

    pub fn count(&self, status: CameraStatus) -> usize {
        self.cameras.iter().filter(|c| c.status == status).count()
    }

    pub fn recording_count(&self) -> usize {
        self.cameras.iter().filter(|c| c.recording).count()
    }
}
