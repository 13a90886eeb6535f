use crate::tests::fixed_now;
use crate::{CameraStatus, MonitoringGrid};

#[test]
fn test_fixture_grid_counts_by_status() {
    let grid = MonitoringGrid::with_fixtures(fixed_now());

    assert_eq!(grid.cameras().len(), 6);
    assert_eq!(grid.count(CameraStatus::Online), 4);
    assert_eq!(grid.count(CameraStatus::Maintenance), 1);
    assert_eq!(grid.count(CameraStatus::Offline), 1);
    assert_eq!(grid.recording_count(), 4);
}

#[test]
fn test_feed_labels_follow_status() {
    let grid = MonitoringGrid::with_fixtures(fixed_now());
    let labels: Vec<&str> = grid.cameras().iter().map(|c| c.feed_label()).collect();

    assert_eq!(
        labels,
        vec![
            "LIVE",
            "LIVE",
            "LIVE",
            "Under Maintenance",
            "LIVE",
            "Camera Offline"
        ]
    );
}
