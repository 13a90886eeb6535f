use crate::tests::fixed_now;
use crate::{AlertPanel, AlertSeverity};

#[test]
fn given_fixtures_when_created_then_one_alert_is_pending() {
    let panel = AlertPanel::with_fixtures(fixed_now());

    assert_eq!(panel.alerts().len(), 3);
    assert_eq!(panel.unacknowledged_count(), 1);
    assert_eq!(panel.highest_unacknowledged(), Some(AlertSeverity::Medium));
}

#[test]
fn given_pending_alert_when_acknowledged_then_count_drops() {
    let mut panel = AlertPanel::with_fixtures(fixed_now());

    assert!(panel.acknowledge("3"));

    assert_eq!(panel.unacknowledged_count(), 0);
    assert_eq!(panel.highest_unacknowledged(), None);
}

#[test]
fn given_acknowledged_or_unknown_alert_when_acknowledged_then_false() {
    let mut panel = AlertPanel::with_fixtures(fixed_now());

    assert!(!panel.acknowledge("1"));
    assert!(!panel.acknowledge("does-not-exist"));
    assert_eq!(panel.unacknowledged_count(), 1);
}

#[test]
fn given_fixture_alerts_when_formatting_time_then_relative_to_now() {
    let now = fixed_now();
    let panel = AlertPanel::with_fixtures(now);

    let times: Vec<String> = panel
        .alerts()
        .iter()
        .map(|a| panel.relative_time(a, now))
        .collect();

    assert_eq!(times, vec!["Just now", "5m ago", "15m ago"]);
}

#[test]
fn test_severity_rank_orders_critical_highest() {
    assert!(AlertSeverity::Critical.rank() > AlertSeverity::High.rank());
    assert!(AlertSeverity::High.rank() > AlertSeverity::Medium.rank());
    assert!(AlertSeverity::Medium.rank() > AlertSeverity::Info.rank());
    assert!(AlertSeverity::Info.rank() > AlertSeverity::Safe.rank());
}
