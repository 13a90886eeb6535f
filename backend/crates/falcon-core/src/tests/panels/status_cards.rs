use crate::tests::fixed_now;
use crate::{
    AlertPanel, CardStatus, MetricKind, MonitoringGrid, PersonnelRoster, SystemMetric,
    SystemMetricsPanel, derive_status_cards,
};

#[test]
fn given_fixtures_when_deriving_cards_then_values_come_from_panels() {
    let now = fixed_now();
    let cards = derive_status_cards(
        &AlertPanel::with_fixtures(now),
        &MonitoringGrid::with_fixtures(now),
        &PersonnelRoster::with_fixtures(now),
        &SystemMetricsPanel::with_fixtures(),
    );

    let values: Vec<&str> = cards.iter().map(|c| c.value.as_str()).collect();
    assert_eq!(values, vec!["OPERATIONAL", "4", "ELEVATED", "5"]);
}

#[test]
fn given_all_alerts_acknowledged_when_deriving_then_alert_level_low() {
    let now = fixed_now();
    let mut alerts = AlertPanel::with_fixtures(now);
    alerts.acknowledge("3");

    let cards = derive_status_cards(
        &alerts,
        &MonitoringGrid::with_fixtures(now),
        &PersonnelRoster::with_fixtures(now),
        &SystemMetricsPanel::with_fixtures(),
    );

    assert_eq!(cards[2].value, "LOW");
    assert_eq!(cards[2].status, CardStatus::Safe);
}

#[test]
fn given_critical_metric_when_deriving_then_system_degraded() {
    let metrics = SystemMetricsPanel::new(vec![SystemMetric::new(MetricKind::Temperature, 80.0)]);

    let cards = derive_status_cards(
        &AlertPanel::default(),
        &MonitoringGrid::default(),
        &PersonnelRoster::default(),
        &metrics,
    );

    assert_eq!(cards[0].value, "DEGRADED");
    assert_eq!(cards[0].status, CardStatus::Critical);
    assert_eq!(cards[1].value, "0");
}
