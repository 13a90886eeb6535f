use crate::{MetricKind, MetricStatus, SystemMetric, SystemMetricsPanel};

use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_status_thresholds_for_utilisation() {
    assert_eq!(MetricStatus::for_value(MetricKind::Cpu, 75.0), MetricStatus::Good);
    assert_eq!(MetricStatus::for_value(MetricKind::Cpu, 75.1), MetricStatus::Warning);
    assert_eq!(MetricStatus::for_value(MetricKind::Storage, 90.1), MetricStatus::Critical);
}

#[test]
fn test_status_thresholds_for_temperature_and_power() {
    assert_eq!(MetricStatus::for_value(MetricKind::Temperature, 56.0), MetricStatus::Warning);
    assert_eq!(MetricStatus::for_value(MetricKind::Temperature, 71.0), MetricStatus::Critical);
    assert_eq!(MetricStatus::for_value(MetricKind::Power, 39.0), MetricStatus::Warning);
    assert_eq!(MetricStatus::for_value(MetricKind::Power, 19.0), MetricStatus::Critical);
    assert_eq!(MetricStatus::for_value(MetricKind::Power, 87.0), MetricStatus::Good);
}

#[test]
fn given_metric_when_jittered_then_status_follows_new_value() {
    let mut metric = SystemMetric::new(MetricKind::Cpu, 88.0);
    assert_eq!(metric.status, MetricStatus::Warning);

    metric.jitter(4.0);

    assert_eq!(metric.value, 92.0);
    assert_eq!(metric.status, MetricStatus::Critical);
}

#[test]
fn given_metric_near_bounds_when_jittered_then_value_is_clamped() {
    let mut low = SystemMetric::new(MetricKind::Power, 2.0);
    low.jitter(-5.0);
    assert_eq!(low.value, 0.0);

    let mut high = SystemMetric::new(MetricKind::Storage, 98.0);
    high.jitter(5.0);
    assert_eq!(high.value, 100.0);
}

#[test]
fn given_panel_when_jittered_then_each_value_moves_at_most_half_amplitude() {
    let mut panel = SystemMetricsPanel::with_fixtures();
    let before: Vec<f64> = panel.metrics().iter().map(|m| m.value).collect();
    let mut rng = StdRng::seed_from_u64(7);

    panel.jitter_with(&mut rng, 10.0);

    for (metric, old) in panel.metrics().iter().zip(before) {
        assert!((metric.value - old).abs() <= 5.0);
        assert_eq!(metric.status, MetricStatus::for_value(metric.kind, metric.value));
    }
}

#[test]
fn test_display_value_rounds() {
    let metric = SystemMetric::new(MetricKind::Temperature, 38.4);
    assert_eq!(metric.display_value(), "38°C");
}
