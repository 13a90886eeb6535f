use crate::{MetricKind, MetricStatus, SystemMetric};

use rand::Rng;

#[derive(Debug, Clone, Default)]
pub struct SystemMetricsPanel {
    metrics: Vec<SystemMetric>,
}

impl SystemMetricsPanel {
    pub fn new(metrics: Vec<SystemMetric>) -> Self {
        Self { metrics }
    }

    pub fn with_fixtures() -> Self {
        Self::new(vec![
            SystemMetric::new(MetricKind::Cpu, 23.0),
            SystemMetric::new(MetricKind::Memory, 68.0),
            SystemMetric::new(MetricKind::Storage, 45.0),
            SystemMetric::new(MetricKind::Network, 12.0),
            SystemMetric::new(MetricKind::Temperature, 38.0),
            SystemMetric::new(MetricKind::Power, 87.0),
        ])
    }

    pub fn metrics(&self) -> &[SystemMetric] {
        &self.metrics
    }

    /// Apply one round of simulated drift: each metric moves by a uniform
    /// delta in [-amplitude/2, amplitude/2).
    pub fn jitter_with<R: Rng>(&mut self, rng: &mut R, amplitude: f64) {
        for metric in &mut self.metrics {
            let delta = (rng.random::<f64>() - 0.5) * amplitude;
            metric.jitter(delta);
        }
    }

    pub fn count(&self, status: MetricStatus) -> usize {
        self.metrics.iter().filter(|m| m.status == status).count()
    }

    pub fn worst_status(&self) -> MetricStatus {
        if self.count(MetricStatus::Critical) > 0 {
            MetricStatus::Critical
        } else if self.count(MetricStatus::Warning) > 0 {
            MetricStatus::Warning
        } else {
            MetricStatus::Good
        }
    }
}
