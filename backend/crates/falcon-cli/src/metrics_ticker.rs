//! Periodic metric drift for the dashboard.

use std::time::Duration;

use falcon_core::SystemMetricsPanel;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// One published state of the metrics panel
#[derive(Debug, Clone)]
pub struct MetricsUpdate {
    /// Number of jitter rounds applied so far
    pub tick: u64,
    pub panel: SystemMetricsPanel,
}

/// Owns the metrics panel on a background task and jitters it every period.
/// Stops on `teardown` or drop.
pub struct MetricsTicker {
    task: Option<JoinHandle<()>>,
    updates: watch::Receiver<MetricsUpdate>,
}

impl MetricsTicker {
    pub fn spawn(panel: SystemMetricsPanel, period: Duration, amplitude: f64) -> Self {
        Self::spawn_with_rng(panel, period, amplitude, StdRng::from_os_rng())
    }

    pub fn spawn_with_rng(
        panel: SystemMetricsPanel,
        period: Duration,
        amplitude: f64,
        mut rng: StdRng,
    ) -> Self {
        let (sender, updates) = watch::channel(MetricsUpdate {
            tick: 0,
            panel: panel.clone(),
        });

        let task = tokio::spawn(async move {
            let mut panel = panel;
            let mut tick = 0;
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately.
            interval.tick().await;

            loop {
                interval.tick().await;
                panel.jitter_with(&mut rng, amplitude);
                tick += 1;
                if sender
                    .send(MetricsUpdate {
                        tick,
                        panel: panel.clone(),
                    })
                    .is_err()
                {
                    debug!("No metrics observers left, stopping ticker");
                    break;
                }
            }
        });

        Self {
            task: Some(task),
            updates,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<MetricsUpdate> {
        self.updates.clone()
    }

    pub fn latest(&self) -> MetricsUpdate {
        self.updates.borrow().clone()
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    pub fn teardown(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("Metrics ticker stopped");
        }
    }
}

impl Drop for MetricsTicker {
    fn drop(&mut self) {
        self.teardown();
    }
}
