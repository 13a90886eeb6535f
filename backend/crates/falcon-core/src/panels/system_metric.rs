use serde::{Deserialize, Serialize};

const METRIC_MIN: f64 = 0.0;
const METRIC_MAX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Cpu,
    Memory,
    Storage,
    Network,
    Temperature,
    Power,
}

impl MetricKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cpu => "CPU Usage",
            Self::Memory => "Memory",
            Self::Storage => "Storage",
            Self::Network => "Network",
            Self::Temperature => "Temperature",
            Self::Power => "Power",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Self::Network => "Mbps",
            Self::Temperature => "°C",
            _ => "%",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Cpu => "Processor utilization",
            Self::Memory => "RAM utilization",
            Self::Storage => "Disk space used",
            Self::Network => "Data throughput",
            Self::Temperature => "System temperature",
            Self::Power => "UPS battery level",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricStatus {
    Good,
    Warning,
    Critical,
}

impl MetricStatus {
    /// Threshold table. Temperature and power have their own bands, every
    /// other metric is a utilisation percentage.
    pub fn for_value(kind: MetricKind, value: f64) -> Self {
        match kind {
            MetricKind::Temperature if value > 70.0 => Self::Critical,
            MetricKind::Temperature if value > 55.0 => Self::Warning,
            MetricKind::Temperature => Self::Good,
            MetricKind::Power if value < 20.0 => Self::Critical,
            MetricKind::Power if value < 40.0 => Self::Warning,
            MetricKind::Power => Self::Good,
            _ if value > 90.0 => Self::Critical,
            _ if value > 75.0 => Self::Warning,
            _ => Self::Good,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Good => "GOOD",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SystemMetric {
    pub kind: MetricKind,
    pub value: f64,
    pub status: MetricStatus,
}

impl SystemMetric {
    pub fn new(kind: MetricKind, value: f64) -> Self {
        let value = value.clamp(METRIC_MIN, METRIC_MAX);
        Self {
            kind,
            value,
            status: MetricStatus::for_value(kind, value),
        }
    }

    /// Shift the value by `delta`, clamp to [0, 100] and re-derive status
    /// from the new value.
    pub fn jitter(&mut self, delta: f64) {
        self.value = (self.value + delta).clamp(METRIC_MIN, METRIC_MAX);
        self.status = MetricStatus::for_value(self.kind, self.value);
    }

    /// Rounded value with unit, e.g. "38°C"
    pub fn display_value(&self) -> String {
        format!("{}{}", self.value.round() as i64, self.kind.unit())
    }
}
