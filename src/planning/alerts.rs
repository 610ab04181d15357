//! Operational alert classification
//!
//! Maps each operational metric to a three-level severity against a pair of
//! thresholds. Classification never fails: any finite value lands in exactly
//! one of RED, AMBER, or GREEN, with ties going to the more severe bucket.

use serde::{Serialize, Deserialize};

use crate::baseline::OperationalBaseline;

/// Alert severity, ordered worst first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertLevel {
    Red,
    Amber,
    Green,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Red => "RED",
            AlertLevel::Amber => "AMBER",
            AlertLevel::Green => "GREEN",
        }
    }
}

/// The four monitored operational metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    BedOccupancy,
    CancellationRate,
    AverageLos,
    NoShowRate,
}

impl MetricKind {
    pub fn metric_name(&self) -> &'static str {
        match self {
            MetricKind::BedOccupancy => "Bed Occupancy",
            MetricKind::CancellationRate => "Cancellation Rate",
            MetricKind::AverageLos => "Average Length of Stay",
            MetricKind::NoShowRate => "No-Show Rate",
        }
    }
}

/// High/mid threshold pair for one metric
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ThresholdPair {
    pub high: f64, // At or above -> RED
    pub mid: f64,  // At or above (below high) -> AMBER
}

/// Threshold table for all four metrics
///
/// Defaults reproduce the values existing reports are calibrated against;
/// individual pairs can be overridden from the config file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertThresholds {
    pub bed_occupancy: ThresholdPair,
    pub cancellation_rate: ThresholdPair,
    pub average_los: ThresholdPair,
    pub no_show_rate: ThresholdPair,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        AlertThresholds {
            bed_occupancy: ThresholdPair { high: 85.0, mid: 70.0 },
            cancellation_rate: ThresholdPair { high: 15.0, mid: 8.0 },
            average_los: ThresholdPair { high: 10.0, mid: 7.0 },
            no_show_rate: ThresholdPair { high: 10.0, mid: 5.0 },
        }
    }
}

impl AlertThresholds {
    pub fn for_metric(&self, kind: MetricKind) -> ThresholdPair {
        match kind {
            MetricKind::BedOccupancy => self.bed_occupancy,
            MetricKind::CancellationRate => self.cancellation_rate,
            MetricKind::AverageLos => self.average_los,
            MetricKind::NoShowRate => self.no_show_rate,
        }
    }
}

/// One classified metric with its generated report text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertAssessment {
    pub metric_name: String,
    pub level: AlertLevel,
    pub value: f64,
    pub title: String,
    pub message: String,
}

fn level_for(value: f64, thresholds: ThresholdPair) -> AlertLevel {
    if value >= thresholds.high {
        AlertLevel::Red
    } else if value >= thresholds.mid {
        AlertLevel::Amber
    } else {
        AlertLevel::Green
    }
}

/// Classify one metric value
///
/// The message always embeds the raw input value; rounding for display is
/// the caller's concern.
pub fn classify(value: f64, kind: MetricKind, thresholds: &AlertThresholds) -> AlertAssessment {
    let pair = thresholds.for_metric(kind);
    let level = level_for(value, pair);

    let (title, message) = match (kind, level) {
        (MetricKind::BedOccupancy, AlertLevel::Red) => (
            "Critical Bed Occupancy",
            format!("Occupancy at {}% - above {}% critical threshold. Immediate action required.", value, pair.high),
        ),
        (MetricKind::BedOccupancy, AlertLevel::Amber) => (
            "High Bed Occupancy",
            format!("Occupancy at {}% - approaching critical. Monitor closely.", value),
        ),
        (MetricKind::BedOccupancy, AlertLevel::Green) => (
            "Bed Occupancy Normal",
            format!("Occupancy at {}% - within healthy range.", value),
        ),
        (MetricKind::CancellationRate, AlertLevel::Red) => (
            "High Cancellation Rate",
            format!("Cancellation rate {}% - significant revenue impact likely.", value),
        ),
        (MetricKind::CancellationRate, AlertLevel::Amber) => (
            "Elevated Cancellation Rate",
            format!("Cancellation rate {}% - consider reminder interventions.", value),
        ),
        (MetricKind::CancellationRate, AlertLevel::Green) => (
            "Cancellation Rate Normal",
            format!("Cancellation rate {}% - within acceptable range.", value),
        ),
        (MetricKind::AverageLos, AlertLevel::Red) => (
            "Long Average LOS",
            format!("Avg LOS {} days - possible discharge bottlenecks. Review processes.", value),
        ),
        (MetricKind::AverageLos, AlertLevel::Amber) => (
            "Above-Average LOS",
            format!("Avg LOS {} days - above average. Review discharge planning.", value),
        ),
        (MetricKind::AverageLos, AlertLevel::Green) => (
            "LOS Within Range",
            format!("Avg LOS {} days - efficient patient throughput.", value),
        ),
        (MetricKind::NoShowRate, AlertLevel::Red) => (
            "No-Show Rate Critical",
            format!("No-show rate {}% - immediate reminder campaign needed.", value),
        ),
        (MetricKind::NoShowRate, AlertLevel::Amber) => (
            "No-Show Rate Elevated",
            format!("No-show rate {}% - recommend 24h SMS reminders.", value),
        ),
        (MetricKind::NoShowRate, AlertLevel::Green) => (
            "No-Show Rate Normal",
            format!("No-show rate {}% - within acceptable range.", value),
        ),
    };

    AlertAssessment {
        metric_name: kind.metric_name().to_string(),
        level,
        value,
        title: title.to_string(),
        message,
    }
}

/// Classify all four metrics in report order
pub fn assess_all(baseline: &OperationalBaseline, thresholds: &AlertThresholds) -> Vec<AlertAssessment> {
    vec![
        classify(baseline.occupancy_pct(), MetricKind::BedOccupancy, thresholds),
        classify(baseline.cancellation_rate, MetricKind::CancellationRate, thresholds),
        classify(baseline.average_length_of_stay, MetricKind::AverageLos, thresholds),
        classify(baseline.no_show_rate, MetricKind::NoShowRate, thresholds),
    ]
}
