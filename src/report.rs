//! Report summary assembly
//!
//! Bundles the computed KPI cards and operational alerts into a single
//! serializable summary for the export layer. Rendering (PDF layout, charts,
//! theming) is owned by that layer; this module only supplies the numbers
//! and generated text.

use chrono::Utc;
use serde::{Serialize, Deserialize};

use crate::baseline::OperationalBaseline;
use crate::planning::alerts::{assess_all, AlertAssessment, AlertThresholds};

/// One KPI card: a label and an already-formatted display value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Kpi {
    pub label: String,
    pub value: String,
}

/// Report header fields supplied by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    pub title: String,
    pub author: String,
    pub department: String,
}

impl Default for ReportMeta {
    fn default() -> Self {
        ReportMeta {
            title: "Hospital Operations Report".to_string(),
            author: "Hospital Administrator".to_string(),
            department: "Operations Management".to_string(),
        }
    }
}

/// Everything the export layer needs to render a report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub title: String,
    pub author: String,
    pub department: String,
    pub generated_at: String, // RFC 3339
    pub kpis: Vec<Kpi>,
    pub alerts: Vec<AlertAssessment>,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn kpi(label: &str, value: String) -> Kpi {
    Kpi {
        label: label.to_string(),
        value,
    }
}

/// Build the standard KPI strip in report order
pub fn build_kpis(
    total_patients: usize,
    total_appointments: usize,
    baseline: &OperationalBaseline,
) -> Vec<Kpi> {
    vec![
        kpi("Total Patients", format!("{}", total_patients)),
        kpi("Appointments", format!("{}", total_appointments)),
        kpi("Bed Occupancy", format!("{}%", round1(baseline.occupancy_pct()))),
        kpi("Cancel Rate", format!("{}%", round1(baseline.cancellation_rate))),
        kpi("Avg LOS (days)", format!("{}", round1(baseline.average_length_of_stay))),
        kpi("No-Show Rate", format!("{}%", round1(baseline.no_show_rate))),
        kpi("Total Beds", format!("{}", baseline.current_beds)),
        kpi("Nurses", format!("{}", baseline.current_nurses)),
    ]
}

/// Assemble a full report summary from the current baseline
pub fn build_report(
    meta: ReportMeta,
    total_patients: usize,
    total_appointments: usize,
    baseline: &OperationalBaseline,
    thresholds: &AlertThresholds,
) -> ReportSummary {
    ReportSummary {
        title: meta.title,
        author: meta.author,
        department: meta.department,
        generated_at: Utc::now().to_rfc3339(),
        kpis: build_kpis(total_patients, total_appointments, baseline),
        alerts: assess_all(baseline, thresholds),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn baseline() -> OperationalBaseline {
        OperationalBaseline {
            monthly_admissions: 250.0,
            total_admissions: 3000,
            observed_months: 12,
            current_beds: 120,
            current_nurses: 45,
            current_doctors: 30,
            average_length_of_stay: 6.25,
            cancellation_rate: 9.04,
            no_show_rate: 4.46,
            nurse_to_admission_ratio: 0.18,
            doctor_to_admission_ratio: 0.12,
        }
    }

    #[test]
    fn test_kpi_strip_order_and_formatting() {
        let kpis = build_kpis(1842, 5210, &baseline());

        let labels: Vec<&str> = kpis.iter().map(|k| k.label.as_str()).collect();
        assert_eq!(labels, vec![
            "Total Patients", "Appointments", "Bed Occupancy", "Cancel Rate",
            "Avg LOS (days)", "No-Show Rate", "Total Beds", "Nurses",
        ]);

        assert_eq!(kpis[0].value, "1842");
        assert_eq!(kpis[3].value, "9%");      // 9.04 rounds to 9
        assert_eq!(kpis[4].value, "6.3");     // 6.25 rounds to 6.3
        assert_eq!(kpis[6].value, "120");
    }

    #[test]
    fn test_report_carries_meta_and_alerts() {
        let summary = build_report(
            ReportMeta::default(),
            1842,
            5210,
            &baseline(),
            &AlertThresholds::default(),
        );

        assert_eq!(summary.title, "Hospital Operations Report");
        assert_eq!(summary.kpis.len(), 8);
        assert_eq!(summary.alerts.len(), 4);
        assert!(!summary.generated_at.is_empty());
    }
}
