//! Operational baseline aggregation
//!
//! Reduces the raw record tables to the aggregate statistics the capacity
//! planner and alert classifier run on: admission throughput, bed and staff
//! counts, length of stay, and appointment outcome rates.

use std::collections::HashSet;

use chrono::Datelike;
use serde::{Serialize, Deserialize};

use crate::records::{Admission, Appointment, AppointmentStatus, StaffMember, StaffRole};

/// Currently-observed aggregate operational statistics
///
/// Recomputed whenever the underlying records change; the planning functions
/// treat it as an immutable input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationalBaseline {
    pub monthly_admissions: f64,        // Mean admissions per observed calendar month
    pub total_admissions: usize,
    pub observed_months: usize,         // Distinct (year, month) pairs, floored at 1
    pub current_beds: usize,            // Distinct bed identifiers in use
    pub current_nurses: usize,
    pub current_doctors: usize,
    pub average_length_of_stay: f64,    // Days; 0.0 when no completed stays exist
    pub cancellation_rate: f64,         // 0-100
    pub no_show_rate: f64,              // 0-100
    pub nurse_to_admission_ratio: f64,
    pub doctor_to_admission_ratio: f64,
}

impl OperationalBaseline {
    /// Bed occupancy proxy, as a percentage
    ///
    /// Approximates average concurrently-occupied beds from throughput and
    /// length of stay over a 30-day month, not a point-in-time census:
    /// `avg_daily = LOS * (admissions / (months * 30))`, then divided by the
    /// bed count.
    pub fn occupancy_pct(&self) -> f64 {
        let avg_daily = self.average_length_of_stay
            * (self.total_admissions as f64 / (self.observed_months as f64 * 30.0).max(1.0));
        avg_daily / (self.current_beds as f64).max(1.0) * 100.0
    }
}

/// Compute the baseline from record snapshots
pub fn compute_baseline(
    admissions: &[Admission],
    appointments: &[Appointment],
    staff: &[StaffMember],
) -> OperationalBaseline {
    let observed_months = count_observed_months(admissions).max(1);
    let total_admissions = admissions.len();
    let monthly_admissions = total_admissions as f64 / observed_months as f64;

    let current_beds = admissions
        .iter()
        .map(|a| a.bed_no.as_str())
        .collect::<HashSet<_>>()
        .len();

    let current_nurses = count_staff(staff, StaffRole::Nurse);
    let current_doctors = count_staff(staff, StaffRole::Doctor);

    // Completed stays only; open admissions have no LOS yet and negative
    // values are bad source data.
    let stays: Vec<i64> = admissions
        .iter()
        .filter_map(|a| a.length_of_stay())
        .filter(|&los| los >= 0)
        .collect();
    let average_length_of_stay = if stays.is_empty() {
        0.0
    } else {
        stays.iter().sum::<i64>() as f64 / stays.len() as f64
    };

    let total_appointments = appointments.len().max(1) as f64;
    let cancelled = appointments
        .iter()
        .filter(|a| a.status == AppointmentStatus::Cancelled)
        .count();
    let no_shows = appointments
        .iter()
        .filter(|a| a.status == AppointmentStatus::NoShow)
        .count();
    let cancellation_rate = cancelled as f64 / total_appointments * 100.0;
    let no_show_rate = no_shows as f64 / total_appointments * 100.0;

    // Divisor floored at 1 so an empty admissions table cannot blow up the
    // staffing ratios.
    let admission_divisor = monthly_admissions.max(1.0);
    let nurse_to_admission_ratio = current_nurses as f64 / admission_divisor;
    let doctor_to_admission_ratio = current_doctors as f64 / admission_divisor;

    OperationalBaseline {
        monthly_admissions,
        total_admissions,
        observed_months,
        current_beds,
        current_nurses,
        current_doctors,
        average_length_of_stay,
        cancellation_rate,
        no_show_rate,
        nurse_to_admission_ratio,
        doctor_to_admission_ratio,
    }
}

fn count_observed_months(admissions: &[Admission]) -> usize {
    admissions
        .iter()
        .map(|a| (a.admission_date.year(), a.admission_date.month()))
        .collect::<HashSet<_>>()
        .len()
}

fn count_staff(staff: &[StaffMember], role: StaffRole) -> usize {
    staff
        .iter()
        .filter(|s| s.role == role)
        .map(|s| s.staff_id.as_str())
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn admission(id: &str, bed: &str, admitted: NaiveDate, discharged: Option<NaiveDate>) -> Admission {
        Admission {
            admission_id: id.to_string(),
            patient_id: format!("P-{}", id),
            bed_no: bed.to_string(),
            department: "General".to_string(),
            admission_date: admitted,
            discharge_date: discharged,
        }
    }

    fn appointment(id: &str, status: AppointmentStatus) -> Appointment {
        Appointment {
            appointment_id: id.to_string(),
            patient_id: format!("P-{}", id),
            doctor_id: "D1".to_string(),
            date: date(2025, 3, 1),
            status,
        }
    }

    fn staff(id: &str, role: StaffRole) -> StaffMember {
        StaffMember {
            staff_id: id.to_string(),
            name: id.to_string(),
            role,
            department: "General".to_string(),
        }
    }

    #[test]
    fn test_monthly_admissions_over_observed_months() {
        // Four admissions across two calendar months -> 2.0 per month
        let admissions = vec![
            admission("A1", "B1", date(2025, 1, 5), None),
            admission("A2", "B2", date(2025, 1, 20), None),
            admission("A3", "B1", date(2025, 2, 3), None),
            admission("A4", "B3", date(2025, 2, 14), None),
        ];
        let baseline = compute_baseline(&admissions, &[], &[]);

        assert_eq!(baseline.observed_months, 2);
        assert_eq!(baseline.monthly_admissions, 2.0);
        assert_eq!(baseline.current_beds, 3);
    }

    #[test]
    fn test_average_los_over_completed_stays_only() {
        let admissions = vec![
            admission("A1", "B1", date(2025, 1, 1), Some(date(2025, 1, 5))), // 4 days
            admission("A2", "B2", date(2025, 1, 2), Some(date(2025, 1, 10))), // 8 days
            admission("A3", "B3", date(2025, 1, 3), None),                    // still open
        ];
        let baseline = compute_baseline(&admissions, &[], &[]);
        assert_eq!(baseline.average_length_of_stay, 6.0);
    }

    #[test]
    fn test_no_completed_stays_yields_zero_los() {
        let admissions = vec![admission("A1", "B1", date(2025, 1, 1), None)];
        let baseline = compute_baseline(&admissions, &[], &[]);
        assert_eq!(baseline.average_length_of_stay, 0.0);
    }

    #[test]
    fn test_appointment_rates() {
        let appointments = vec![
            appointment("AP1", AppointmentStatus::Completed),
            appointment("AP2", AppointmentStatus::Cancelled),
            appointment("AP3", AppointmentStatus::NoShow),
            appointment("AP4", AppointmentStatus::Completed),
        ];
        let baseline = compute_baseline(&[], &appointments, &[]);

        assert_eq!(baseline.cancellation_rate, 25.0);
        assert_eq!(baseline.no_show_rate, 25.0);
    }

    #[test]
    fn test_empty_tables_produce_finite_baseline() {
        let baseline = compute_baseline(&[], &[], &[]);

        assert_eq!(baseline.monthly_admissions, 0.0);
        assert_eq!(baseline.cancellation_rate, 0.0);
        assert_eq!(baseline.no_show_rate, 0.0);
        assert_eq!(baseline.nurse_to_admission_ratio, 0.0);
        assert!(baseline.occupancy_pct().is_finite());
    }

    #[test]
    fn test_staff_ratios_floor_divisor_at_one() {
        // 0.5 admissions/month would inflate the ratio; divisor floors at 1
        let admissions = vec![admission("A1", "B1", date(2025, 1, 1), None)];
        let roster = vec![
            staff("N1", StaffRole::Nurse),
            staff("N2", StaffRole::Nurse),
            staff("D1", StaffRole::Doctor),
        ];
        let baseline = compute_baseline(&admissions, &[], &roster);

        assert_eq!(baseline.monthly_admissions, 1.0);
        assert_eq!(baseline.current_nurses, 2);
        assert_eq!(baseline.nurse_to_admission_ratio, 2.0);
        assert_eq!(baseline.doctor_to_admission_ratio, 1.0);
    }

    #[test]
    fn test_occupancy_proxy() {
        // LOS 6, 60 admissions over 2 months, 20 beds:
        // avg_daily = 6 * (60 / 60) = 6.0 -> 6 / 20 * 100 = 30%
        let baseline = OperationalBaseline {
            monthly_admissions: 30.0,
            total_admissions: 60,
            observed_months: 2,
            current_beds: 20,
            current_nurses: 0,
            current_doctors: 0,
            average_length_of_stay: 6.0,
            cancellation_rate: 0.0,
            no_show_rate: 0.0,
            nurse_to_admission_ratio: 0.0,
            doctor_to_admission_ratio: 0.0,
        };
        assert_eq!(baseline.occupancy_pct(), 30.0);
    }
}
