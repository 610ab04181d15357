//! Hospital operational record types
//!
//! Typed equivalents of the source workbook tables that wardstat aggregates:
//! bed/admission episodes, outpatient appointments, and staff rosters.

use chrono::NaiveDate;
use serde::{Serialize, Deserialize};

/// A single bed admission episode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admission {
    pub admission_id: String,     // Unique admission identifier
    pub patient_id: String,       // Patient occupying the bed
    pub bed_no: String,           // Bed identifier
    pub department: String,       // Owning department name
    pub admission_date: NaiveDate,
    pub discharge_date: Option<NaiveDate>, // None while the stay is still open
}

impl Admission {
    /// Length of stay in whole days, available once the patient is discharged
    pub fn length_of_stay(&self) -> Option<i64> {
        self.discharge_date
            .map(|discharge| (discharge - self.admission_date).num_days())
    }
}

/// An outpatient appointment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub appointment_id: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub date: NaiveDate,
    pub status: AppointmentStatus,
}

/// Appointment outcome, parsed leniently from free-text status labels
///
/// Source systems are inconsistent about spelling ("cancelled" vs "canceled",
/// "no-show" vs "no show"), so parsing normalizes case and accepts the common
/// variants. Unrecognized labels are preserved as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AppointmentStatus {
    Completed,
    Scheduled,
    Cancelled,
    NoShow,
    Other(String),
}

impl AppointmentStatus {
    pub fn parse(label: &str) -> Self {
        let lower = label.trim().to_lowercase();
        if lower == "cancelled" || lower == "canceled" {
            AppointmentStatus::Cancelled
        } else if contains_no_show(&lower) {
            AppointmentStatus::NoShow
        } else if lower == "completed" {
            AppointmentStatus::Completed
        } else if lower == "scheduled" {
            AppointmentStatus::Scheduled
        } else {
            AppointmentStatus::Other(label.trim().to_string())
        }
    }

    pub fn as_label(&self) -> &str {
        match self {
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::Cancelled => "Cancelled",
            AppointmentStatus::NoShow => "No-Show",
            AppointmentStatus::Other(label) => label,
        }
    }
}

/// Matches "noshow", "no-show", "no show" and similar labels anywhere in the
/// (already lowercased) string: "no", at most one separator, then "show".
fn contains_no_show(lower: &str) -> bool {
    let bytes = lower.as_bytes();
    bytes.windows(6).any(|w| w == b"noshow")
        || bytes.windows(7).any(|w| w.starts_with(b"no") && &w[3..] == b"show")
}

impl From<String> for AppointmentStatus {
    fn from(label: String) -> Self {
        AppointmentStatus::parse(&label)
    }
}

impl From<AppointmentStatus> for String {
    fn from(status: AppointmentStatus) -> Self {
        status.as_label().to_string()
    }
}

/// Clinical staff roles tracked by the capacity model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    Nurse,
    Doctor,
}

/// A rostered staff member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffMember {
    pub staff_id: String,
    pub name: String,
    pub role: StaffRole,
    pub department: String,
}
