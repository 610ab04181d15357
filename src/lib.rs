//! Wardstat: a hospital operations analytics and capacity planning engine
//!
//! Wardstat ingests operational records (admissions, appointments, staff
//! rosters), reduces them to an operational baseline, and computes capacity
//! projections and threshold-based alerts for the dashboards and reports
//! built on top of it.

pub mod api;
pub mod baseline;
pub mod config;
pub mod error;
pub mod planning;
pub mod records;
pub mod report;
pub mod store;

pub use baseline::{compute_baseline, OperationalBaseline};
pub use error::WardstatError;
pub use planning::{
    AlertAssessment, AlertLevel, AlertThresholds, CapacityPlanner, CapacityProjection,
    MetricKind, PlanningError, PlanningParameters, ProjectionPoint,
};
pub use store::RecordStore;
