//! Capacity planning and operational alerting
//!
//! The analytical core of wardstat:
//! - Projection of future admissions, bed, and staff requirements from a
//!   baseline and a set of planning parameters
//! - Threshold-based alert classification over the operational metrics
//!
//! Everything in this module is a pure function of its inputs: no I/O, no
//! clocks, no hidden state. Identical inputs yield identical outputs, which
//! the interactive callers rely on when recomputing per parameter change.

pub mod projector;
pub mod alerts;

pub use projector::{CapacityPlanner, CapacityProjection, PlanningError, PlanningParameters, ProjectionPoint};
pub use alerts::{AlertAssessment, AlertLevel, AlertThresholds, MetricKind};
