//! Capacity projection
//!
//! Projects future monthly admissions, bed demand, and staffing requirements
//! from an `OperationalBaseline` and user-supplied `PlanningParameters`.
//!
//! Two growth semantics coexist on purpose: the headline projection applies
//! the full growth rate immediately, while the per-month time series ramps
//! linearly from the baseline up to the full rate at the horizon boundary.

use std::fmt;

use serde::{Serialize, Deserialize};

use crate::baseline::OperationalBaseline;

/// Assumed days per month in bed-demand arithmetic
const DAYS_PER_MONTH: f64 = 30.0;

/// Default rough revenue proxy per admission, in currency units
pub const DEFAULT_REVENUE_PER_ADMISSION: f64 = 5000.0;

#[derive(Debug)]
pub enum PlanningError {
    InvalidParameter(String),
}

impl fmt::Display for PlanningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanningError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
        }
    }
}

impl std::error::Error for PlanningError {}

/// User-supplied what-if inputs, transient per request
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlanningParameters {
    pub growth_rate_pct: f64,       // Expected volume growth; negative models decline
    pub los_change_pct: f64,        // Relative change in average length of stay
    pub horizon_months: u32,        // Number of future months to project
    pub target_occupancy_pct: f64,  // Must be > 0
}

impl Default for PlanningParameters {
    fn default() -> Self {
        PlanningParameters {
            growth_rate_pct: 20.0,
            los_change_pct: 0.0,
            horizon_months: 12,
            target_occupancy_pct: 80.0,
        }
    }
}

impl PlanningParameters {
    /// Reject inputs the projection math cannot handle
    ///
    /// The UI in front of this core constrains its sliders, but the core
    /// validates independently.
    pub fn validate(&self) -> Result<(), PlanningError> {
        if !self.growth_rate_pct.is_finite() {
            return Err(PlanningError::InvalidParameter(
                format!("growth_rate_pct must be finite, got {}", self.growth_rate_pct),
            ));
        }
        if !self.los_change_pct.is_finite() {
            return Err(PlanningError::InvalidParameter(
                format!("los_change_pct must be finite, got {}", self.los_change_pct),
            ));
        }
        if self.horizon_months == 0 {
            return Err(PlanningError::InvalidParameter(
                "horizon_months must be at least 1".to_string(),
            ));
        }
        if !self.target_occupancy_pct.is_finite() || self.target_occupancy_pct <= 0.0 {
            return Err(PlanningError::InvalidParameter(
                format!("target_occupancy_pct must be > 0, got {}", self.target_occupancy_pct),
            ));
        }
        Ok(())
    }
}

/// Projected resource requirements at the full growth rate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapacityProjection {
    pub projected_monthly_admissions: f64,
    pub projected_average_los: f64,
    pub projected_beds_required: f64,
    pub projected_nurses_required: f64,
    pub projected_doctors_required: f64,
    pub bed_gap: f64,     // Signed; positive means shortfall
    pub nurse_gap: f64,
    pub doctor_gap: f64,
    pub estimated_annual_revenue_leakage: f64,
}

/// One month of the ramped projection series
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub month: u32,                  // 1-based month index into the horizon
    pub projected_admissions: f64,
    pub projected_beds: f64,
}

/// Headline admissions projection: the growth rate applied in full
pub fn project_monthly_admissions(monthly_admissions: f64, growth_rate_pct: f64) -> f64 {
    monthly_admissions * (1.0 + growth_rate_pct / 100.0)
}

pub fn project_average_los(average_length_of_stay: f64, los_change_pct: f64) -> f64 {
    average_length_of_stay * (1.0 + los_change_pct / 100.0)
}

/// Bed-days demanded over a 30-day month, divided by the occupancy target
pub fn project_beds_required(
    projected_monthly_admissions: f64,
    projected_los: f64,
    target_occupancy_pct: f64,
) -> Result<f64, PlanningError> {
    if !target_occupancy_pct.is_finite() || target_occupancy_pct <= 0.0 {
        return Err(PlanningError::InvalidParameter(
            format!("target_occupancy_pct must be > 0, got {}", target_occupancy_pct),
        ));
    }
    Ok((projected_monthly_admissions * projected_los) / (DAYS_PER_MONTH * target_occupancy_pct / 100.0))
}

/// Staffing requirement at projected volume
///
/// The ratio is taken against current admissions, so multiplying by the
/// growth factor here applies growth a second time. Existing planning
/// reports expect exactly this figure.
pub fn project_staff_required(
    projected_monthly_admissions: f64,
    staff_to_admission_ratio: f64,
    growth_rate_pct: f64,
) -> f64 {
    projected_monthly_admissions * staff_to_admission_ratio * (1.0 + growth_rate_pct / 100.0)
}

/// Signed requirement gap; positive means shortfall, no clamping
pub fn gap(required: f64, current: f64) -> f64 {
    required - current
}

/// Annualized revenue lost to cancelled appointments, as a simple
/// multiplicative proxy
pub fn estimate_annual_revenue_leakage(
    cancellation_rate_pct: f64,
    projected_monthly_admissions: f64,
    revenue_per_admission: f64,
) -> f64 {
    (cancellation_rate_pct / 100.0) * projected_monthly_admissions * 12.0 * revenue_per_admission
}

/// Per-month series with growth ramping linearly across the horizon
///
/// Month m of H gets `base * (1 + g/100 * m/H)` admissions, so the series
/// starts near the baseline and reaches the headline projection exactly at
/// the final month.
pub fn project_timeseries(
    baseline: &OperationalBaseline,
    params: &PlanningParameters,
) -> Result<Vec<ProjectionPoint>, PlanningError> {
    params.validate()?;

    let projected_los = project_average_los(baseline.average_length_of_stay, params.los_change_pct);
    let horizon = params.horizon_months as f64;

    let mut points = Vec::with_capacity(params.horizon_months as usize);
    for month in 1..=params.horizon_months {
        let ramp = (params.growth_rate_pct / 100.0) * (month as f64 / horizon);
        let admissions = baseline.monthly_admissions * (1.0 + ramp);
        let beds = project_beds_required(admissions, projected_los, params.target_occupancy_pct)?;
        points.push(ProjectionPoint {
            month,
            projected_admissions: admissions,
            projected_beds: beds,
        });
    }
    Ok(points)
}

/// Capacity planner with its configured revenue assumption
#[derive(Debug, Clone, Copy)]
pub struct CapacityPlanner {
    revenue_per_admission: f64,
}

impl Default for CapacityPlanner {
    fn default() -> Self {
        CapacityPlanner {
            revenue_per_admission: DEFAULT_REVENUE_PER_ADMISSION,
        }
    }
}

impl CapacityPlanner {
    pub fn new(revenue_per_admission: f64) -> Self {
        CapacityPlanner { revenue_per_admission }
    }

    /// Full projection for the headline figures
    pub fn project(
        &self,
        baseline: &OperationalBaseline,
        params: &PlanningParameters,
    ) -> Result<CapacityProjection, PlanningError> {
        params.validate()?;

        let projected_monthly_admissions =
            project_monthly_admissions(baseline.monthly_admissions, params.growth_rate_pct);
        let projected_average_los =
            project_average_los(baseline.average_length_of_stay, params.los_change_pct);
        let projected_beds_required = project_beds_required(
            projected_monthly_admissions,
            projected_average_los,
            params.target_occupancy_pct,
        )?;
        let projected_nurses_required = project_staff_required(
            projected_monthly_admissions,
            baseline.nurse_to_admission_ratio,
            params.growth_rate_pct,
        );
        let projected_doctors_required = project_staff_required(
            projected_monthly_admissions,
            baseline.doctor_to_admission_ratio,
            params.growth_rate_pct,
        );

        Ok(CapacityProjection {
            projected_monthly_admissions,
            projected_average_los,
            projected_beds_required,
            projected_nurses_required,
            projected_doctors_required,
            bed_gap: gap(projected_beds_required, baseline.current_beds as f64),
            nurse_gap: gap(projected_nurses_required, baseline.current_nurses as f64),
            doctor_gap: gap(projected_doctors_required, baseline.current_doctors as f64),
            estimated_annual_revenue_leakage: estimate_annual_revenue_leakage(
                baseline.cancellation_rate,
                projected_monthly_admissions,
                self.revenue_per_admission,
            ),
        })
    }

    /// Ramped per-month series for trend visualization
    pub fn timeseries(
        &self,
        baseline: &OperationalBaseline,
        params: &PlanningParameters,
    ) -> Result<Vec<ProjectionPoint>, PlanningError> {
        project_timeseries(baseline, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> OperationalBaseline {
        OperationalBaseline {
            monthly_admissions: 500.0,
            total_admissions: 6000,
            observed_months: 12,
            current_beds: 100,
            current_nurses: 40,
            current_doctors: 25,
            average_length_of_stay: 5.0,
            cancellation_rate: 10.0,
            no_show_rate: 4.0,
            nurse_to_admission_ratio: 40.0 / 500.0,
            doctor_to_admission_ratio: 25.0 / 500.0,
        }
    }

    fn params() -> PlanningParameters {
        PlanningParameters {
            growth_rate_pct: 20.0,
            los_change_pct: 0.0,
            horizon_months: 12,
            target_occupancy_pct: 80.0,
        }
    }

    #[test]
    fn test_zero_growth_is_identity() {
        assert_eq!(project_monthly_admissions(500.0, 0.0), 500.0);
        assert_eq!(project_average_los(5.0, 0.0), 5.0);
    }

    #[test]
    fn test_negative_growth_is_valid_decline() {
        assert_eq!(project_monthly_admissions(500.0, -10.0), 450.0);
    }

    #[test]
    fn test_headline_scenario() {
        // 500 adm/mo, 100 beds, LOS 5.0; +20% growth, 12 months, 80% occupancy
        let planner = CapacityPlanner::default();
        let projection = planner.project(&baseline(), &params()).unwrap();

        assert_eq!(projection.projected_monthly_admissions, 600.0);
        assert_eq!(projection.projected_average_los, 5.0);
        assert_eq!(projection.projected_beds_required, 125.0);
        assert_eq!(projection.bed_gap, 25.0);
    }

    #[test]
    fn test_revenue_leakage_scenario() {
        let leakage = estimate_annual_revenue_leakage(10.0, 600.0, 5000.0);
        assert_eq!(leakage, 3_600_000.0);
    }

    #[test]
    fn test_beds_monotonic_in_admissions_and_los() {
        let low = project_beds_required(500.0, 5.0, 80.0).unwrap();
        assert!(project_beds_required(600.0, 5.0, 80.0).unwrap() > low);
        assert!(project_beds_required(500.0, 6.0, 80.0).unwrap() > low);
    }

    #[test]
    fn test_beds_monotonic_decreasing_in_occupancy_target() {
        let at_80 = project_beds_required(500.0, 5.0, 80.0).unwrap();
        let at_90 = project_beds_required(500.0, 5.0, 90.0).unwrap();
        assert!(at_90 < at_80);
    }

    #[test]
    fn test_zero_occupancy_rejected() {
        assert!(project_beds_required(500.0, 5.0, 0.0).is_err());
        assert!(project_beds_required(500.0, 5.0, -10.0).is_err());

        let mut bad = params();
        bad.target_occupancy_pct = 0.0;
        assert!(matches!(bad.validate(), Err(PlanningError::InvalidParameter(_))));
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let mut bad = params();
        bad.horizon_months = 0;
        assert!(matches!(bad.validate(), Err(PlanningError::InvalidParameter(_))));
    }

    #[test]
    fn test_non_finite_growth_rejected() {
        let mut bad = params();
        bad.growth_rate_pct = f64::NAN;
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_timeseries_length_and_endpoint() {
        let series = project_timeseries(&baseline(), &params()).unwrap();
        assert_eq!(series.len(), 12);

        // The ramp reaches the headline projection exactly at the horizon
        let last = series.last().unwrap();
        assert_eq!(last.month, 12);
        assert!((last.projected_admissions - 600.0).abs() < 1e-9);

        // Month 1 sits strictly between the baseline and the final value
        let first = series.first().unwrap();
        assert!(first.projected_admissions > 500.0);
        assert!(first.projected_admissions < last.projected_admissions);
    }

    #[test]
    fn test_timeseries_beds_use_projected_los() {
        let mut p = params();
        p.los_change_pct = 20.0; // LOS 5.0 -> 6.0
        let series = project_timeseries(&baseline(), &p).unwrap();

        let last = series.last().unwrap();
        let expected = (600.0 * 6.0) / (30.0 * 0.80);
        assert!((last.projected_beds - expected).abs() < 1e-9);
    }

    #[test]
    fn test_staff_projection_compounds_growth() {
        // Ratio 0.08 at 500 adm/mo; +20% growth applies to the projected
        // volume and again as a factor: 600 * 0.08 * 1.2 = 57.6
        let nurses = project_staff_required(600.0, 0.08, 20.0);
        assert!((nurses - 57.6).abs() < 1e-9);
    }

    #[test]
    fn test_gap_is_signed() {
        assert_eq!(gap(125.0, 100.0), 25.0);
        assert_eq!(gap(90.0, 100.0), -10.0);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let planner = CapacityPlanner::default();
        let a = planner.project(&baseline(), &params()).unwrap();
        let b = planner.project(&baseline(), &params()).unwrap();

        assert_eq!(a.projected_beds_required.to_bits(), b.projected_beds_required.to_bits());
        assert_eq!(a.estimated_annual_revenue_leakage.to_bits(), b.estimated_annual_revenue_leakage.to_bits());
    }
}
