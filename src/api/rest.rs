use std::convert::Infallible;
use std::sync::Arc;

use serde::{Serialize, Deserialize};
use warp::reply::Json;
use warp::Filter;

use crate::baseline::{compute_baseline, OperationalBaseline};
use crate::planning::alerts::{assess_all, AlertThresholds};
use crate::planning::projector::{CapacityPlanner, PlanningParameters};
use crate::records::{Admission, Appointment, StaffMember};
use crate::report::{build_report, ReportMeta};
use crate::store::RecordStore;

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

impl ApiResponse {
    fn ok(message: impl Into<String>, data: serde_json::Value) -> Self {
        ApiResponse {
            status: "success".to_string(),
            message: message.into(),
            data: Some(data),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        ApiResponse {
            status: "error".to_string(),
            message: message.into(),
            data: None,
        }
    }
}

/// Projection query parameters; anything omitted falls back to the
/// planning defaults
#[derive(Debug, Deserialize)]
pub struct ProjectionQuery {
    pub growth_rate_pct: Option<f64>,
    pub los_change_pct: Option<f64>,
    pub horizon_months: Option<u32>,
    pub target_occupancy_pct: Option<f64>,
}

impl ProjectionQuery {
    fn into_params(self) -> PlanningParameters {
        let defaults = PlanningParameters::default();
        PlanningParameters {
            growth_rate_pct: self.growth_rate_pct.unwrap_or(defaults.growth_rate_pct),
            los_change_pct: self.los_change_pct.unwrap_or(defaults.los_change_pct),
            horizon_months: self.horizon_months.unwrap_or(defaults.horizon_months),
            target_occupancy_pct: self
                .target_occupancy_pct
                .unwrap_or(defaults.target_occupancy_pct),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    pub title: Option<String>,
    pub author: Option<String>,
    pub department: Option<String>,
}

impl ReportQuery {
    fn into_meta(self) -> ReportMeta {
        let defaults = ReportMeta::default();
        ReportMeta {
            title: self.title.unwrap_or(defaults.title),
            author: self.author.unwrap_or(defaults.author),
            department: self.department.unwrap_or(defaults.department),
        }
    }
}

pub struct RestApi {
    store: Arc<RecordStore>,
    planner: CapacityPlanner,
    thresholds: AlertThresholds,
}

fn baseline_of(store: &RecordStore) -> OperationalBaseline {
    compute_baseline(&store.admissions(), &store.appointments(), &store.staff())
}

impl RestApi {
    pub fn new(store: Arc<RecordStore>, planner: CapacityPlanner, thresholds: AlertThresholds) -> Self {
        RestApi {
            store,
            planner,
            thresholds,
        }
    }

    pub fn routes(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        self.post_admissions()
            .or(self.post_appointments())
            .or(self.post_staff())
            .or(self.get_baseline())
            .or(self.get_timeseries())
            .or(self.get_projection())
            .or(self.get_alerts())
            .or(self.get_report())
    }

    fn post_admissions(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let store = Arc::clone(&self.store);

        warp::path!("records" / "admissions")
            .and(warp::post())
            .and(warp::body::json())
            .and_then(move |batch: Vec<Admission>| {
                let store = Arc::clone(&store);
                async move {
                    let response = match store.add_admissions(batch) {
                        Ok(inserted) => ApiResponse::ok(
                            format!("Stored {} admission(s)", inserted),
                            serde_json::to_value(store.counts()).unwrap(),
                        ),
                        Err(err) => ApiResponse::error(format!("Failed to store admissions: {}", err)),
                    };
                    Ok::<Json, Infallible>(warp::reply::json(&response))
                }
            })
    }

    fn post_appointments(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let store = Arc::clone(&self.store);

        warp::path!("records" / "appointments")
            .and(warp::post())
            .and(warp::body::json())
            .and_then(move |batch: Vec<Appointment>| {
                let store = Arc::clone(&store);
                async move {
                    let response = match store.add_appointments(batch) {
                        Ok(inserted) => ApiResponse::ok(
                            format!("Stored {} appointment(s)", inserted),
                            serde_json::to_value(store.counts()).unwrap(),
                        ),
                        Err(err) => ApiResponse::error(format!("Failed to store appointments: {}", err)),
                    };
                    Ok::<Json, Infallible>(warp::reply::json(&response))
                }
            })
    }

    fn post_staff(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let store = Arc::clone(&self.store);

        warp::path!("records" / "staff")
            .and(warp::post())
            .and(warp::body::json())
            .and_then(move |batch: Vec<StaffMember>| {
                let store = Arc::clone(&store);
                async move {
                    let response = match store.add_staff_members(batch) {
                        Ok(inserted) => ApiResponse::ok(
                            format!("Stored {} staff member(s)", inserted),
                            serde_json::to_value(store.counts()).unwrap(),
                        ),
                        Err(err) => ApiResponse::error(format!("Failed to store staff: {}", err)),
                    };
                    Ok::<Json, Infallible>(warp::reply::json(&response))
                }
            })
    }

    fn get_baseline(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let store = Arc::clone(&self.store);

        warp::path!("ops" / "baseline")
            .and(warp::get())
            .and_then(move || {
                let store = Arc::clone(&store);
                async move {
                    let baseline = baseline_of(&store);
                    let data = serde_json::json!({
                        "baseline": baseline,
                        "occupancy_pct": baseline.occupancy_pct(),
                    });
                    let response = ApiResponse::ok("Baseline computed", data);
                    Ok::<Json, Infallible>(warp::reply::json(&response))
                }
            })
    }

    fn get_projection(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let store = Arc::clone(&self.store);
        let planner = self.planner;

        warp::path!("ops" / "projection")
            .and(warp::get())
            .and(warp::query::<ProjectionQuery>())
            .and_then(move |query: ProjectionQuery| {
                let store = Arc::clone(&store);
                async move {
                    let baseline = baseline_of(&store);
                    let params = query.into_params();

                    let response = match planner.project(&baseline, &params) {
                        Ok(projection) => ApiResponse::ok(
                            "Projection computed",
                            serde_json::to_value(projection).unwrap(),
                        ),
                        Err(err) => ApiResponse::error(err.to_string()),
                    };
                    Ok::<Json, Infallible>(warp::reply::json(&response))
                }
            })
    }

    fn get_timeseries(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let store = Arc::clone(&self.store);
        let planner = self.planner;

        warp::path!("ops" / "projection" / "timeseries")
            .and(warp::get())
            .and(warp::query::<ProjectionQuery>())
            .and_then(move |query: ProjectionQuery| {
                let store = Arc::clone(&store);
                async move {
                    let baseline = baseline_of(&store);
                    let params = query.into_params();

                    let response = match planner.timeseries(&baseline, &params) {
                        Ok(series) => ApiResponse::ok(
                            format!("Projected {} month(s)", series.len()),
                            serde_json::to_value(series).unwrap(),
                        ),
                        Err(err) => ApiResponse::error(err.to_string()),
                    };
                    Ok::<Json, Infallible>(warp::reply::json(&response))
                }
            })
    }

    fn get_alerts(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let store = Arc::clone(&self.store);
        let thresholds = self.thresholds;

        warp::path!("ops" / "alerts")
            .and(warp::get())
            .and_then(move || {
                let store = Arc::clone(&store);
                async move {
                    let baseline = baseline_of(&store);
                    let alerts = assess_all(&baseline, &thresholds);
                    let response = ApiResponse::ok(
                        format!("{} metric(s) assessed", alerts.len()),
                        serde_json::to_value(alerts).unwrap(),
                    );
                    Ok::<Json, Infallible>(warp::reply::json(&response))
                }
            })
    }

    fn get_report(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let store = Arc::clone(&self.store);
        let thresholds = self.thresholds;

        warp::path!("ops" / "report")
            .and(warp::get())
            .and(warp::query::<ReportQuery>())
            .and_then(move |query: ReportQuery| {
                let store = Arc::clone(&store);
                async move {
                    let baseline = baseline_of(&store);
                    let summary = build_report(
                        query.into_meta(),
                        store.distinct_patients(),
                        store.counts().appointments,
                        &baseline,
                        &thresholds,
                    );
                    let response = ApiResponse::ok(
                        "Report summary built",
                        serde_json::to_value(summary).unwrap(),
                    );
                    Ok::<Json, Infallible>(warp::reply::json(&response))
                }
            })
    }
}
