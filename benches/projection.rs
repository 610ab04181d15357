use criterion::{black_box, criterion_group, criterion_main, Criterion};

use wardstat::baseline::OperationalBaseline;
use wardstat::planning::projector::project_timeseries;
use wardstat::planning::{CapacityPlanner, PlanningParameters};

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
        nurse_to_admission_ratio: 0.08,
        doctor_to_admission_ratio: 0.05,
    }
}

fn bench_projection(c: &mut Criterion) {
    let planner = CapacityPlanner::default();
    let base = baseline();
    let params = PlanningParameters::default();

    c.bench_function("headline_projection", |b| {
        b.iter(|| planner.project(black_box(&base), black_box(&params)).unwrap())
    });

    let long = PlanningParameters {
        horizon_months: 36,
        ..PlanningParameters::default()
    };
    c.bench_function("timeseries_36_months", |b| {
        b.iter(|| project_timeseries(black_box(&base), black_box(&long)).unwrap())
    });
}

criterion_group!(benches, bench_projection);
criterion_main!(benches);
