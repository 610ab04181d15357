use std::error::Error;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use tokio::signal;
use tokio::sync::oneshot;

use wardstat::api::rest::RestApi;
use wardstat::config::load_config;
use wardstat::planning::CapacityPlanner;
use wardstat::store::{seed, RecordStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = load_config(Path::new("config.yaml"))?;

    let store = Arc::new(RecordStore::new());
    if let Some(path) = &config.data.seed_path {
        let counts = seed::load_into(Path::new(path), &store)?;
        println!(
            "Seeded {} admission(s), {} appointment(s), {} staff member(s) from {}",
            counts.admissions, counts.appointments, counts.staff, path
        );
    }

    let planner = CapacityPlanner::new(config.planning.revenue_per_admission);
    let api = RestApi::new(Arc::clone(&store), planner, config.planning.thresholds);

    println!("Starting server on {}:{}", config.api.host, config.api.port);

    // Channel for the shutdown signal
    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let routes = api.routes();
    let addr: SocketAddr = format!("{}:{}", config.api.host, config.api.port).parse()?;

    let (_, server) = warp::serve(routes).bind_with_graceful_shutdown(addr, async move {
        shutdown_rx.await.ok();
        println!("Shutting down server...");
    });

    let server_handle = tokio::spawn(server);

    // Wait for Ctrl+C
    signal::ctrl_c().await?;
    println!("Ctrl+C received, starting graceful shutdown");

    shutdown_tx.send(()).ok();
    server_handle.await?;

    println!("Server shutdown complete");
    Ok(())
}
