use anyhow::Result;
use axum::Router;
use stbelf_results::{api, config, domain, state, telemetry};
use config::Config;
use domain::Metric;
use state::AppState;
use telemetry::init_tracing;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cfg = Config::load()?;

    let app_state = AppState::new(&cfg)?;

    if let Some(max_mae) = app_state.benchmark.max_metric(Metric::Accuracy) {
        if max_mae > app_state.scale.accuracy_max() {
            warn!(
                max_mae,
                scale_max = app_state.scale.accuracy_max(),
                "worst MAE exceeds the accuracy scale maximum; its bar will clamp to full width"
            );
        }
    }
    if let Some(max_time) = app_state.benchmark.max_metric(Metric::Time) {
        if max_time > app_state.scale.time_max() {
            warn!(
                max_time,
                scale_max = app_state.scale.time_max(),
                "worst training time exceeds the time scale maximum; its bar will clamp to full width"
            );
        }
    }

    let app: Router = api::router(app_state.clone(), &cfg);

    let addr = cfg.server.socket_addr()?;

    if cfg.server.host == "0.0.0.0" {
        warn!(
            "WARNING: Server binding to 0.0.0.0 - service will be accessible from network! \
            For production, bind to 127.0.0.1 unless behind a firewall/reverse proxy."
        );
    }

    info!(%addr, models = app_state.benchmark.len(), "starting STBELF results service");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(telemetry::shutdown_signal())
        .await?;

    warn!("shutdown complete");
    Ok(())
}
