use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::domain::Metric;
use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: chrono::DateTime<chrono::Utc>,
    checks: HealthChecks,
}

/// Individual health checks
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    benchmark: ComponentHealth,
    chart: ComponentHealth,
}

/// Health status of a component
#[derive(Debug, Serialize)]
pub struct ComponentHealth {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ComponentHealth {
    fn healthy(detail: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            detail: Some(detail.into()),
            error: None,
        }
    }

    fn unhealthy(error: String) -> Self {
        Self {
            status: "unhealthy".to_string(),
            detail: None,
            error: Some(error),
        }
    }
}

/// GET /health - Health check endpoint
///
/// Returns the health status of the benchmark table and the chart pipeline
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let benchmark_health = check_benchmark(&state);
    let chart_health = check_chart(&state);

    let all_healthy =
        benchmark_health.status == "healthy" && chart_health.status == "healthy";

    let response = HealthResponse {
        status: if all_healthy {
            "healthy".to_string()
        } else {
            "degraded".to_string()
        },
        timestamp: chrono::Utc::now(),
        checks: HealthChecks {
            benchmark: benchmark_health,
            chart: chart_health,
        },
    };

    let status_code = if all_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    tracing::debug!(healthy = all_healthy, "Health check completed");
    (status_code, Json(response))
}

fn check_benchmark(state: &AppState) -> ComponentHealth {
    if state.benchmark.is_empty() {
        ComponentHealth::unhealthy("benchmark table is empty".to_string())
    } else {
        ComponentHealth::healthy(format!("{} models", state.benchmark.len()))
    }
}

/// Render both encodings once and verify every width stays in range.
fn check_chart(state: &AppState) -> ComponentHealth {
    let chart = state.chart();
    for metric in [Metric::Accuracy, Metric::Time] {
        let view = chart.render_for(metric);
        if let Some(row) = view
            .rows
            .iter()
            .find(|r| !(0.0..=1.0).contains(&r.fraction))
        {
            return ComponentHealth::unhealthy(format!(
                "{} has out-of-range width {} under {}",
                row.label, row.fraction, metric
            ));
        }
    }
    ComponentHealth::healthy(format!("mode {}", chart.metric()))
}

/// GET /health/live - Liveness probe
///
/// Returns 200 if the application is running
pub async fn liveness_check() -> impl IntoResponse {
    StatusCode::OK
}
