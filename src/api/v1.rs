use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;

use crate::{
    api::{error::ApiError, response::ApiResponse},
    content,
    domain::{Metric, ModelResult},
    state::AppState,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/results", get(get_results))
        .route("/results/chart", get(get_chart))
        .route("/results/model/:name", get(get_model))
        .route("/results/mode", put(set_mode))
        .route("/results/summary", get(get_summary))
        .route("/content/stats", get(get_stats))
        .route("/content/pipeline", get(get_pipeline))
        .route("/healthz", get(healthz))
        .with_state(state)
}

pub async fn healthz() -> impl IntoResponse {
    StatusCode::OK
}

/// GET /api/v1/results - the raw benchmark table in publication order
pub async fn get_results(State(st): State<AppState>) -> impl IntoResponse {
    let count = st.benchmark.len();
    Json(ApiResponse::success(st.benchmark.models().to_vec()).with_count(count))
}

/// GET /api/v1/results/model/:name - one row of the table, case-insensitive
pub async fn get_model(
    State(st): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<ModelResult>>, ApiError> {
    st.benchmark
        .models()
        .iter()
        .find(|m| m.name().eq_ignore_ascii_case(&name))
        .cloned()
        .map(|m| Json(ApiResponse::success(m)))
        .ok_or_else(|| ApiError::NotFound(format!("model '{name}'")))
}

#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    /// Overrides the selected display mode for this request only.
    pub metric: Option<Metric>,
}

/// GET /api/v1/results/chart - render-ready rows under the selected metric
pub async fn get_chart(
    State(st): State<AppState>,
    Query(q): Query<ChartQuery>,
) -> impl IntoResponse {
    let chart = st.chart();
    let view = match q.metric {
        Some(metric) => chart.render_for(metric),
        None => chart.render(),
    };
    let count = view.rows.len();
    Json(ApiResponse::success(view).with_count(count))
}

#[derive(Debug, Deserialize)]
pub struct ModeRequest {
    pub metric: Metric,
}

/// PUT /api/v1/results/mode - the display-mode toggle
pub async fn set_mode(
    State(st): State<AppState>,
    Json(req): Json<ModeRequest>,
) -> impl IntoResponse {
    st.set_mode(req.metric);
    tracing::debug!(metric = %req.metric, "display mode changed");
    StatusCode::NO_CONTENT
}

/// GET /api/v1/results/summary - verdict highlights derived from the table
pub async fn get_summary(State(st): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::success(content::verdict_summary(&st.benchmark)))
}

/// GET /api/v1/content/stats - the conclusion stat cards
pub async fn get_stats() -> impl IntoResponse {
    let cards = content::stat_cards();
    let count = cards.len();
    Json(ApiResponse::success(cards).with_count(count))
}

/// GET /api/v1/content/pipeline - the feature-pipeline stages
pub async fn get_pipeline() -> impl IntoResponse {
    let stages = content::pipeline_stages();
    let count = stages.len();
    Json(ApiResponse::success(stages).with_count(count))
}
