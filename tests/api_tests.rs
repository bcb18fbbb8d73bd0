//! End-to-end tests driving the real router over in-memory requests.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use stbelf_results::api;
use stbelf_results::config::{ChartConfig, Config, ScaleReference, ServerConfig};
use stbelf_results::state::AppState;

fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            enable_cors: false,
            request_timeout_secs: 5,
        },
        chart: ChartConfig {
            accuracy_scale_max: 12.0,
            time_scale_max: 25000.0,
            scale_reference: ScaleReference::Fixed,
        },
    }
}

fn test_app() -> (Router, AppState) {
    let cfg = test_config();
    let state = AppState::new(&cfg).unwrap();
    (api::router(state.clone(), &cfg), state)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .unwrap();
    // Extractor rejections produce plain-text bodies; map those to Null.
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn results_returns_five_models_in_publication_order() {
    let (app, _) = test_app();
    let (status, body) = get_json(app, "/api/v1/results").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["metadata"]["total_count"], 5);

    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        ["Random Forest", "XGBoost", "LightGBM", "TFT (Transformer)", "LSTM"]
    );
}

#[tokio::test]
async fn chart_defaults_to_accuracy_order() {
    let (app, _) = test_app();
    let (status, body) = get_json(app, "/api/v1/results/chart").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["metric"], "accuracy");
    assert_eq!(body["data"]["caption"], "Lower is better");

    let rows = body["data"]["rows"].as_array().unwrap();
    assert_eq!(rows[0]["label"], "Random Forest");
    assert_eq!(rows[0]["value"], "3.30 kWh");
    assert_eq!(rows[0]["rank"], 1);
    assert_eq!(rows[4]["label"], "LSTM");
}

#[tokio::test]
async fn chart_metric_query_switches_encoding_without_writing_mode() {
    let (app, state) = test_app();
    let (status, body) = get_json(app, "/api/v1/results/chart?metric=time").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["metric"], "time");
    assert!(body["data"].get("caption").is_none());

    let rows = body["data"]["rows"].as_array().unwrap();
    assert_eq!(rows[0]["label"], "XGBoost");
    assert_eq!(rows[0]["value"], "2.62 s");
    assert_eq!(rows[0]["note"], "Seconds!");
    assert_eq!(rows[4]["label"], "TFT (Transformer)");
    assert_eq!(rows[4]["value"], "21,831 s");
    assert_eq!(rows[4]["note"], "Hours of training...");

    for row in rows {
        let fraction = row["fraction"].as_f64().unwrap();
        assert!((0.0..=1.0).contains(&fraction));
    }

    // A per-request override must not touch the selected mode.
    assert_eq!(
        state.selected_mode(),
        stbelf_results::domain::Metric::Accuracy
    );
}

#[tokio::test]
async fn model_lookup_is_case_insensitive() {
    let (app, _) = test_app();
    let (status, body) = get_json(app, "/api/v1/results/model/xgboost").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "XGBoost");
    assert_eq!(body["data"]["family"], "tree");
}

#[tokio::test]
async fn unknown_model_returns_not_found_envelope() {
    let (app, _) = test_app();
    let (status, body) = get_json(app, "/api/v1/results/model/Prophet").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NotFound");
}

#[tokio::test]
async fn chart_rejects_unknown_metric() {
    let (app, _) = test_app();
    let (status, _) = get_json(app, "/api/v1/results/chart?metric=speed").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn mode_toggle_round_trips_over_http() {
    let (app, _) = test_app();

    let put_mode = |app: Router, metric: &'static str| async move {
        app.oneshot(
            Request::builder()
                .method(Method::PUT)
                .uri("/api/v1/results/mode")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(format!("{{\"metric\":\"{metric}\"}}")))
                .unwrap(),
        )
        .await
        .unwrap()
    };

    let response = put_mode(app.clone(), "time").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let (_, body) = get_json(app.clone(), "/api/v1/results/chart").await;
    assert_eq!(body["data"]["rows"][0]["label"], "XGBoost");

    let response = put_mode(app.clone(), "accuracy").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Toggling there and back restores the original order exactly.
    let (_, body) = get_json(app, "/api/v1/results/chart").await;
    assert_eq!(body["data"]["rows"][0]["label"], "Random Forest");
    assert_eq!(body["data"]["metric"], "accuracy");
}

#[tokio::test]
async fn summary_is_derived_from_the_table() {
    let (app, _) = test_app();
    let (status, body) = get_json(app, "/api/v1/results/summary").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["headline"], "Trees Win.");
    assert_eq!(body["data"]["best_accuracy"]["value"], "3.30 kWh");
    assert_eq!(body["data"]["best_accuracy"]["achieved_by"], "Random Forest");
    assert_eq!(body["data"]["fastest_training"]["value"], "2.62 s");
    assert_eq!(body["data"]["fastest_training"]["achieved_by"], "XGBoost");
}

#[tokio::test]
async fn content_endpoints_serve_page_sections() {
    let (app, _) = test_app();

    let (status, body) = get_json(app.clone(), "/api/v1/content/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["metadata"]["total_count"], 3);
    assert_eq!(body["data"][0]["label"], "Buildings");

    let (status, body) = get_json(app, "/api/v1/content/pipeline").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][1]["title"], "Feature Engineering");
    assert_eq!(body["data"][1]["tags"][1], "Sin/Cos Time");
}

#[tokio::test]
async fn health_endpoints_report_healthy() {
    let (app, _) = test_app();

    let (status, body) = get_json(app.clone(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["benchmark"]["status"], "healthy");
    assert_eq!(body["checks"]["chart"]["status"], "healthy");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health/live")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (app, _) = test_app();
    let (status, _) = get_json(app, "/api/v1/models").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
