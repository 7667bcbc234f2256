use crate::infra::{AppState, ConfiguredBenchmarks};
use crate::report::CalculationReport;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::Utc;
use firb_calculator::calculator::{calculator_router, CalculationSubmission, CalculatorService};
use firb_calculator::error::AppError;
use serde_json::json;
use std::sync::Arc;

type SharedCalculator = Arc<CalculatorService<ConfiguredBenchmarks>>;

pub(crate) fn with_calculator_routes(service: SharedCalculator) -> axum::Router {
    calculator_router(service.clone())
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/firb/report",
            axum::routing::post(calculation_report_endpoint),
        )
        .layer(Extension(service))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Same calculation as the library route, stamped with `generated_at`.
pub(crate) async fn calculation_report_endpoint(
    Extension(service): Extension<SharedCalculator>,
    Json(submission): Json<CalculationSubmission>,
) -> Result<Json<CalculationReport>, AppError> {
    let outcome = service.calculate(submission)?;
    Ok(Json(CalculationReport::new(outcome, Utc::now())))
}
