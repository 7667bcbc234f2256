use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::intake::CalculationSubmission;
use super::rates::BenchmarkSource;
use super::service::{CalculationServiceError, CalculatorService};

/// Router builder exposing the calculator over HTTP.
pub fn calculator_router<S>(service: Arc<CalculatorService<S>>) -> Router
where
    S: BenchmarkSource + 'static,
{
    Router::new()
        .route("/api/v1/firb/calculate", post(calculate_handler::<S>))
        .with_state(service)
}

pub(crate) async fn calculate_handler<S>(
    State(service): State<Arc<CalculatorService<S>>>,
    axum::Json(submission): axum::Json<CalculationSubmission>,
) -> Response
where
    S: BenchmarkSource + 'static,
{
    match service.calculate(submission) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(CalculationServiceError::Validation(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
