use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::calculator::domain::{
    AustralianState, BuyerProfile, CalculationRequest, CitizenshipStatus, PropertyRequest,
    PropertyType,
};
use crate::calculator::engine::FirbEngine;
use crate::calculator::intake::CalculationSubmission;
use crate::calculator::rates::{
    BenchmarkMetric, BenchmarkSnapshot, BenchmarkSource, BenchmarkSourceError,
    InMemoryBenchmarkStore, RateParameter,
};
use crate::calculator::{calculator_router, CalculatorService};

pub(super) fn assert_money(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.005,
        "expected {expected:.2}, got {actual:.2}"
    );
}

pub(super) fn submission(
    citizenship: &str,
    property_type: &str,
    value: f64,
    state: &str,
) -> CalculationSubmission {
    CalculationSubmission {
        citizenship_status: citizenship.to_string(),
        property_type: property_type.to_string(),
        property_value: value,
        state: state.to_string(),
        deposit_percent: Some(20.0),
        ..CalculationSubmission::default()
    }
}

pub(super) fn foreign_new_dwelling_vic() -> CalculationSubmission {
    submission("foreign", "newDwelling", 1_500_000.0, "VIC")
}

pub(super) fn request(
    citizenship: CitizenshipStatus,
    property_type: PropertyType,
    value: f64,
    state: AustralianState,
) -> CalculationRequest {
    CalculationRequest {
        buyer: BuyerProfile::new(citizenship),
        property: PropertyRequest::new(property_type, value, state),
        currency: None,
    }
}

pub(super) fn engine() -> FirbEngine {
    FirbEngine::default()
}

pub(super) fn empty_snapshot() -> BenchmarkSnapshot {
    BenchmarkSnapshot::default()
}

pub(super) fn benchmark_rows() -> Vec<RateParameter> {
    vec![
        RateParameter {
            metric: BenchmarkMetric::CouncilRatePercent,
            state: AustralianState::Vic,
            property_type: PropertyType::NewDwelling,
            classification: None,
            bedrooms: None,
            value: 0.25,
            active: true,
        },
        RateParameter {
            metric: BenchmarkMetric::CouncilRatePercent,
            state: AustralianState::Vic,
            property_type: PropertyType::NewDwelling,
            classification: Some("unit".to_string()),
            bedrooms: Some(2),
            value: 0.2,
            active: true,
        },
        RateParameter {
            metric: BenchmarkMetric::WaterRatesAnnual,
            state: AustralianState::Vic,
            property_type: PropertyType::NewDwelling,
            classification: None,
            bedrooms: None,
            value: 950.0,
            active: true,
        },
        RateParameter {
            metric: BenchmarkMetric::InsurancePercent,
            state: AustralianState::Vic,
            property_type: PropertyType::NewDwelling,
            classification: None,
            bedrooms: None,
            value: 5.0,
            active: false,
        },
    ]
}

pub(super) fn build_service() -> (
    CalculatorService<InMemoryBenchmarkStore>,
    Arc<InMemoryBenchmarkStore>,
) {
    let store = Arc::new(InMemoryBenchmarkStore::new(benchmark_rows()));
    let service = CalculatorService::new(store.clone());
    (service, store)
}

pub(super) struct UnavailableBenchmarks;

impl BenchmarkSource for UnavailableBenchmarks {
    fn snapshot(&self) -> Result<BenchmarkSnapshot, BenchmarkSourceError> {
        Err(BenchmarkSourceError::Unavailable(
            "database offline".to_string(),
        ))
    }
}

pub(super) fn router_with_service(
    service: CalculatorService<InMemoryBenchmarkStore>,
) -> axum::Router {
    calculator_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
