//! Foreign investment eligibility and purchase cost calculation.
//!
//! A submission is validated by [`IntakeGuard`], classified by
//! [`EligibilityClassifier`], priced by [`FeeScheduleEngine`] against a
//! [`BenchmarkSnapshot`], and summed by [`CostAggregator`].

pub mod breakdown;
pub mod domain;
pub mod eligibility;
pub mod engine;
pub mod fees;
pub mod intake;
pub mod rates;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use breakdown::{CostAggregator, CostBreakdown, OngoingCosts, UpfrontCosts};
pub use domain::{
    AustralianState, BuyerProfile, CalculationRequest, CitizenshipStatus, DisplayCurrency,
    EntityType, PropertyRequest, PropertyType,
};
pub use eligibility::{
    BuyerCategory, EligibilityClassifier, EligibilityPolicy, EligibilityResult, ProcessingTimeline,
};
pub use engine::{CalculationOutcome, FirbEngine};
pub use fees::{FeeComputation, FeeScheduleEngine, OngoingEstimates, StandardFees};
pub use intake::{CalculationSubmission, CurrencySubmission, IntakeGuard, ValidationError};
pub use rates::{
    load_rate_parameters, parse_rate_parameters, BenchmarkImportError, BenchmarkMetric,
    BenchmarkSnapshot, BenchmarkSource, BenchmarkSourceError, CsvBenchmarkFile,
    InMemoryBenchmarkStore, RateError, RateParameter, RateResolver, RateSource, ResolvedRate,
};
pub use router::calculator_router;
pub use service::{CalculationServiceError, CalculatorService};
