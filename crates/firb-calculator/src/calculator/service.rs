use std::sync::Arc;

use tracing::info;

use super::eligibility::EligibilityClassifier;
use super::engine::{CalculationOutcome, FirbEngine};
use super::intake::{CalculationSubmission, IntakeGuard, ValidationError};
use super::rates::{BenchmarkSource, BenchmarkSourceError};

/// Service composing intake validation, the engine, and a benchmark source.
pub struct CalculatorService<S> {
    guard: IntakeGuard,
    engine: FirbEngine,
    benchmarks: Arc<S>,
}

impl<S> CalculatorService<S>
where
    S: BenchmarkSource + 'static,
{
    pub fn new(benchmarks: Arc<S>) -> Self {
        Self::with_classifier(benchmarks, EligibilityClassifier::default())
    }

    pub fn with_classifier(benchmarks: Arc<S>, classifier: EligibilityClassifier) -> Self {
        Self {
            guard: IntakeGuard,
            engine: FirbEngine::new(classifier),
            benchmarks,
        }
    }

    pub fn benchmarks(&self) -> &Arc<S> {
        &self.benchmarks
    }

    /// Validate a submission and price it against a fresh benchmark snapshot.
    pub fn calculate(
        &self,
        submission: CalculationSubmission,
    ) -> Result<CalculationOutcome, CalculationServiceError> {
        let request = self.guard.validate(submission)?;
        let snapshot = self.benchmarks.snapshot()?;
        let outcome = self.engine.calculate(&request, &snapshot);

        info!(
            state = %request.property.state,
            property_type = %request.property.property_type,
            entity_type = request.property.entity_type.label(),
            can_purchase = outcome.eligibility.can_purchase(),
            requires_approval = outcome.eligibility.requires_approval(),
            benchmark_rows = snapshot.len(),
            "purchase cost calculated"
        );

        Ok(outcome)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CalculationServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Benchmarks(#[from] BenchmarkSourceError),
}
