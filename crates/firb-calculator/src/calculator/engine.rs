use serde::Serialize;

use super::breakdown::{CostAggregator, CostBreakdown};
use super::domain::{CalculationRequest, DisplayCurrency};
use super::eligibility::{EligibilityClassifier, EligibilityResult};
use super::fees::FeeScheduleEngine;
use super::rates::{BenchmarkSnapshot, RateResolver};

/// Eligibility plus costs, in AUD and in the buyer's chosen currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationOutcome {
    pub eligibility: EligibilityResult,
    pub currency: DisplayCurrency,
    pub costs: CostBreakdown,
    pub costs_aud: CostBreakdown,
}

/// Pure composition of classifier, fee engine, and aggregator over one
/// benchmark snapshot.
#[derive(Debug, Clone, Default)]
pub struct FirbEngine {
    classifier: EligibilityClassifier,
    fees: FeeScheduleEngine,
    aggregator: CostAggregator,
}

impl FirbEngine {
    pub fn new(classifier: EligibilityClassifier) -> Self {
        Self {
            classifier,
            fees: FeeScheduleEngine,
            aggregator: CostAggregator,
        }
    }

    pub fn classifier(&self) -> &EligibilityClassifier {
        &self.classifier
    }

    pub fn calculate(
        &self,
        request: &CalculationRequest,
        snapshot: &BenchmarkSnapshot,
    ) -> CalculationOutcome {
        let eligibility = self.classifier.classify(&request.buyer, &request.property);
        let resolver = RateResolver::new(snapshot);
        let fees = self.fees.compute(&request.property, &resolver);
        let costs_aud = self
            .aggregator
            .aggregate(&eligibility, &request.property, &fees);

        let currency = request.currency.clone().unwrap_or_else(DisplayCurrency::aud);
        let costs = if currency.code == "AUD" && currency.aud_rate == 1.0 {
            costs_aud
        } else {
            costs_aud.converted(currency.aud_rate)
        };

        CalculationOutcome {
            eligibility,
            currency,
            costs,
            costs_aud,
        }
    }
}
