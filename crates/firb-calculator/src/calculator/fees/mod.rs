//! Pure fee and tax functions. None of them look at eligibility; gating on the
//! approval requirement happens in the aggregator.

mod approval;
mod charges;
pub mod schedule;
mod stamp_duty;

pub use approval::{approval_fee, approval_fee_table, entity_multiplier, individual_approval_fee};
pub use charges::{
    annual_vacancy_fee, foreign_surcharge, land_tax_surcharge, lenders_mortgage_insurance,
    lmi_premium_percent, StandardFees,
};
pub use stamp_duty::{duty_bands, governing_band, stamp_duty, DutyBand};

use serde::Serialize;

use super::domain::PropertyRequest;
use super::rates::{BenchmarkMetric, RateResolver};

pub(crate) fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Benchmark-driven annual running costs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OngoingEstimates {
    pub council_rates: f64,
    pub water_rates: f64,
    pub insurance: f64,
    pub maintenance: f64,
}

impl OngoingEstimates {
    pub fn resolve(property: &PropertyRequest, resolver: &RateResolver<'_>) -> Self {
        let rate = |metric| {
            resolver.resolve(
                metric,
                property.state,
                property.property_type,
                property.classification.as_deref(),
                property.bedrooms,
            )
        };
        let share_of_value = |metric| round_cents(property.value * rate(metric) / 100.0);

        Self {
            council_rates: share_of_value(BenchmarkMetric::CouncilRatePercent),
            water_rates: round_cents(rate(BenchmarkMetric::WaterRatesAnnual)),
            insurance: share_of_value(BenchmarkMetric::InsurancePercent),
            maintenance: share_of_value(BenchmarkMetric::MaintenancePercent),
        }
    }
}

/// Every fee computed for a property, ungated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeeComputation {
    pub approval_fee: f64,
    pub stamp_duty: f64,
    pub foreign_surcharge: f64,
    pub standard: StandardFees,
    pub lenders_mortgage_insurance: f64,
    pub vacancy_fee: f64,
    pub land_tax_surcharge: f64,
    pub ongoing: OngoingEstimates,
}

/// Runs each fee function for a validated property.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeeScheduleEngine;

impl FeeScheduleEngine {
    pub fn compute(&self, property: &PropertyRequest, resolver: &RateResolver<'_>) -> FeeComputation {
        let value = property.value;

        FeeComputation {
            approval_fee: approval_fee(
                value,
                property.property_type,
                property.first_home_buyer,
                property.entity_type,
            ),
            stamp_duty: stamp_duty(value, property.state),
            foreign_surcharge: foreign_surcharge(value, property.state, property.property_type),
            standard: StandardFees::for_property(property),
            lenders_mortgage_insurance: lenders_mortgage_insurance(value, property.deposit_percent),
            vacancy_fee: annual_vacancy_fee(value, property.property_type),
            land_tax_surcharge: land_tax_surcharge(value, property.state, property.property_type),
            ongoing: OngoingEstimates::resolve(property, resolver),
        }
    }
}
