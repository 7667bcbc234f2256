use serde::Serialize;

use super::domain::PropertyRequest;
use super::eligibility::EligibilityResult;
use super::fees::{round_cents, FeeComputation};

/// One-time purchase costs. `total` is derived in the constructor only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UpfrontCosts {
    property_price: f64,
    firb_fee: f64,
    stamp_duty: f64,
    foreign_surcharge: f64,
    legal_fees: f64,
    inspection_fees: f64,
    loan_costs: f64,
    total: f64,
}

impl UpfrontCosts {
    pub fn new(
        property_price: f64,
        firb_fee: f64,
        stamp_duty: f64,
        foreign_surcharge: f64,
        legal_fees: f64,
        inspection_fees: f64,
        loan_costs: f64,
    ) -> Self {
        let total = property_price
            + firb_fee
            + stamp_duty
            + foreign_surcharge
            + legal_fees
            + inspection_fees
            + loan_costs;
        Self {
            property_price,
            firb_fee,
            stamp_duty,
            foreign_surcharge,
            legal_fees,
            inspection_fees,
            loan_costs,
            total,
        }
    }

    pub fn property_price(&self) -> f64 {
        self.property_price
    }

    pub fn firb_fee(&self) -> f64 {
        self.firb_fee
    }

    pub fn stamp_duty(&self) -> f64 {
        self.stamp_duty
    }

    pub fn foreign_surcharge(&self) -> f64 {
        self.foreign_surcharge
    }

    pub fn legal_fees(&self) -> f64 {
        self.legal_fees
    }

    pub fn inspection_fees(&self) -> f64 {
        self.inspection_fees
    }

    pub fn loan_costs(&self) -> f64 {
        self.loan_costs
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    fn map(&self, convert: impl Fn(f64) -> f64) -> Self {
        Self::new(
            convert(self.property_price),
            convert(self.firb_fee),
            convert(self.stamp_duty),
            convert(self.foreign_surcharge),
            convert(self.legal_fees),
            convert(self.inspection_fees),
            convert(self.loan_costs),
        )
    }
}

/// Annual holding costs. `total` is derived in the constructor only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OngoingCosts {
    land_tax_surcharge: f64,
    council_rates: f64,
    water_rates: f64,
    insurance: f64,
    maintenance: f64,
    vacancy_fee: f64,
    total: f64,
}

impl OngoingCosts {
    pub fn new(
        land_tax_surcharge: f64,
        council_rates: f64,
        water_rates: f64,
        insurance: f64,
        maintenance: f64,
        vacancy_fee: f64,
    ) -> Self {
        let total =
            land_tax_surcharge + council_rates + water_rates + insurance + maintenance + vacancy_fee;
        Self {
            land_tax_surcharge,
            council_rates,
            water_rates,
            insurance,
            maintenance,
            vacancy_fee,
            total,
        }
    }

    pub fn land_tax_surcharge(&self) -> f64 {
        self.land_tax_surcharge
    }

    pub fn council_rates(&self) -> f64 {
        self.council_rates
    }

    pub fn water_rates(&self) -> f64 {
        self.water_rates
    }

    pub fn insurance(&self) -> f64 {
        self.insurance
    }

    pub fn maintenance(&self) -> f64 {
        self.maintenance
    }

    pub fn vacancy_fee(&self) -> f64 {
        self.vacancy_fee
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    fn map(&self, convert: impl Fn(f64) -> f64) -> Self {
        Self::new(
            convert(self.land_tax_surcharge),
            convert(self.council_rates),
            convert(self.water_rates),
            convert(self.insurance),
            convert(self.maintenance),
            convert(self.vacancy_fee),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostBreakdown {
    upfront_costs: UpfrontCosts,
    ongoing_costs: OngoingCosts,
    total_investment_cost: f64,
    first_year_total: f64,
}

impl CostBreakdown {
    pub fn new(upfront_costs: UpfrontCosts, ongoing_costs: OngoingCosts) -> Self {
        Self {
            upfront_costs,
            ongoing_costs,
            total_investment_cost: upfront_costs.total(),
            first_year_total: upfront_costs.total() + ongoing_costs.total(),
        }
    }

    pub fn upfront_costs(&self) -> &UpfrontCosts {
        &self.upfront_costs
    }

    pub fn ongoing_costs(&self) -> &OngoingCosts {
        &self.ongoing_costs
    }

    pub fn total_investment_cost(&self) -> f64 {
        self.total_investment_cost
    }

    pub fn first_year_total(&self) -> f64 {
        self.first_year_total
    }

    /// Re-express every line item at `aud_rate` units per AUD, rounded to cents.
    /// Totals are rebuilt from the converted items.
    pub fn converted(&self, aud_rate: f64) -> Self {
        let convert = |amount: f64| round_cents(amount * aud_rate);
        Self::new(self.upfront_costs.map(convert), self.ongoing_costs.map(convert))
    }
}

/// Folds eligibility and fee outputs into the final breakdown.
#[derive(Debug, Clone, Copy, Default)]
pub struct CostAggregator;

impl CostAggregator {
    pub fn aggregate(
        &self,
        eligibility: &EligibilityResult,
        property: &PropertyRequest,
        fees: &FeeComputation,
    ) -> CostBreakdown {
        let gated = |amount: f64| {
            if eligibility.requires_approval() {
                amount
            } else {
                0.0
            }
        };

        let loan_costs = if property.has_loan() {
            fees.standard.lending() + fees.lenders_mortgage_insurance
        } else {
            0.0
        };

        let upfront = UpfrontCosts::new(
            property.value,
            gated(fees.approval_fee),
            fees.stamp_duty,
            gated(fees.foreign_surcharge),
            fees.standard.legal(),
            fees.standard.building_inspection,
            loan_costs,
        );

        let ongoing = OngoingCosts::new(
            gated(fees.land_tax_surcharge),
            fees.ongoing.council_rates,
            fees.ongoing.water_rates,
            fees.ongoing.insurance,
            fees.ongoing.maintenance,
            gated(fees.vacancy_fee),
        );

        CostBreakdown::new(upfront, ongoing)
    }
}
