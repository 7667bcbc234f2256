use serde::Serialize;

use super::round_cents;
use super::schedule::{
    foreign_surcharge_percent, land_tax_surcharge_percent, mortgage_registration_fee,
    step_lookup, transfer_fee, ANNUAL_VACANCY_FEES, BUILDING_INSPECTION_FEE, CONVEYANCING_FEE,
    LMI_FREE_DEPOSIT_PERCENT, LMI_FREE_LVR_PERCENT, LMI_PREMIUM_BANDS, LOAN_APPLICATION_FEE,
    MINIMUM_LMI_PREMIUM, TITLE_SEARCH_FEE,
};
use crate::calculator::domain::{AustralianState, PropertyRequest, PropertyType};

/// Foreign purchaser stamp duty surcharge. Commercial land attracts none.
pub fn foreign_surcharge(value: f64, state: AustralianState, property_type: PropertyType) -> f64 {
    if !property_type.is_residential() {
        return 0.0;
    }
    round_cents(value * foreign_surcharge_percent(state) / 100.0)
}

/// Annual foreign owner land tax surcharge. Commercial land attracts none.
pub fn land_tax_surcharge(value: f64, state: AustralianState, property_type: PropertyType) -> f64 {
    if !property_type.is_residential() {
        return 0.0;
    }
    round_cents(value * land_tax_surcharge_percent(state) / 100.0)
}

/// Annual vacancy fee; only dwellings can sit vacant.
pub fn annual_vacancy_fee(value: f64, property_type: PropertyType) -> f64 {
    match property_type {
        PropertyType::NewDwelling | PropertyType::Established => {
            step_lookup(ANNUAL_VACANCY_FEES, value)
        }
        PropertyType::VacantLand | PropertyType::Commercial => 0.0,
    }
}

/// Premium rate (% of the loan) for a loan-to-value ratio; zero at or below 80%.
pub fn lmi_premium_percent(lvr_percent: f64) -> f64 {
    if lvr_percent <= LMI_FREE_LVR_PERCENT {
        return 0.0;
    }
    band_rate(lvr_percent)
}

fn band_rate(lvr_percent: f64) -> f64 {
    LMI_PREMIUM_BANDS
        .iter()
        .find(|(upper, _)| lvr_percent <= *upper)
        .map_or(0.0, |(_, rate)| *rate)
}

/// Mortgage insurance premium. Any deposit under 20% pays at least a cent, even
/// when `100 - deposit` rounds to exactly 80 in floating point.
pub fn lenders_mortgage_insurance(value: f64, deposit_percent: f64) -> f64 {
    if deposit_percent >= LMI_FREE_DEPOSIT_PERCENT {
        return 0.0;
    }
    let lvr_percent = 100.0 - deposit_percent;
    let loan = value * lvr_percent / 100.0;
    round_up_cents(loan * band_rate(lvr_percent) / 100.0).max(MINIMUM_LMI_PREMIUM)
}

/// Ceiling to the cent, ignoring representation noise on exact cent amounts.
fn round_up_cents(amount: f64) -> f64 {
    let cents = amount * 100.0;
    let nearest = cents.round();
    if (cents - nearest).abs() < 1e-6 {
        nearest / 100.0
    } else {
        cents.ceil() / 100.0
    }
}

/// Fixed one-time fees that every purchaser pays, itemized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StandardFees {
    pub transfer_fee: f64,
    pub title_search: f64,
    pub conveyancing: f64,
    pub building_inspection: f64,
    pub mortgage_registration: f64,
    pub loan_application: f64,
}

impl StandardFees {
    pub fn for_property(property: &PropertyRequest) -> Self {
        let has_loan = property.has_loan();
        Self {
            transfer_fee: transfer_fee(property.state),
            title_search: TITLE_SEARCH_FEE,
            conveyancing: CONVEYANCING_FEE,
            building_inspection: match property.property_type {
                PropertyType::VacantLand => 0.0,
                _ => BUILDING_INSPECTION_FEE,
            },
            mortgage_registration: if has_loan {
                mortgage_registration_fee(property.state)
            } else {
                0.0
            },
            loan_application: if has_loan { LOAN_APPLICATION_FEE } else { 0.0 },
        }
    }

    pub fn legal(&self) -> f64 {
        self.conveyancing + self.title_search + self.transfer_fee
    }

    pub fn lending(&self) -> f64 {
        self.loan_application + self.mortgage_registration
    }
}
