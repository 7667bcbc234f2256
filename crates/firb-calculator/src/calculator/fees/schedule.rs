//! Compiled-in government fee and tax tables.
//!
//! Step tables list `(upper bound exclusive, amount)` pairs in ascending order; the
//! final tier is open ended.

use crate::calculator::domain::AustralianState;

pub type StepTable = &'static [(f64, f64)];

const OPEN: f64 = f64::INFINITY;

pub const VACANT_LAND_APPROVAL_FEES: StepTable = &[
    (1_000_000.0, 14_100.0),
    (2_000_000.0, 28_200.0),
    (3_000_000.0, 56_400.0),
    (4_000_000.0, 84_600.0),
    (OPEN, 112_800.0),
];

/// Also used for first home buyers and commercial purchases.
pub const NEW_DWELLING_APPROVAL_FEES: StepTable = &[
    (1_000_000.0, 15_100.0),
    (2_000_000.0, 30_300.0),
    (3_000_000.0, 60_600.0),
    (4_000_000.0, 90_900.0),
    (OPEN, 121_200.0),
];

pub const ESTABLISHED_APPROVAL_FEES: StepTable = &[
    (1_000_000.0, 45_300.0),
    (2_000_000.0, 90_900.0),
    (3_000_000.0, 181_800.0),
    (OPEN, 272_700.0),
];

/// Company and trust multipliers on the individual approval fee. The multiplier
/// shrinks as value grows because the government fee is framed against total
/// Australian asset value, not this one property.
pub const ENTITY_FEE_MULTIPLIERS: StepTable = &[
    (1_000_000.0, 10.0),
    (2_000_000.0, 8.0),
    (3_000_000.0, 6.0),
    (OPEN, 5.0),
];

pub const ANNUAL_VACANCY_FEES: StepTable = &[
    (1_000_000.0, 11_490.0),
    (2_000_000.0, 22_980.0),
    (3_000_000.0, 45_960.0),
    (4_000_000.0, 68_940.0),
    (OPEN, 91_920.0),
];

/// `(LVR upper bound inclusive, premium % of loan)`, applied once LVR exceeds 80%.
pub const LMI_PREMIUM_BANDS: &[(f64, f64)] = &[(85.0, 1.0), (90.0, 2.0), (95.0, 3.0), (OPEN, 4.0)];

pub const LMI_FREE_LVR_PERCENT: f64 = 80.0;

/// Deposits at or above this share of the price carry no mortgage insurance.
pub const LMI_FREE_DEPOSIT_PERCENT: f64 = 100.0 - LMI_FREE_LVR_PERCENT;

/// Smallest premium charged once mortgage insurance applies.
pub const MINIMUM_LMI_PREMIUM: f64 = 0.01;

pub const TITLE_SEARCH_FEE: f64 = 50.0;
pub const BUILDING_INSPECTION_FEE: f64 = 600.0;
pub const CONVEYANCING_FEE: f64 = 2_000.0;
pub const LOAN_APPLICATION_FEE: f64 = 600.0;

/// Stamp duty surcharge on foreign purchasers of residential land, % of value.
pub const fn foreign_surcharge_percent(state: AustralianState) -> f64 {
    match state {
        AustralianState::Nsw | AustralianState::Vic | AustralianState::Qld => 8.0,
        AustralianState::Sa | AustralianState::Wa => 7.0,
        AustralianState::Tas => 8.0,
        AustralianState::Act | AustralianState::Nt => 0.0,
    }
}

/// Annual land tax surcharge for foreign owners, % of value. NT levies none.
pub const fn land_tax_surcharge_percent(state: AustralianState) -> f64 {
    match state {
        AustralianState::Nsw => 5.0,
        AustralianState::Vic => 4.0,
        AustralianState::Qld => 3.0,
        AustralianState::Sa => 0.5,
        AustralianState::Wa => 4.0,
        AustralianState::Tas => 2.0,
        AustralianState::Act => 0.75,
        AustralianState::Nt => 0.0,
    }
}

pub const fn transfer_fee(state: AustralianState) -> f64 {
    match state {
        AustralianState::Nsw => 165.0,
        AustralianState::Vic => 1_470.0,
        AustralianState::Qld => 1_250.0,
        AustralianState::Sa => 3_000.0,
        AustralianState::Wa => 850.0,
        AustralianState::Tas => 250.0,
        AustralianState::Act => 450.0,
        AustralianState::Nt => 180.0,
    }
}

pub const fn mortgage_registration_fee(state: AustralianState) -> f64 {
    match state {
        AustralianState::Nsw => 165.0,
        AustralianState::Vic => 132.0,
        AustralianState::Qld => 225.0,
        AustralianState::Sa => 190.0,
        AustralianState::Wa => 210.0,
        AustralianState::Tas => 155.0,
        AustralianState::Act => 170.0,
        AustralianState::Nt => 165.0,
    }
}

/// Amount of the first tier whose exclusive upper bound exceeds `value`.
pub fn step_lookup(table: StepTable, value: f64) -> f64 {
    table
        .iter()
        .find(|(upper, _)| value < *upper)
        .or_else(|| table.last())
        .map_or(0.0, |(_, amount)| *amount)
}
