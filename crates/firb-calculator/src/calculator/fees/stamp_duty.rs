//! Standard transfer (stamp) duty, one progressive schedule per state.

use serde::Serialize;

use super::round_cents;
use crate::calculator::domain::AustralianState;

/// Duty for a value in this band is `base + (value - from) * rate_percent / 100`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DutyBand {
    pub from: f64,
    pub base: f64,
    pub rate_percent: f64,
}

const fn band(from: f64, base: f64, rate_percent: f64) -> DutyBand {
    DutyBand {
        from,
        base,
        rate_percent,
    }
}

const NSW: &[DutyBand] = &[
    band(0.0, 0.0, 1.25),
    band(17_000.0, 212.0, 1.5),
    band(36_000.0, 497.0, 1.75),
    band(97_000.0, 1_564.0, 3.5),
    band(364_000.0, 10_909.0, 4.5),
    band(1_212_000.0, 49_069.0, 5.5),
];

// Above $960k VIC charges 5.5% of the whole value, hence the step at that bound.
const VIC: &[DutyBand] = &[
    band(0.0, 0.0, 1.4),
    band(25_000.0, 350.0, 2.4),
    band(130_000.0, 2_870.0, 6.0),
    band(960_000.0, 52_800.0, 5.5),
    band(2_000_000.0, 110_000.0, 6.5),
];

const QLD: &[DutyBand] = &[
    band(0.0, 0.0, 0.0),
    band(5_000.0, 0.0, 1.5),
    band(75_000.0, 1_050.0, 3.5),
    band(540_000.0, 17_325.0, 4.5),
    band(1_000_000.0, 38_025.0, 5.75),
];

const SA: &[DutyBand] = &[
    band(0.0, 0.0, 1.0),
    band(12_000.0, 120.0, 2.0),
    band(30_000.0, 480.0, 3.0),
    band(50_000.0, 1_080.0, 3.5),
    band(100_000.0, 2_830.0, 4.0),
    band(200_000.0, 6_830.0, 4.25),
    band(250_000.0, 8_955.0, 4.75),
    band(300_000.0, 11_330.0, 5.0),
    band(500_000.0, 21_330.0, 5.5),
];

const WA: &[DutyBand] = &[
    band(0.0, 0.0, 1.9),
    band(120_000.0, 2_280.0, 2.85),
    band(150_000.0, 3_135.0, 3.8),
    band(360_000.0, 11_115.0, 4.75),
    band(725_000.0, 28_453.0, 5.15),
];

const TAS: &[DutyBand] = &[
    band(0.0, 50.0, 0.0),
    band(3_000.0, 50.0, 1.75),
    band(25_000.0, 435.0, 2.25),
    band(75_000.0, 1_560.0, 3.5),
    band(200_000.0, 5_935.0, 4.0),
    band(375_000.0, 12_935.0, 4.25),
    band(725_000.0, 27_810.0, 4.5),
];

const ACT: &[DutyBand] = &[band(0.0, 0.0, 4.5)];

const NT: &[DutyBand] = &[band(0.0, 0.0, 4.95)];

pub fn duty_bands(state: AustralianState) -> &'static [DutyBand] {
    match state {
        AustralianState::Nsw => NSW,
        AustralianState::Vic => VIC,
        AustralianState::Qld => QLD,
        AustralianState::Sa => SA,
        AustralianState::Wa => WA,
        AustralianState::Tas => TAS,
        AustralianState::Act => ACT,
        AustralianState::Nt => NT,
    }
}

/// Band governing `value`: the last one whose lower bound is at or below it.
pub fn governing_band(state: AustralianState, value: f64) -> Option<DutyBand> {
    duty_bands(state)
        .iter()
        .rev()
        .find(|band| value >= band.from)
        .copied()
}

pub fn stamp_duty(value: f64, state: AustralianState) -> f64 {
    governing_band(state, value).map_or(0.0, |band| {
        round_cents(band.base + (value - band.from) * band.rate_percent / 100.0)
    })
}
