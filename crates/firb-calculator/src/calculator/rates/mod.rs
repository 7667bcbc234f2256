//! Benchmark rate configuration and its specificity-ordered fallback resolution.

mod import;
mod source;

pub use import::{load_rate_parameters, parse_rate_parameters, BenchmarkImportError};
pub use source::{BenchmarkSource, BenchmarkSourceError, CsvBenchmarkFile, InMemoryBenchmarkStore};

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::domain::{normalize_token, AustralianState, PropertyType};

/// Every configurable benchmark the engine knows how to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkMetric {
    CouncilRatePercent,
    WaterRatesAnnual,
    InsurancePercent,
    MaintenancePercent,
}

impl BenchmarkMetric {
    pub const ALL: [BenchmarkMetric; 4] = [
        BenchmarkMetric::CouncilRatePercent,
        BenchmarkMetric::WaterRatesAnnual,
        BenchmarkMetric::InsurancePercent,
        BenchmarkMetric::MaintenancePercent,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            BenchmarkMetric::CouncilRatePercent => "council_rate_percent",
            BenchmarkMetric::WaterRatesAnnual => "water_rates_annual",
            BenchmarkMetric::InsurancePercent => "insurance_percent",
            BenchmarkMetric::MaintenancePercent => "maintenance_percent",
        }
    }

    /// Value used when no active row matches at any specificity level.
    pub const fn default_value(self) -> f64 {
        match self {
            BenchmarkMetric::CouncilRatePercent => 0.30,
            BenchmarkMetric::WaterRatesAnnual => 1_200.0,
            BenchmarkMetric::InsurancePercent => 0.20,
            BenchmarkMetric::MaintenancePercent => 1.00,
        }
    }

    pub fn from_name(raw: &str) -> Result<Self, RateError> {
        let wanted = normalize_token(raw);
        Self::ALL
            .into_iter()
            .find(|metric| normalize_token(metric.name()) == wanted)
            .ok_or_else(|| RateError::UnknownMetric(raw.trim().to_string()))
    }
}

impl fmt::Display for BenchmarkMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Programmer errors raised by rate resolution. Missing rows are never errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RateError {
    #[error("unknown benchmark metric '{0}'")]
    UnknownMetric(String),
}

/// One configured benchmark row as supplied by the admin collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateParameter {
    pub metric: BenchmarkMetric,
    pub state: AustralianState,
    pub property_type: PropertyType,
    pub classification: Option<String>,
    pub bedrooms: Option<u8>,
    pub value: f64,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct RateKey {
    metric: BenchmarkMetric,
    state: AustralianState,
    property_type: PropertyType,
    classification: Option<String>,
    bedrooms: Option<u8>,
}

impl RateKey {
    fn new(
        metric: BenchmarkMetric,
        state: AustralianState,
        property_type: PropertyType,
        classification: Option<&str>,
        bedrooms: Option<u8>,
    ) -> Self {
        Self {
            metric,
            state,
            property_type,
            classification: classification
                .map(|raw| raw.trim().to_ascii_lowercase())
                .filter(|raw| !raw.is_empty()),
            bedrooms,
        }
    }

    fn general(&self) -> Self {
        Self {
            classification: None,
            bedrooms: None,
            ..self.clone()
        }
    }

    fn is_general(&self) -> bool {
        self.classification.is_none() && self.bedrooms.is_none()
    }
}

/// Point-in-time, read-only view over the active benchmark rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkSnapshot {
    rates: BTreeMap<RateKey, f64>,
}

impl BenchmarkSnapshot {
    /// Build a snapshot, dropping inactive rows and rows whose value is negative or
    /// not finite. When two active rows share a key the later one wins.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = RateParameter>,
    {
        let mut rates = BTreeMap::new();
        for row in rows.into_iter().filter(|row| row.active) {
            if !row.value.is_finite() || row.value < 0.0 {
                warn!(
                    metric = %row.metric,
                    state = %row.state,
                    property_type = %row.property_type,
                    value = row.value,
                    "skipping benchmark row with an unusable value"
                );
                continue;
            }
            let key = RateKey::new(
                row.metric,
                row.state,
                row.property_type,
                row.classification.as_deref(),
                row.bedrooms,
            );
            if let Some(previous) = rates.insert(key, row.value) {
                warn!(
                    metric = %row.metric,
                    state = %row.state,
                    property_type = %row.property_type,
                    previous,
                    replacement = row.value,
                    "duplicate active benchmark row; keeping the later value"
                );
            }
        }
        Self { rates }
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    fn get(&self, key: &RateKey) -> Option<f64> {
        self.rates.get(key).copied()
    }
}

/// Which level of the fallback chain produced a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    Specific,
    General,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedRate {
    pub value: f64,
    pub source: RateSource,
}

/// Resolves benchmarks most-specific first: the full key, then the state and
/// property-type general row, then the compiled-in default.
#[derive(Debug, Clone, Copy)]
pub struct RateResolver<'a> {
    snapshot: &'a BenchmarkSnapshot,
}

impl<'a> RateResolver<'a> {
    pub fn new(snapshot: &'a BenchmarkSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn resolve(
        &self,
        metric: BenchmarkMetric,
        state: AustralianState,
        property_type: PropertyType,
        classification: Option<&str>,
        bedrooms: Option<u8>,
    ) -> f64 {
        self.resolve_traced(metric, state, property_type, classification, bedrooms)
            .value
    }

    pub fn resolve_traced(
        &self,
        metric: BenchmarkMetric,
        state: AustralianState,
        property_type: PropertyType,
        classification: Option<&str>,
        bedrooms: Option<u8>,
    ) -> ResolvedRate {
        let key = RateKey::new(metric, state, property_type, classification, bedrooms);

        if let Some(value) = self.snapshot.get(&key) {
            let source = if key.is_general() {
                RateSource::General
            } else {
                RateSource::Specific
            };
            return ResolvedRate { value, source };
        }

        if !key.is_general() {
            if let Some(value) = self.snapshot.get(&key.general()) {
                return ResolvedRate {
                    value,
                    source: RateSource::General,
                };
            }
        }

        debug!(
            metric = %metric,
            state = %state,
            property_type = %property_type,
            "no benchmark configured; using compiled-in default"
        );
        ResolvedRate {
            value: metric.default_value(),
            source: RateSource::Default,
        }
    }

    /// Resolve by metric name, failing loudly for names outside the enumeration.
    pub fn resolve_named(
        &self,
        metric: &str,
        state: AustralianState,
        property_type: PropertyType,
        classification: Option<&str>,
        bedrooms: Option<u8>,
    ) -> Result<f64, RateError> {
        let metric = BenchmarkMetric::from_name(metric)?;
        Ok(self.resolve(metric, state, property_type, classification, bedrooms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(
        metric: BenchmarkMetric,
        classification: Option<&str>,
        bedrooms: Option<u8>,
        value: f64,
    ) -> RateParameter {
        RateParameter {
            metric,
            state: AustralianState::Vic,
            property_type: PropertyType::Established,
            classification: classification.map(str::to_string),
            bedrooms,
            value,
            active: true,
        }
    }

    fn snapshot() -> BenchmarkSnapshot {
        BenchmarkSnapshot::from_rows(vec![
            row(BenchmarkMetric::CouncilRatePercent, None, None, 0.25),
            row(BenchmarkMetric::CouncilRatePercent, Some("unit"), Some(2), 0.18),
            row(BenchmarkMetric::CouncilRatePercent, Some("house"), None, 0.31),
        ])
    }

    #[test]
    fn prefers_the_most_specific_row() {
        let snapshot = snapshot();
        let resolver = RateResolver::new(&snapshot);

        let resolved = resolver.resolve_traced(
            BenchmarkMetric::CouncilRatePercent,
            AustralianState::Vic,
            PropertyType::Established,
            Some("Unit"),
            Some(2),
        );

        assert_eq!(resolved.value, 0.18);
        assert_eq!(resolved.source, RateSource::Specific);
    }

    #[test]
    fn falls_back_to_general_row_when_specific_missing() {
        let snapshot = snapshot();
        let resolver = RateResolver::new(&snapshot);

        let resolved = resolver.resolve_traced(
            BenchmarkMetric::CouncilRatePercent,
            AustralianState::Vic,
            PropertyType::Established,
            Some("unit"),
            Some(3),
        );

        assert_eq!(resolved.value, 0.25);
        assert_eq!(resolved.source, RateSource::General);
    }

    #[test]
    fn classification_only_rows_need_an_exact_match() {
        let snapshot = snapshot();
        let resolver = RateResolver::new(&snapshot);

        let house = resolver.resolve(
            BenchmarkMetric::CouncilRatePercent,
            AustralianState::Vic,
            PropertyType::Established,
            Some("house"),
            None,
        );
        let house_with_bedrooms = resolver.resolve(
            BenchmarkMetric::CouncilRatePercent,
            AustralianState::Vic,
            PropertyType::Established,
            Some("house"),
            Some(4),
        );

        assert_eq!(house, 0.31);
        assert_eq!(house_with_bedrooms, 0.25);
    }

    #[test]
    fn falls_back_to_default_for_other_states() {
        let snapshot = snapshot();
        let resolver = RateResolver::new(&snapshot);

        let resolved = resolver.resolve_traced(
            BenchmarkMetric::CouncilRatePercent,
            AustralianState::Nsw,
            PropertyType::Established,
            Some("unit"),
            Some(2),
        );

        assert_eq!(
            resolved.value,
            BenchmarkMetric::CouncilRatePercent.default_value()
        );
        assert_eq!(resolved.source, RateSource::Default);
    }

    #[test]
    fn inactive_rows_are_invisible() {
        let mut inactive = row(BenchmarkMetric::InsurancePercent, None, None, 0.9);
        inactive.active = false;
        let snapshot = BenchmarkSnapshot::from_rows(vec![inactive]);
        let resolver = RateResolver::new(&snapshot);

        assert!(snapshot.is_empty());
        assert_eq!(
            resolver.resolve(
                BenchmarkMetric::InsurancePercent,
                AustralianState::Vic,
                PropertyType::Established,
                None,
                None,
            ),
            BenchmarkMetric::InsurancePercent.default_value()
        );
    }

    #[test]
    fn later_duplicate_rows_win() {
        let snapshot = BenchmarkSnapshot::from_rows(vec![
            row(BenchmarkMetric::MaintenancePercent, None, None, 0.8),
            row(BenchmarkMetric::MaintenancePercent, None, None, 1.4),
        ]);

        assert_eq!(snapshot.len(), 1);
        assert_eq!(
            RateResolver::new(&snapshot).resolve(
                BenchmarkMetric::MaintenancePercent,
                AustralianState::Vic,
                PropertyType::Established,
                None,
                None,
            ),
            1.4
        );
    }

    #[test]
    fn unusable_values_fall_through_to_the_next_level() {
        let snapshot = BenchmarkSnapshot::from_rows(vec![
            row(BenchmarkMetric::CouncilRatePercent, None, None, 0.25),
            row(BenchmarkMetric::CouncilRatePercent, Some("unit"), Some(2), f64::NAN),
            row(BenchmarkMetric::InsurancePercent, None, None, -0.4),
            row(BenchmarkMetric::WaterRatesAnnual, None, None, f64::INFINITY),
        ]);
        let resolver = RateResolver::new(&snapshot);
        let resolve = |metric, classification, bedrooms| {
            resolver.resolve_traced(
                metric,
                AustralianState::Vic,
                PropertyType::Established,
                classification,
                bedrooms,
            )
        };

        assert_eq!(snapshot.len(), 1);
        assert_eq!(
            resolve(BenchmarkMetric::CouncilRatePercent, Some("unit"), Some(2)),
            ResolvedRate {
                value: 0.25,
                source: RateSource::General,
            }
        );
        assert_eq!(
            resolve(BenchmarkMetric::InsurancePercent, None, None).source,
            RateSource::Default
        );
        assert_eq!(
            resolve(BenchmarkMetric::WaterRatesAnnual, None, None).value,
            1_200.0
        );
    }

    #[test]
    fn repeated_resolution_is_identical() {
        let snapshot = snapshot();
        let resolver = RateResolver::new(&snapshot);

        let first = resolver.resolve_traced(
            BenchmarkMetric::CouncilRatePercent,
            AustralianState::Vic,
            PropertyType::Established,
            Some("unit"),
            Some(2),
        );
        let second = resolver.resolve_traced(
            BenchmarkMetric::CouncilRatePercent,
            AustralianState::Vic,
            PropertyType::Established,
            Some("unit"),
            Some(2),
        );

        assert_eq!(first, second);
        assert_eq!(snapshot, self::snapshot());
    }

    #[test]
    fn unknown_metric_names_fail_loudly() {
        let snapshot = BenchmarkSnapshot::default();
        let resolver = RateResolver::new(&snapshot);

        let err = resolver
            .resolve_named(
                "strata_levy",
                AustralianState::Qld,
                PropertyType::NewDwelling,
                None,
                None,
            )
            .expect_err("strata_levy is not a known metric");
        assert_eq!(err, RateError::UnknownMetric("strata_levy".to_string()));

        let council = resolver
            .resolve_named(
                "council_rate_percent",
                AustralianState::Qld,
                PropertyType::NewDwelling,
                None,
                None,
            )
            .expect("known metric resolves");
        assert_eq!(council, 0.30);
    }
}
