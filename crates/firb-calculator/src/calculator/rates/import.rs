use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::{BenchmarkMetric, RateParameter};
use crate::calculator::domain::{AustralianState, PropertyType};

#[derive(Debug, thiserror::Error)]
pub enum BenchmarkImportError {
    #[error("failed to read benchmark file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid benchmark CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("benchmark row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },
}

pub fn load_rate_parameters<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<RateParameter>, BenchmarkImportError> {
    let file = std::fs::File::open(path)?;
    parse_rate_parameters(file)
}

/// Parse `metric,state,property_type,classification,bedrooms,value,active` rows.
/// Inactive rows are returned so callers can audit them; snapshots drop them.
pub fn parse_rate_parameters<R: Read>(
    reader: R,
) -> Result<Vec<RateParameter>, BenchmarkImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut parameters = Vec::new();

    for (index, record) in csv_reader.deserialize::<BenchmarkRow>().enumerate() {
        let row = record?;
        // header is line 1
        let line = index + 2;
        parameters.push(row.into_parameter(line)?);
    }

    Ok(parameters)
}

#[derive(Debug, Deserialize)]
struct BenchmarkRow {
    metric: String,
    state: String,
    property_type: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    classification: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    bedrooms: Option<String>,
    value: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    active: Option<String>,
}

impl BenchmarkRow {
    fn into_parameter(self, row: usize) -> Result<RateParameter, BenchmarkImportError> {
        let invalid = |reason: String| BenchmarkImportError::InvalidRow { row, reason };

        let metric =
            BenchmarkMetric::from_name(&self.metric).map_err(|err| invalid(err.to_string()))?;
        let state = self
            .state
            .parse::<AustralianState>()
            .map_err(|err| invalid(err.to_string()))?;
        let property_type = self
            .property_type
            .parse::<PropertyType>()
            .map_err(|err| invalid(err.to_string()))?;

        let bedrooms = self
            .bedrooms
            .map(|raw| {
                raw.parse::<u8>()
                    .map_err(|_| invalid(format!("bedrooms '{raw}' is not a whole number")))
            })
            .transpose()?;

        let value = self
            .value
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value >= 0.0)
            .ok_or_else(|| {
                invalid(format!(
                    "value '{}' must be a non-negative number",
                    self.value
                ))
            })?;

        let active = match self.active.as_deref() {
            None => true,
            Some(raw) => parse_flag(raw)
                .ok_or_else(|| invalid(format!("active flag '{raw}' is not a boolean")))?,
        };

        Ok(RateParameter {
            metric,
            state,
            property_type,
            classification: self.classification.map(|raw| raw.to_ascii_lowercase()),
            bedrooms,
            value,
            active,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Some(true),
        "false" | "0" | "no" | "n" => Some(false),
        _ => None,
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
