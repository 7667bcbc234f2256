use serde::{Deserialize, Serialize};

use super::domain::{
    AustralianState, BuyerProfile, CalculationRequest, CitizenshipStatus, DisplayCurrency,
    EntityType, PropertyRequest, PropertyType,
};

/// Input problems the buyer can correct; surfaced verbatim to callers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("unknown citizenship status '{0}'")]
    UnknownCitizenship(String),
    #[error("unknown property type '{0}'")]
    UnknownPropertyType(String),
    #[error("unknown state or territory code '{0}'")]
    UnknownState(String),
    #[error("unknown entity type '{0}'")]
    UnknownEntityType(String),
    #[error("property value must be a positive amount, found {0}")]
    NonPositiveValue(f64),
    #[error("deposit percentage must be between 0 and 100, found {0}")]
    DepositOutOfRange(f64),
    #[error("visa subtype must not be blank when provided")]
    EmptyVisaSubtype,
    #[error("currency code must be three letters, found '{0}'")]
    InvalidCurrency(String),
    #[error("exchange rate must be a positive number, found {0}")]
    InvalidExchangeRate(f64),
}

/// Raw request as captured by a form or API client, before any validation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculationSubmission {
    #[serde(default)]
    pub citizenship_status: String,
    #[serde(default)]
    pub visa_subtype: Option<String>,
    #[serde(default)]
    pub ordinarily_resident: Option<bool>,
    #[serde(default)]
    pub property_type: String,
    #[serde(default)]
    pub property_value: f64,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub first_home_buyer: Option<bool>,
    #[serde(default)]
    pub entity_type: Option<String>,
    #[serde(default)]
    pub deposit_percent: Option<f64>,
    #[serde(default)]
    pub classification: Option<String>,
    #[serde(default)]
    pub bedrooms: Option<u8>,
    #[serde(default)]
    pub currency: Option<CurrencySubmission>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencySubmission {
    pub code: String,
    pub aud_rate: f64,
}

/// Turns submissions into validated requests. Nothing downstream runs on a
/// submission that fails here.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    pub fn validate(
        &self,
        submission: CalculationSubmission,
    ) -> Result<CalculationRequest, ValidationError> {
        let citizenship: CitizenshipStatus =
            required(&submission.citizenship_status, "citizenship_status")?.parse()?;

        let visa_subtype = match submission.visa_subtype {
            Some(raw) if raw.trim().is_empty() => return Err(ValidationError::EmptyVisaSubtype),
            Some(raw) => Some(raw.trim().to_string()),
            None => None,
        };

        let ordinarily_resident = submission
            .ordinarily_resident
            .unwrap_or_else(|| citizenship.has_residency_ties());

        let property_type: PropertyType =
            required(&submission.property_type, "property_type")?.parse()?;

        let value = submission.property_value;
        if !value.is_finite() || value <= 0.0 {
            return Err(ValidationError::NonPositiveValue(value));
        }

        let state: AustralianState = required(&submission.state, "state")?.parse()?;

        let entity_type = match submission.entity_type.as_deref().map(str::trim) {
            None | Some("") => EntityType::Individual,
            Some(raw) => raw.parse()?,
        };

        let deposit_percent = submission
            .deposit_percent
            .ok_or(ValidationError::MissingField("deposit_percent"))?;
        if !(0.0..=100.0).contains(&deposit_percent) {
            return Err(ValidationError::DepositOutOfRange(deposit_percent));
        }

        let classification = submission
            .classification
            .map(|raw| raw.trim().to_ascii_lowercase())
            .filter(|raw| !raw.is_empty());

        let currency = submission.currency.map(validate_currency).transpose()?;

        Ok(CalculationRequest {
            buyer: BuyerProfile {
                citizenship,
                visa_subtype,
                ordinarily_resident,
            },
            property: PropertyRequest {
                property_type,
                value,
                state,
                first_home_buyer: submission.first_home_buyer.unwrap_or(false),
                entity_type,
                deposit_percent,
                classification,
                bedrooms: submission.bedrooms,
            },
            currency,
        })
    }
}

fn required<'a>(raw: &'a str, field: &'static str) -> Result<&'a str, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(trimmed)
    }
}

fn validate_currency(currency: CurrencySubmission) -> Result<DisplayCurrency, ValidationError> {
    let code = currency.code.trim().to_ascii_uppercase();
    if code.len() != 3 || !code.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return Err(ValidationError::InvalidCurrency(currency.code));
    }

    if !currency.aud_rate.is_finite() || currency.aud_rate <= 0.0 {
        return Err(ValidationError::InvalidExchangeRate(currency.aud_rate));
    }

    Ok(DisplayCurrency {
        code,
        aud_rate: currency.aud_rate,
    })
}
