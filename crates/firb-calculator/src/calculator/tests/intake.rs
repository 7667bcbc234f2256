use super::common::*;
use crate::calculator::domain::{AustralianState, CitizenshipStatus, EntityType, PropertyType};
use crate::calculator::intake::{CurrencySubmission, IntakeGuard, ValidationError};

#[test]
fn accepts_loose_spellings_and_applies_defaults() {
    let mut raw = submission("Temporary Visa", "new-dwelling", 900_000.0, " vic ");
    raw.classification = Some(" Unit ".to_string());

    let request = IntakeGuard.validate(raw).expect("valid submission");

    assert_eq!(request.buyer.citizenship, CitizenshipStatus::TemporaryResident);
    assert!(!request.buyer.ordinarily_resident);
    assert_eq!(request.property.property_type, PropertyType::NewDwelling);
    assert_eq!(request.property.state, AustralianState::Vic);
    assert_eq!(request.property.entity_type, EntityType::Individual);
    assert!(!request.property.first_home_buyer);
    assert_eq!(request.property.classification.as_deref(), Some("unit"));
    assert!(request.currency.is_none());
}

#[test]
fn citizens_default_to_ordinarily_resident() {
    let request = IntakeGuard
        .validate(submission("citizen", "established", 700_000.0, "NSW"))
        .expect("valid submission");

    assert!(request.buyer.ordinarily_resident);
    assert!(request.buyer.is_domestic());
}

#[test]
fn missing_citizenship_is_reported_first() {
    let mut raw = submission("", "", -5.0, "");
    raw.deposit_percent = None;

    assert_eq!(
        IntakeGuard.validate(raw),
        Err(ValidationError::MissingField("citizenship_status"))
    );
}

#[test]
fn rejects_unknown_codes() {
    assert_eq!(
        IntakeGuard.validate(submission("martian", "established", 1.0, "NSW")),
        Err(ValidationError::UnknownCitizenship("martian".to_string()))
    );
    assert_eq!(
        IntakeGuard.validate(submission("foreign", "castle", 1.0, "NSW")),
        Err(ValidationError::UnknownPropertyType("castle".to_string()))
    );
    assert_eq!(
        IntakeGuard.validate(submission("foreign", "established", 1.0, "New South Wales")),
        Err(ValidationError::UnknownState("New South Wales".to_string()))
    );

    let mut raw = submission("foreign", "established", 1.0, "NSW");
    raw.entity_type = Some("partnership".to_string());
    assert_eq!(
        IntakeGuard.validate(raw),
        Err(ValidationError::UnknownEntityType("partnership".to_string()))
    );
}

#[test]
fn rejects_non_positive_and_non_finite_values() {
    assert_eq!(
        IntakeGuard.validate(submission("foreign", "established", 0.0, "NSW")),
        Err(ValidationError::NonPositiveValue(0.0))
    );
    assert!(matches!(
        IntakeGuard.validate(submission("foreign", "established", f64::NAN, "NSW")),
        Err(ValidationError::NonPositiveValue(_))
    ));
}

#[test]
fn deposit_is_required_and_bounded() {
    let mut raw = submission("foreign", "established", 500_000.0, "SA");
    raw.deposit_percent = None;
    assert_eq!(
        IntakeGuard.validate(raw.clone()),
        Err(ValidationError::MissingField("deposit_percent"))
    );

    raw.deposit_percent = Some(120.0);
    assert_eq!(
        IntakeGuard.validate(raw.clone()),
        Err(ValidationError::DepositOutOfRange(120.0))
    );

    raw.deposit_percent = Some(100.0);
    assert!(IntakeGuard.validate(raw).is_ok());
}

#[test]
fn blank_visa_subtype_is_rejected() {
    let mut raw = submission("temporary", "established", 500_000.0, "QLD");
    raw.visa_subtype = Some("   ".to_string());

    assert_eq!(IntakeGuard.validate(raw), Err(ValidationError::EmptyVisaSubtype));
}

#[test]
fn currency_code_and_rate_are_checked() {
    let mut raw = foreign_new_dwelling_vic();
    raw.currency = Some(CurrencySubmission {
        code: "usdollar".to_string(),
        aud_rate: 0.65,
    });
    assert_eq!(
        IntakeGuard.validate(raw.clone()),
        Err(ValidationError::InvalidCurrency("usdollar".to_string()))
    );

    raw.currency = Some(CurrencySubmission {
        code: "usd".to_string(),
        aud_rate: 0.0,
    });
    assert_eq!(
        IntakeGuard.validate(raw.clone()),
        Err(ValidationError::InvalidExchangeRate(0.0))
    );

    raw.currency = Some(CurrencySubmission {
        code: "usd".to_string(),
        aud_rate: 0.65,
    });
    let request = IntakeGuard.validate(raw).expect("valid currency");
    let currency = request.currency.expect("currency kept");
    assert_eq!(currency.code, "USD");
    assert_eq!(currency.aud_rate, 0.65);
}

#[test]
fn errors_read_as_plain_sentences() {
    assert_eq!(
        ValidationError::MissingField("state").to_string(),
        "state is required"
    );
    assert_eq!(
        ValidationError::DepositOutOfRange(-1.0).to_string(),
        "deposit percentage must be between 0 and 100, found -1"
    );
}
