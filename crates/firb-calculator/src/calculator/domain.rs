use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::intake::ValidationError;

/// Residency status a buyer declares on intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CitizenshipStatus {
    Citizen,
    PermanentResident,
    TemporaryResident,
    ForeignPerson,
}

impl CitizenshipStatus {
    pub const fn label(self) -> &'static str {
        match self {
            CitizenshipStatus::Citizen => "citizen",
            CitizenshipStatus::PermanentResident => "permanent_resident",
            CitizenshipStatus::TemporaryResident => "temporary_resident",
            CitizenshipStatus::ForeignPerson => "foreign_person",
        }
    }

    /// Statuses for which the ordinarily-resident flag carries meaning.
    pub const fn has_residency_ties(self) -> bool {
        matches!(
            self,
            CitizenshipStatus::Citizen | CitizenshipStatus::PermanentResident
        )
    }
}

impl FromStr for CitizenshipStatus {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize_token(raw).as_str() {
            "citizen" | "australiancitizen" => Ok(Self::Citizen),
            "permanent" | "permanentresident" | "pr" => Ok(Self::PermanentResident),
            "temporary" | "temporaryresident" | "temporaryvisa" | "temporaryvisaholder" => {
                Ok(Self::TemporaryResident)
            }
            "foreign" | "foreignperson" | "foreignnational" => Ok(Self::ForeignPerson),
            _ => Err(ValidationError::UnknownCitizenship(raw.trim().to_string())),
        }
    }
}

/// Kind of property being purchased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    NewDwelling,
    Established,
    VacantLand,
    Commercial,
}

impl PropertyType {
    pub const ALL: [PropertyType; 4] = [
        PropertyType::NewDwelling,
        PropertyType::Established,
        PropertyType::VacantLand,
        PropertyType::Commercial,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            PropertyType::NewDwelling => "new_dwelling",
            PropertyType::Established => "established",
            PropertyType::VacantLand => "vacant_land",
            PropertyType::Commercial => "commercial",
        }
    }

    pub const fn is_residential(self) -> bool {
        !matches!(self, PropertyType::Commercial)
    }
}

impl FromStr for PropertyType {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize_token(raw).as_str() {
            "new" | "newdwelling" | "newhome" | "offtheplan" => Ok(Self::NewDwelling),
            "established" | "establisheddwelling" | "existing" => Ok(Self::Established),
            "vacant" | "vacantland" | "land" => Ok(Self::VacantLand),
            "commercial" => Ok(Self::Commercial),
            _ => Err(ValidationError::UnknownPropertyType(raw.trim().to_string())),
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The eight Australian states and territories, each with its own duty regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AustralianState {
    #[serde(rename = "NSW")]
    Nsw,
    #[serde(rename = "VIC")]
    Vic,
    #[serde(rename = "QLD")]
    Qld,
    #[serde(rename = "SA")]
    Sa,
    #[serde(rename = "WA")]
    Wa,
    #[serde(rename = "TAS")]
    Tas,
    #[serde(rename = "ACT")]
    Act,
    #[serde(rename = "NT")]
    Nt,
}

impl AustralianState {
    pub const ALL: [AustralianState; 8] = [
        AustralianState::Nsw,
        AustralianState::Vic,
        AustralianState::Qld,
        AustralianState::Sa,
        AustralianState::Wa,
        AustralianState::Tas,
        AustralianState::Act,
        AustralianState::Nt,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            AustralianState::Nsw => "NSW",
            AustralianState::Vic => "VIC",
            AustralianState::Qld => "QLD",
            AustralianState::Sa => "SA",
            AustralianState::Wa => "WA",
            AustralianState::Tas => "TAS",
            AustralianState::Act => "ACT",
            AustralianState::Nt => "NT",
        }
    }
}

impl FromStr for AustralianState {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let code = raw.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|state| state.code() == code)
            .ok_or_else(|| ValidationError::UnknownState(raw.trim().to_string()))
    }
}

impl fmt::Display for AustralianState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Legal form of the purchaser; companies and trusts pay scaled approval fees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    #[default]
    Individual,
    Company,
    Trust,
}

impl EntityType {
    pub const fn label(self) -> &'static str {
        match self {
            EntityType::Individual => "individual",
            EntityType::Company => "company",
            EntityType::Trust => "trust",
        }
    }
}

impl FromStr for EntityType {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize_token(raw).as_str() {
            "individual" | "person" => Ok(Self::Individual),
            "company" | "corporation" => Ok(Self::Company),
            "trust" => Ok(Self::Trust),
            _ => Err(ValidationError::UnknownEntityType(raw.trim().to_string())),
        }
    }
}

/// Validated buyer residency snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerProfile {
    pub citizenship: CitizenshipStatus,
    pub visa_subtype: Option<String>,
    pub ordinarily_resident: bool,
}

impl BuyerProfile {
    pub fn new(citizenship: CitizenshipStatus) -> Self {
        Self {
            citizenship,
            visa_subtype: None,
            ordinarily_resident: citizenship.has_residency_ties(),
        }
    }

    /// Citizens and ordinarily-resident permanent residents are outside the foreign
    /// investment regime altogether.
    pub fn is_domestic(&self) -> bool {
        match self.citizenship {
            CitizenshipStatus::Citizen => true,
            CitizenshipStatus::PermanentResident => self.ordinarily_resident,
            CitizenshipStatus::TemporaryResident | CitizenshipStatus::ForeignPerson => false,
        }
    }
}

/// Validated description of the property and how it is being financed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRequest {
    pub property_type: PropertyType,
    pub value: f64,
    pub state: AustralianState,
    pub first_home_buyer: bool,
    pub entity_type: EntityType,
    pub deposit_percent: f64,
    pub classification: Option<String>,
    pub bedrooms: Option<u8>,
}

impl PropertyRequest {
    pub fn new(property_type: PropertyType, value: f64, state: AustralianState) -> Self {
        Self {
            property_type,
            value,
            state,
            first_home_buyer: false,
            entity_type: EntityType::Individual,
            deposit_percent: 20.0,
            classification: None,
            bedrooms: None,
        }
    }

    /// Loan-to-value ratio expressed as a percentage.
    pub fn lvr_percent(&self) -> f64 {
        100.0 - self.deposit_percent
    }

    pub fn loan_amount(&self) -> f64 {
        self.value * self.lvr_percent() / 100.0
    }

    pub fn has_loan(&self) -> bool {
        self.deposit_percent < 100.0
    }
}

/// Currency the buyer wants figures reported in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayCurrency {
    pub code: String,
    /// Units of the display currency per Australian dollar.
    pub aud_rate: f64,
}

impl DisplayCurrency {
    pub fn aud() -> Self {
        Self {
            code: "AUD".to_string(),
            aud_rate: 1.0,
        }
    }
}

/// Fully validated calculation input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub buyer: BuyerProfile,
    pub property: PropertyRequest,
    pub currency: Option<DisplayCurrency>,
}

pub(crate) fn normalize_token(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|ch| !matches!(ch, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}
