use super::schedule::{
    step_lookup, StepTable, ENTITY_FEE_MULTIPLIERS, ESTABLISHED_APPROVAL_FEES,
    NEW_DWELLING_APPROVAL_FEES, VACANT_LAND_APPROVAL_FEES,
};
use crate::calculator::domain::{EntityType, PropertyType};

/// Tier table for an individual purchaser.
pub fn approval_fee_table(property_type: PropertyType, first_home_buyer: bool) -> StepTable {
    match property_type {
        PropertyType::VacantLand => VACANT_LAND_APPROVAL_FEES,
        PropertyType::Established if !first_home_buyer => ESTABLISHED_APPROVAL_FEES,
        PropertyType::Established | PropertyType::NewDwelling | PropertyType::Commercial => {
            NEW_DWELLING_APPROVAL_FEES
        }
    }
}

pub fn individual_approval_fee(
    value: f64,
    property_type: PropertyType,
    first_home_buyer: bool,
) -> f64 {
    step_lookup(approval_fee_table(property_type, first_home_buyer), value)
}

/// Multiplier applied to the individual fee; always 1 for individuals.
pub fn entity_multiplier(value: f64, entity_type: EntityType) -> f64 {
    match entity_type {
        EntityType::Individual => 1.0,
        EntityType::Company | EntityType::Trust => step_lookup(ENTITY_FEE_MULTIPLIERS, value),
    }
}

/// Approval application fee, before any eligibility gating.
pub fn approval_fee(
    value: f64,
    property_type: PropertyType,
    first_home_buyer: bool,
    entity_type: EntityType,
) -> f64 {
    individual_approval_fee(value, property_type, first_home_buyer)
        * entity_multiplier(value, entity_type)
}
