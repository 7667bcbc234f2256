use serde::{Deserialize, Serialize};

use super::domain::{BuyerProfile, CitizenshipStatus, PropertyRequest, PropertyType};

const APPROVAL_BEFORE_CONTRACT: &str =
    "Approval must be obtained before signing an unconditional contract";

/// Which row of the decision table governed an eligibility result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuyerCategory {
    Domestic,
    CommercialThreshold,
    TemporaryResident,
    ForeignPerson,
}

/// Statutory decision period for an approval application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingTimeline {
    pub standard_days: u16,
    pub expedited_days: u16,
}

/// Outcome of the eligibility decision table.
///
/// A result that forbids the purchase never requires approval, so every
/// approval-gated charge downstream collapses to zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibilityResult {
    can_purchase: bool,
    requires_approval: bool,
    restrictions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    processing_timeline: Option<ProcessingTimeline>,
    category: BuyerCategory,
}

impl EligibilityResult {
    fn unrestricted(category: BuyerCategory) -> Self {
        Self {
            can_purchase: true,
            requires_approval: false,
            restrictions: Vec::new(),
            processing_timeline: None,
            category,
        }
    }

    fn approval_required(
        category: BuyerCategory,
        restrictions: Vec<String>,
        timeline: ProcessingTimeline,
    ) -> Self {
        Self {
            can_purchase: true,
            requires_approval: true,
            restrictions,
            processing_timeline: Some(timeline),
            category,
        }
    }

    fn prohibited(category: BuyerCategory, restrictions: Vec<String>) -> Self {
        Self {
            can_purchase: false,
            requires_approval: false,
            restrictions,
            processing_timeline: None,
            category,
        }
    }

    pub fn can_purchase(&self) -> bool {
        self.can_purchase
    }

    pub fn requires_approval(&self) -> bool {
        self.requires_approval
    }

    pub fn restrictions(&self) -> &[String] {
        &self.restrictions
    }

    pub fn processing_timeline(&self) -> Option<ProcessingTimeline> {
        self.processing_timeline
    }

    pub fn category(&self) -> BuyerCategory {
        self.category
    }
}

/// Thresholds and windows quoted in approval conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityPolicy {
    /// Commercial purchases at or below this value need no approval.
    pub commercial_approval_threshold: f64,
    pub construction_commence_months: u16,
    pub construction_complete_years: u16,
    pub sale_after_departure_months: u16,
    pub minimum_occupancy_months: u16,
    pub timeline: ProcessingTimeline,
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self {
            commercial_approval_threshold: 339_000_000.0,
            construction_commence_months: 24,
            construction_complete_years: 4,
            sale_after_departure_months: 3,
            minimum_occupancy_months: 6,
            timeline: ProcessingTimeline {
                standard_days: 30,
                expedited_days: 10,
            },
        }
    }
}

/// Decision table mapping buyer residency and property type to an eligibility result.
#[derive(Debug, Clone, Default)]
pub struct EligibilityClassifier {
    policy: EligibilityPolicy,
}

impl EligibilityClassifier {
    pub fn with_policy(policy: EligibilityPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &EligibilityPolicy {
        &self.policy
    }

    pub fn classify(&self, buyer: &BuyerProfile, property: &PropertyRequest) -> EligibilityResult {
        if buyer.is_domestic() {
            return EligibilityResult::unrestricted(BuyerCategory::Domestic);
        }

        let category = match buyer.citizenship {
            CitizenshipStatus::ForeignPerson => BuyerCategory::ForeignPerson,
            _ => BuyerCategory::TemporaryResident,
        };

        match (category, property.property_type) {
            (_, PropertyType::Commercial) => self.commercial(property.value),
            (BuyerCategory::ForeignPerson, PropertyType::Established) => {
                EligibilityResult::prohibited(
                    category,
                    vec![
                        "Foreign persons cannot purchase established dwellings".to_string(),
                        "Redevelopment exemptions are not assessed by this calculator".to_string(),
                    ],
                )
            }
            (_, PropertyType::Established) => self.approval(
                category,
                vec![
                    "Limited to one established dwelling".to_string(),
                    "Must be used as your principal place of residence".to_string(),
                    format!(
                        "Must be sold within {} months of ceasing to live in it or leaving Australia",
                        self.policy.sale_after_departure_months
                    ),
                    "Cannot be rented out while you own it".to_string(),
                ],
            ),
            (_, PropertyType::NewDwelling) => self.approval(
                category,
                vec![format!(
                    "Annual vacancy fee applies if the dwelling is not occupied or rented for at least {} months each year",
                    self.policy.minimum_occupancy_months
                )],
            ),
            (_, PropertyType::VacantLand) => self.approval(
                category,
                vec![
                    format!(
                        "Construction must commence within {} months of approval",
                        self.policy.construction_commence_months
                    ),
                    format!(
                        "Construction must be completed within {} years of approval",
                        self.policy.construction_complete_years
                    ),
                ],
            ),
        }
    }

    fn approval(&self, category: BuyerCategory, conditions: Vec<String>) -> EligibilityResult {
        let mut restrictions = Vec::with_capacity(conditions.len() + 1);
        restrictions.push(APPROVAL_BEFORE_CONTRACT.to_string());
        restrictions.extend(conditions);
        EligibilityResult::approval_required(category, restrictions, self.policy.timeline)
    }

    fn commercial(&self, value: f64) -> EligibilityResult {
        if value > self.policy.commercial_approval_threshold {
            EligibilityResult::approval_required(
                BuyerCategory::CommercialThreshold,
                vec![
                    "Approval required because the value exceeds the commercial monetary threshold"
                        .to_string(),
                ],
                self.policy.timeline,
            )
        } else {
            EligibilityResult::unrestricted(BuyerCategory::CommercialThreshold)
        }
    }
}
