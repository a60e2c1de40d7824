//! Milestone reference data model
//!
//! These types describe the developmental milestone registry: what a
//! milestone is, how its onset age varies across regions, and how a user or a
//! cultural profile overrides it. Registry instances are immutable after
//! startup; user-owned overrides travel inside the calculation context.

use chrono::NaiveDate;
use fxhash::FxHashMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Closed set of milestone keys.
///
/// Serialized with the snake_case ids used by persisted settings and API
/// payloads (`"walking"`, `"coffee_consumption"`, ...). Unknown id strings are
/// rejected at the deserialization boundary, so lookups inside the engine
/// never deal with arbitrary strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneId {
    Walking,
    CoffeeConsumption,
    Reading,
    Driving,
    AlcoholConsumption,
    SmartphoneUsage,
    SocialMedia,
}

impl MilestoneId {
    /// All known milestone keys, in registry order.
    pub const ALL: [MilestoneId; 7] = [
        MilestoneId::Walking,
        MilestoneId::CoffeeConsumption,
        MilestoneId::Reading,
        MilestoneId::Driving,
        MilestoneId::AlcoholConsumption,
        MilestoneId::SmartphoneUsage,
        MilestoneId::SocialMedia,
    ];

    /// The stable string id used in settings payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneId::Walking => "walking",
            MilestoneId::CoffeeConsumption => "coffee_consumption",
            MilestoneId::Reading => "reading",
            MilestoneId::Driving => "driving",
            MilestoneId::AlcoholConsumption => "alcohol_consumption",
            MilestoneId::SmartphoneUsage => "smartphone_usage",
            MilestoneId::SocialMedia => "social_media",
        }
    }

    /// Parse a stable string id; `None` for anything outside the closed set.
    pub fn from_id(id: &str) -> Option<MilestoneId> {
        MilestoneId::ALL.iter().copied().find(|m| m.as_str() == id)
    }
}

impl std::fmt::Display for MilestoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MilestoneId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MilestoneId::from_id(s).ok_or_else(|| format!("unknown milestone id: {}", s))
    }
}

/// Regional variation of a milestone's onset age.
///
/// Informational only: the resolver works from profile-level adjustments, not
/// from these entries. They feed settings screens and catalog output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CulturalVariation {
    pub region: String,
    pub typical_age_months: i32,
    /// Fraction of the population that engages in the activity at all (0-1).
    pub prevalence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A life activity with a typical onset age and realistic bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentalMilestone {
    pub id: MilestoneId,
    pub name: String,
    pub description: String,
    /// Age in months when the activity typically begins.
    pub typical_age_months: i32,
    /// Earliest realistic onset age.
    pub earliest_age_months: i32,
    /// Latest typical onset age.
    pub latest_age_months: i32,
    pub cultural_variations: Vec<CulturalVariation>,
    /// Whether the milestone is necessary for its statistic at all.
    pub is_required: bool,
}

/// User-owned override for a single milestone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalMilestone {
    pub milestone_id: MilestoneId,
    /// Personal onset age in months. Wins over every profile-derived age and
    /// is deliberately never clamped; range checks live in a separate
    /// validation helper so stale persisted values cannot fail a calculation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_age_months: Option<i32>,
    /// Whether the user engages in this activity at all.
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Exact start date when known. Carried for display; the calculator works
    /// in whole months.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_start_date: Option<NaiveDate>,
}

fn default_active() -> bool {
    true
}

impl PersonalMilestone {
    /// Override with an explicit onset age.
    pub fn at_age(milestone_id: MilestoneId, personal_age_months: i32) -> Self {
        Self {
            milestone_id,
            personal_age_months: Some(personal_age_months),
            is_active: true,
            custom_start_date: None,
        }
    }

    /// Mark an activity as one the user never took up.
    pub fn inactive(milestone_id: MilestoneId) -> Self {
        Self {
            milestone_id,
            personal_age_months: None,
            is_active: false,
            custom_start_date: None,
        }
    }
}

/// Named age band used for contextual labeling.
///
/// The registry phases partition 0-1200 months without gaps; lookup is
/// "first phase whose [start, end) contains the age".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LifePhase {
    pub name: String,
    /// Inclusive start of the band, in months.
    pub start_age_months: i32,
    /// Exclusive end of the band, in months.
    pub end_age_months: i32,
    pub characteristics: Vec<String>,
    pub typical_activities: Vec<String>,
}

impl LifePhase {
    /// Whether `age_in_months` falls inside this band.
    pub fn contains(&self, age_in_months: i64) -> bool {
        age_in_months >= i64::from(self.start_age_months)
            && age_in_months < i64::from(self.end_age_months)
    }
}

/// Regional bundle of milestone adjustments and activity prevalence.
///
/// Exactly one profile is active per calculation; the first predefined
/// profile is the default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CulturalProfile {
    pub id: String,
    pub name: String,
    pub region: String,
    /// Signed month delta applied to a milestone's typical onset age.
    #[serde(default)]
    pub milestone_adjustments: FxHashMap<MilestoneId, i32>,
    /// Probability (0-1) that a person in this profile engages in an activity.
    #[serde(default)]
    pub activity_prevalence: FxHashMap<MilestoneId, f64>,
    /// Profile-local milestone definitions consulted before the registry.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_milestones: Vec<DevelopmentalMilestone>,
}

impl CulturalProfile {
    /// Month delta for a milestone, 0 when the profile has no entry.
    pub fn adjustment_for(&self, id: MilestoneId) -> i32 {
        self.milestone_adjustments.get(&id).copied().unwrap_or(0)
    }

    /// Prevalence for a milestone, if the profile defines one.
    pub fn prevalence_for(&self, id: MilestoneId) -> Option<f64> {
        self.activity_prevalence.get(&id).copied()
    }
}
