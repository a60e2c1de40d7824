//! Parameter and result types for the statistics engine

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::milestones::{registry, CulturalProfile, MilestoneId, PersonalMilestone};

/// Behavioral rates the user can tune in settings.
///
/// The settings surface clamps every value to >= 0 before it reaches the
/// engine; the calculator assumes non-negative inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ConfigurableParams {
    pub sleep_hours_per_day: f64,
    pub heart_rate_per_minute: f64,
    pub steps_per_day: f64,
    pub cups_of_coffee_per_day: f64,
    pub meals_per_day: f64,
    pub breaths_per_minute: f64,
    pub reading_speed_pages_per_hour: f64,
    pub average_book_pages: f64,
    pub average_movie_minutes: f64,
}

impl Default for ConfigurableParams {
    fn default() -> Self {
        Self {
            sleep_hours_per_day: 8.0,
            heart_rate_per_minute: 70.0,
            steps_per_day: 7000.0,
            cups_of_coffee_per_day: 2.0,
            meals_per_day: 3.0,
            breaths_per_minute: 16.0,
            reading_speed_pages_per_hour: 50.0,
            average_book_pages: 300.0,
            average_movie_minutes: 120.0,
        }
    }
}

/// Whole-life accumulation counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LifeStats {
    pub days_lived: u64,
    pub hours_slept: u64,
    pub total_heartbeats: u64,
    pub breaths_taken: u64,
    pub meals_consumed: u64,
    pub steps_walked: u64,
    pub cups_of_coffee: u64,
    pub books_could_read: u64,
    pub movies_watched: u64,
    /// Kilometers carried around the sun by Earth's orbit.
    pub earth_distance_traveled: u64,
}

/// Where the person sits on the developmental timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DevelopmentalContext {
    /// Name of the life phase containing the current age; "Unknown" when the
    /// age falls outside the phase table.
    pub current_phase: String,
    /// Names of milestones whose resolved start age has been reached.
    pub milestones_achieved: Vec<String>,
    /// Names of milestones starting within the next 60 months.
    pub upcoming_milestones: Vec<String>,
}

/// [`LifeStats`] plus milestone-aware context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AdvancedLifeStats {
    #[serde(flatten)]
    pub stats: LifeStats,
    /// Whole years since the walking milestone, 0 when not yet reached.
    pub years_walking: u32,
    pub years_driving: u32,
    pub years_reading: u32,
    pub years_coffee_consumption: u32,
    pub developmental_context: DevelopmentalContext,
}

/// The single input bundle to the calculator.
///
/// Rebuilt by the caller whenever any constituent changes; the calculator
/// itself is a stateless transform over it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationContext {
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub personal_milestones: Vec<PersonalMilestone>,
    pub profile: CulturalProfile,
    #[serde(default)]
    pub params: ConfigurableParams,
}

impl CalculationContext {
    /// Context with the default profile and parameters.
    pub fn new(birth_date: NaiveDate) -> Self {
        Self {
            birth_date,
            personal_milestones: Vec::new(),
            profile: registry::default_cultural_profile().clone(),
            params: ConfigurableParams::default(),
        }
    }

    /// Replace the active cultural profile.
    pub fn with_profile(mut self, profile: CulturalProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Replace the configurable rates.
    pub fn with_params(mut self, params: ConfigurableParams) -> Self {
        self.params = params;
        self
    }

    /// Add a personal milestone override.
    pub fn with_personal_milestone(mut self, milestone: PersonalMilestone) -> Self {
        self.personal_milestones.push(milestone);
        self
    }

    /// First personal override recorded for a milestone, if any.
    pub fn personal_milestone(&self, id: MilestoneId) -> Option<&PersonalMilestone> {
        self.personal_milestones.iter().find(|pm| pm.milestone_id == id)
    }
}
