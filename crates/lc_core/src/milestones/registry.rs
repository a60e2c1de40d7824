//! Immutable milestone reference tables
//!
//! Developmental milestones, life phases, and cultural profiles are
//! process-wide constant data: built once on first access and shared by
//! reference afterwards. There is deliberately no mutation path; everything
//! user-specific travels through [`PersonalMilestone`] overrides and the
//! selected [`CulturalProfile`] inside the calculation context.

use once_cell::sync::Lazy;

use super::types::{
    CulturalProfile, CulturalVariation, DevelopmentalMilestone, LifePhase, MilestoneId,
};

/// Upper edge of the phase table, in months (100 years).
pub const MAX_PHASE_AGE_MONTHS: i32 = 1200;

static MILESTONES: Lazy<Vec<DevelopmentalMilestone>> = Lazy::new(build_milestones);
static LIFE_PHASES: Lazy<Vec<LifePhase>> = Lazy::new(build_life_phases);
static CULTURAL_PROFILES: Lazy<Vec<CulturalProfile>> = Lazy::new(build_cultural_profiles);

/// All predefined developmental milestones.
pub fn milestones() -> &'static [DevelopmentalMilestone] {
    &MILESTONES
}

/// Look up a milestone definition by key.
pub fn milestone(id: MilestoneId) -> Option<&'static DevelopmentalMilestone> {
    MILESTONES.iter().find(|m| m.id == id)
}

/// All predefined life phases, ordered by start age.
pub fn life_phases() -> &'static [LifePhase] {
    &LIFE_PHASES
}

/// First phase whose `[start, end)` band contains the age, if any.
pub fn phase_for_age(age_in_months: i64) -> Option<&'static LifePhase> {
    LIFE_PHASES.iter().find(|phase| phase.contains(age_in_months))
}

/// All predefined cultural profiles.
pub fn cultural_profiles() -> &'static [CulturalProfile] {
    &CULTURAL_PROFILES
}

/// Look up a cultural profile by its string id.
pub fn profile_by_id(id: &str) -> Option<&'static CulturalProfile> {
    CULTURAL_PROFILES.iter().find(|p| p.id == id)
}

/// The profile used when the caller selects none: the first predefined one.
pub fn default_cultural_profile() -> &'static CulturalProfile {
    &CULTURAL_PROFILES[0]
}

fn variation(region: &str, typical_age_months: i32, prevalence: f64) -> CulturalVariation {
    CulturalVariation {
        region: region.to_string(),
        typical_age_months,
        prevalence,
        notes: None,
    }
}

fn variation_with_notes(
    region: &str,
    typical_age_months: i32,
    prevalence: f64,
    notes: &str,
) -> CulturalVariation {
    CulturalVariation {
        region: region.to_string(),
        typical_age_months,
        prevalence,
        notes: Some(notes.to_string()),
    }
}

fn build_milestones() -> Vec<DevelopmentalMilestone> {
    vec![
        DevelopmentalMilestone {
            id: MilestoneId::Walking,
            name: "Walking".to_string(),
            description: "Independent walking without support".to_string(),
            typical_age_months: 15,
            earliest_age_months: 9,
            latest_age_months: 24,
            cultural_variations: vec![
                variation("Global Average", 15, 1.0),
                variation("Northern Europe", 14, 1.0),
                variation_with_notes(
                    "Sub-Saharan Africa",
                    13,
                    1.0,
                    "Earlier due to cultural practices",
                ),
            ],
            is_required: true,
        },
        DevelopmentalMilestone {
            id: MilestoneId::CoffeeConsumption,
            name: "Coffee Consumption".to_string(),
            description: "Regular coffee drinking".to_string(),
            typical_age_months: 192,
            earliest_age_months: 144,
            latest_age_months: 360,
            cultural_variations: vec![
                variation("Nordic Countries", 168, 0.95),
                variation("United States", 192, 0.85),
                variation("Italy", 180, 0.90),
                variation("Middle East", 216, 0.70),
                variation("East Asia", 240, 0.60),
            ],
            is_required: false,
        },
        DevelopmentalMilestone {
            id: MilestoneId::Reading,
            name: "Independent Reading".to_string(),
            description: "Reading books independently for pleasure".to_string(),
            typical_age_months: 84,
            earliest_age_months: 48,
            latest_age_months: 120,
            cultural_variations: vec![
                variation("Finland", 84, 0.98),
                variation("Global Average", 90, 0.85),
                variation("Developing Regions", 108, 0.65),
            ],
            is_required: false,
        },
        DevelopmentalMilestone {
            id: MilestoneId::Driving,
            name: "Driving".to_string(),
            description: "Independent vehicle operation".to_string(),
            typical_age_months: 192,
            earliest_age_months: 168,
            latest_age_months: 216,
            cultural_variations: vec![
                variation("United States", 192, 0.90),
                variation("Europe", 216, 0.75),
                variation("Urban Asia", 240, 0.45),
                variation("Rural Areas", 180, 0.85),
            ],
            is_required: false,
        },
        DevelopmentalMilestone {
            id: MilestoneId::AlcoholConsumption,
            name: "Alcohol Consumption".to_string(),
            description: "Legal alcohol consumption".to_string(),
            typical_age_months: 252,
            earliest_age_months: 216,
            latest_age_months: 360,
            cultural_variations: vec![
                variation("United States", 252, 0.70),
                variation("Europe", 216, 0.80),
                variation_with_notes("Middle East", 0, 0.10, "Cultural/religious restrictions"),
                variation("East Asia", 240, 0.65),
            ],
            is_required: false,
        },
        DevelopmentalMilestone {
            id: MilestoneId::SmartphoneUsage,
            name: "Smartphone Usage".to_string(),
            description: "Regular smartphone use".to_string(),
            typical_age_months: 144,
            earliest_age_months: 96,
            latest_age_months: 180,
            cultural_variations: vec![
                variation("Developed Countries", 132, 0.95),
                variation("Global Average", 144, 0.85),
                variation("Developing Regions", 168, 0.70),
            ],
            is_required: false,
        },
        DevelopmentalMilestone {
            id: MilestoneId::SocialMedia,
            name: "Social Media Usage".to_string(),
            description: "Active social media participation".to_string(),
            typical_age_months: 156,
            earliest_age_months: 120,
            latest_age_months: 192,
            cultural_variations: vec![
                variation("Global Average", 156, 0.80),
                variation("North America", 144, 0.90),
                variation("Europe", 168, 0.85),
                variation("Restricted Regions", 216, 0.30),
            ],
            is_required: false,
        },
    ]
}

fn phase(
    name: &str,
    start_age_months: i32,
    end_age_months: i32,
    characteristics: &[&str],
    typical_activities: &[&str],
) -> LifePhase {
    LifePhase {
        name: name.to_string(),
        start_age_months,
        end_age_months,
        characteristics: characteristics.iter().map(|c| c.to_string()).collect(),
        typical_activities: typical_activities.iter().map(|a| a.to_string()).collect(),
    }
}

fn build_life_phases() -> Vec<LifePhase> {
    vec![
        phase(
            "Infancy",
            0,
            24,
            &[
                "Rapid physical development",
                "Basic motor skills",
                "Language acquisition begins",
            ],
            &["sleeping", "feeding", "basic_movement"],
        ),
        phase(
            "Early Childhood",
            24,
            72,
            &["Walking mastery", "Language development", "Social play begins"],
            &["walking", "playing", "early_learning"],
        ),
        phase(
            "School Age",
            72,
            144,
            &["Formal education", "Peer relationships", "Skill development"],
            &["reading", "structured_learning", "sports", "hobbies"],
        ),
        phase(
            "Adolescence",
            144,
            216,
            &["Identity formation", "Independence seeking", "Adult responsibilities"],
            &["driving", "part_time_work", "social_media", "smartphone_usage"],
        ),
        phase(
            "Young Adulthood",
            216,
            360,
            &["Career establishment", "Relationship formation", "Full independence"],
            &["coffee_consumption", "alcohol_consumption", "career_activities"],
        ),
        phase(
            "Adulthood",
            360,
            780,
            &["Career peak", "Family responsibilities", "Established routines"],
            &["all_adult_activities"],
        ),
        phase(
            "Later Life",
            780,
            MAX_PHASE_AGE_MONTHS,
            &["Retirement", "Health considerations", "Wisdom sharing"],
            &["modified_activities", "health_focused"],
        ),
    ]
}

fn build_cultural_profiles() -> Vec<CulturalProfile> {
    vec![
        CulturalProfile {
            id: "western_developed".to_string(),
            name: "Western Developed Countries".to_string(),
            region: "North America, Western Europe, Australia".to_string(),
            milestone_adjustments: [
                (MilestoneId::CoffeeConsumption, -24),
                (MilestoneId::Driving, 0),
                (MilestoneId::SmartphoneUsage, -12),
            ]
            .into_iter()
            .collect(),
            activity_prevalence: [
                (MilestoneId::CoffeeConsumption, 0.85),
                (MilestoneId::Reading, 0.90),
                (MilestoneId::Driving, 0.85),
                (MilestoneId::AlcoholConsumption, 0.75),
            ]
            .into_iter()
            .collect(),
            custom_milestones: Vec::new(),
        },
        CulturalProfile {
            id: "nordic".to_string(),
            name: "Nordic Countries".to_string(),
            region: "Sweden, Norway, Denmark, Finland, Iceland".to_string(),
            milestone_adjustments: [
                (MilestoneId::CoffeeConsumption, -48),
                (MilestoneId::Reading, -6),
            ]
            .into_iter()
            .collect(),
            activity_prevalence: [
                (MilestoneId::CoffeeConsumption, 0.95),
                (MilestoneId::Reading, 0.98),
                (MilestoneId::Driving, 0.80),
                (MilestoneId::AlcoholConsumption, 0.70),
            ]
            .into_iter()
            .collect(),
            custom_milestones: Vec::new(),
        },
        CulturalProfile {
            id: "east_asian".to_string(),
            name: "East Asian Countries".to_string(),
            region: "China, Japan, South Korea, Taiwan".to_string(),
            milestone_adjustments: [
                (MilestoneId::CoffeeConsumption, 48),
                (MilestoneId::Driving, 48),
                (MilestoneId::AlcoholConsumption, 24),
            ]
            .into_iter()
            .collect(),
            activity_prevalence: [
                (MilestoneId::CoffeeConsumption, 0.60),
                (MilestoneId::Reading, 0.85),
                (MilestoneId::Driving, 0.45),
                (MilestoneId::AlcoholConsumption, 0.65),
            ]
            .into_iter()
            .collect(),
            custom_milestones: Vec::new(),
        },
        CulturalProfile {
            id: "middle_eastern".to_string(),
            name: "Middle Eastern Countries".to_string(),
            region: "Various Middle Eastern countries".to_string(),
            milestone_adjustments: [
                (MilestoneId::CoffeeConsumption, 24),
                (MilestoneId::AlcoholConsumption, 0),
            ]
            .into_iter()
            .collect(),
            activity_prevalence: [
                (MilestoneId::CoffeeConsumption, 0.70),
                (MilestoneId::Reading, 0.75),
                (MilestoneId::Driving, 0.70),
                (MilestoneId::AlcoholConsumption, 0.10),
            ]
            .into_iter()
            .collect(),
            custom_milestones: Vec::new(),
        },
    ]
}
