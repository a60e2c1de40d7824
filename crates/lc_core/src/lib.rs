//! # lc_core - Milestone-Aware Life Statistics Engine
//!
//! This library computes derived "life statistics" (days lived, heartbeats,
//! steps, ...) from a birth date and a set of configurable behavioral
//! parameters, adjusted by developmental milestones and cultural profiles.
//! A JSON API makes it easy to embed behind any frontend.
//!
//! ## Features
//! - Deterministic: identical inputs always produce identical snapshots
//! - Phase-segmented accumulation (activities ramp by developmental stage)
//! - Immutable reference registry of milestones, life phases, and profiles
//! - Data-level validation: invalid input is reported, never thrown

pub mod api;
pub mod dates;
pub mod error;
pub mod facts;
pub mod milestones;
pub mod stats;

// Re-export the JSON API surface
pub use api::{
    calculate_stats_json, milestone_catalog_json, validate_birth_date_json, StatsRequest,
    StatsResponse, ValidateRequest, ValidateResponse,
};
pub use error::{Result, StatsError};

// Re-export the calculation types
pub use dates::{
    age_breakdown, age_in_days, age_in_months, time_until_next_birthday, validate_birth_date,
    AgeBreakdown, BirthDateError, BirthdayCountdown, DAYS_PER_MONTH, DAYS_PER_YEAR,
};
pub use facts::{format_number, fun_fact, with_thousands, StatKind};
pub use milestones::{
    cultural_profiles, default_cultural_profile, life_phases, milestone, milestones,
    phase_for_age, profile_by_id, resolve_start_age_months, validate_milestone_age,
    CulturalProfile, CulturalVariation, DevelopmentalMilestone, LifePhase, MilestoneAgeError,
    MilestoneId, PersonalMilestone,
};
pub use stats::{
    calculate_advanced_stats, calculate_life_stats, developmental_context, drinks_coffee,
    years_since_milestone, AdvancedLifeStats, CalculationContext, ConfigurableParams,
    DevelopmentalContext, LifeStats,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn twenty_year_scenario_end_to_end() {
        let request = json!({
            "schema_version": 1,
            "birth_date": "2000-01-01",
            "now": "2020-01-01T00:00:00Z",
        });

        let result = calculate_stats_json(&request.to_string());
        assert!(result.is_ok(), "Calculation should succeed");

        let parsed: serde_json::Value = serde_json::from_str(&result.unwrap()).unwrap();
        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["success"], true);
        assert_eq!(parsed["stats"]["days_lived"], 7305);
        assert_eq!(parsed["stats"]["hours_slept"], 58_440);

        // 6849 elapsed walking days put steps deep into the full-rate band.
        let steps = parsed["stats"]["steps_walked"].as_u64().unwrap();
        assert!(steps > 30_000_000, "got {}", steps);
    }

    #[test]
    fn tomorrows_birth_date_is_not_calculated() {
        let now = Utc.with_ymd_and_hms(2026, 8, 6, 0, 0, 0).unwrap();
        let tomorrow = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();

        let verdict = validate_birth_date(tomorrow, now);
        assert_eq!(verdict, Err(BirthDateError::InFuture));
        assert_eq!(verdict.unwrap_err().to_string(), "Birth date cannot be in the future");
    }

    #[test]
    fn age_over_150_years_is_rejected_with_range_reason() {
        let now = Utc.with_ymd_and_hms(2120, 1, 1, 0, 0, 0).unwrap();
        let too_old = NaiveDate::from_ymd_opt(1969, 12, 1).unwrap();

        let verdict = validate_birth_date(too_old, now);
        assert_eq!(verdict, Err(BirthDateError::ExceedsMaximumAge));
        assert_eq!(verdict.unwrap_err().to_string(), "Please enter a valid birth date");
    }

    #[test]
    fn library_entry_points_agree_with_the_json_api() {
        let now = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let ctx = CalculationContext::new(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        let direct = calculate_advanced_stats(now, &ctx);

        let request = json!({
            "schema_version": 1,
            "birth_date": "2000-01-01",
            "now": "2020-01-01T00:00:00Z",
        });
        let raw = calculate_stats_json(&request.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(
            parsed["stats"],
            serde_json::to_value(&direct).unwrap(),
            "JSON API and library snapshots diverge"
        );
    }

    #[test]
    fn version_constants_are_exposed() {
        assert!(!VERSION.is_empty());
        assert_eq!(SCHEMA_VERSION, 1);
    }
}
