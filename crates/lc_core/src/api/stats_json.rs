//! Life statistics JSON API
//!
//! String-in/string-out boundary for embedding the engine behind a UI. Every
//! payload carries a `schema_version`; invalid input data comes back as a
//! `success: false` response with a reason, never as a crash. Requests may
//! pin `now` so the same payload always produces the same response.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::dates::{self, AgeBreakdown, BirthdayCountdown};
use crate::error::{Result, StatsError};
use crate::milestones::{
    registry, CulturalProfile, DevelopmentalMilestone, LifePhase, PersonalMilestone,
};
use crate::stats::{
    calculate_advanced_stats, AdvancedLifeStats, CalculationContext, ConfigurableParams,
};
use crate::SCHEMA_VERSION;

/// Stats request sent by the frontend.
#[derive(Debug, Deserialize)]
pub struct StatsRequest {
    pub schema_version: u8,
    pub birth_date: NaiveDate,
    /// Clock override for reproducible responses; current time when omitted.
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
    #[serde(default)]
    pub params: ConfigurableParams,
    /// Id of a predefined cultural profile; the default profile when omitted.
    #[serde(default)]
    pub cultural_profile: Option<String>,
    #[serde(default)]
    pub personal_milestones: Vec<PersonalMilestone>,
}

/// Stats response sent back to the frontend.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub schema_version: u8,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<AdvancedLifeStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<AgeBreakdown>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_birthday: Option<BirthdayCountdown>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl StatsResponse {
    fn failure(message: String) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            success: false,
            stats: None,
            age: None,
            next_birthday: None,
            error_message: Some(message),
        }
    }
}

fn check_schema_version(found: u8) -> Result<()> {
    if found != SCHEMA_VERSION {
        return Err(StatsError::SchemaVersionMismatch { found, expected: SCHEMA_VERSION });
    }
    Ok(())
}

/// Resolve the profile named by the request.
fn select_profile(requested: Option<&str>) -> std::result::Result<CulturalProfile, String> {
    match requested {
        None => Ok(registry::default_cultural_profile().clone()),
        Some(id) => registry::profile_by_id(id)
            .cloned()
            .ok_or_else(|| format!("Unknown cultural profile: {}", id)),
    }
}

/// Compute a full statistics snapshot from a JSON request.
pub fn calculate_stats_json(request_json: &str) -> Result<String> {
    let request: StatsRequest = serde_json::from_str(request_json)?;
    check_schema_version(request.schema_version)?;

    let now = request.now.unwrap_or_else(Utc::now);

    if let Err(reason) = dates::validate_birth_date(request.birth_date, now) {
        log::warn!("rejecting birth date {}: {}", request.birth_date, reason);
        return Ok(serde_json::to_string(&StatsResponse::failure(reason.to_string()))?);
    }

    let profile = match select_profile(request.cultural_profile.as_deref()) {
        Ok(profile) => profile,
        Err(message) => {
            log::warn!("{}", message);
            return Ok(serde_json::to_string(&StatsResponse::failure(message))?);
        }
    };

    let ctx = CalculationContext {
        birth_date: request.birth_date,
        personal_milestones: request.personal_milestones,
        profile,
        params: request.params,
    };

    let stats = calculate_advanced_stats(now, &ctx);
    log::debug!(
        "computed stats for birth date {} ({} days lived)",
        ctx.birth_date,
        stats.stats.days_lived
    );

    let response = StatsResponse {
        schema_version: SCHEMA_VERSION,
        success: true,
        stats: Some(stats),
        age: Some(dates::age_breakdown(ctx.birth_date, now)),
        next_birthday: Some(dates::time_until_next_birthday(ctx.birth_date, now)),
        error_message: None,
    };

    Ok(serde_json::to_string(&response)?)
}

/// Birth-date validation request.
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub schema_version: u8,
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}

/// Birth-date validation verdict.
#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub schema_version: u8,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Check a birth date without computing anything.
pub fn validate_birth_date_json(request_json: &str) -> Result<String> {
    let request: ValidateRequest = serde_json::from_str(request_json)?;
    check_schema_version(request.schema_version)?;

    let now = request.now.unwrap_or_else(Utc::now);
    let response = match dates::validate_birth_date(request.birth_date, now) {
        Ok(()) => ValidateResponse {
            schema_version: SCHEMA_VERSION,
            valid: true,
            error_message: None,
        },
        Err(reason) => ValidateResponse {
            schema_version: SCHEMA_VERSION,
            valid: false,
            error_message: Some(reason.to_string()),
        },
    };

    Ok(serde_json::to_string(&response)?)
}

#[derive(Debug, Serialize)]
struct CatalogResponse<'a> {
    schema_version: u8,
    milestones: &'a [DevelopmentalMilestone],
    life_phases: &'a [LifePhase],
    cultural_profiles: &'a [CulturalProfile],
    default_profile_id: &'a str,
}

/// Dump the immutable registry for settings screens.
pub fn milestone_catalog_json() -> Result<String> {
    let response = CatalogResponse {
        schema_version: SCHEMA_VERSION,
        milestones: registry::milestones(),
        life_phases: registry::life_phases(),
        cultural_profiles: registry::cultural_profiles(),
        default_profile_id: &registry::default_cultural_profile().id,
    };

    Ok(serde_json::to_string(&response)?)
}
