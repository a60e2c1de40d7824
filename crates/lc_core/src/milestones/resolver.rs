//! Milestone start-age resolution
//!
//! Maps a milestone key plus a calculation context to the effective onset age
//! in months. Precedence: personal override (verbatim) > profile custom
//! definition > registry definition with the profile's adjustment, clamped to
//! the milestone's realistic bounds > 0 when nothing defines the milestone.

use thiserror::Error;

use super::registry;
use super::types::{DevelopmentalMilestone, MilestoneId};
use crate::stats::CalculationContext;

/// Resolve the effective start age for a milestone, in months.
///
/// Pure function of its inputs. A personal override always wins and is never
/// clamped; only profile-derived ages are pulled into
/// `[earliest, latest]`. A milestone that neither the profile nor the
/// registry defines resolves to 0 ("from birth") so stale persisted keys can
/// never fail a calculation.
pub fn resolve_start_age_months(id: MilestoneId, ctx: &CalculationContext) -> i32 {
    if let Some(personal) = ctx.personal_milestone(id) {
        if let Some(age) = personal.personal_age_months {
            return age;
        }
    }

    let Some(milestone) = definition_for(id, ctx) else {
        return 0;
    };

    let adjusted = milestone.typical_age_months + ctx.profile.adjustment_for(id);
    adjusted.clamp(milestone.earliest_age_months, milestone.latest_age_months)
}

/// Profile custom definitions shadow the registry.
fn definition_for<'a>(
    id: MilestoneId,
    ctx: &'a CalculationContext,
) -> Option<&'a DevelopmentalMilestone> {
    ctx.profile
        .custom_milestones
        .iter()
        .find(|m| m.id == id)
        .or_else(|| registry::milestone(id))
}

/// Rejection reasons for a user-supplied milestone age.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MilestoneAgeError {
    #[error("Unknown milestone")]
    Unknown,
    #[error("Too early - earliest typical age is {earliest_years} years")]
    TooEarly { earliest_years: i32 },
    #[error("Too late - latest typical age is {latest_years} years")]
    TooLate { latest_years: i32 },
}

/// Check a personal override against the milestone's realistic bounds.
///
/// Settings screens call this before persisting an override. The resolver
/// itself deliberately does not enforce it, so an out-of-range value that
/// slipped past the UI still resolves verbatim.
pub fn validate_milestone_age(id: MilestoneId, age_months: i32) -> Result<(), MilestoneAgeError> {
    let Some(milestone) = registry::milestone(id) else {
        return Err(MilestoneAgeError::Unknown);
    };

    if age_months < milestone.earliest_age_months {
        return Err(MilestoneAgeError::TooEarly {
            earliest_years: milestone.earliest_age_months / 12,
        });
    }

    if age_months > milestone.latest_age_months {
        return Err(MilestoneAgeError::TooLate {
            latest_years: milestone.latest_age_months / 12,
        });
    }

    Ok(())
}
