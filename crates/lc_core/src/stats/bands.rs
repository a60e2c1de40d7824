//! Phase-segmented accumulation
//!
//! The activities here share one shape: they cannot begin before a milestone
//! age, and once begun they accrue at different daily rates across life
//! phases. Elapsed days since onset are folded through a fixed band schedule;
//! each band consumes `min(remaining, length)` days at its multiplier and the
//! final open-ended band absorbs the rest. A piecewise-linear ramp is a crude
//! model of real behavior, but it stays explainable.

use std::hash::{Hash, Hasher};

use fxhash::FxHasher;

use super::types::CalculationContext;
use crate::dates::DAYS_PER_MONTH;
use crate::milestones::{resolver, MilestoneId};

/// One segment of a piecewise daily-rate schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateBand {
    /// Band length in days; `None` marks the open-ended final band.
    pub length_days: Option<f64>,
    /// Rate multiplier applied to each day in the band.
    pub multiplier: f64,
}

impl RateBand {
    const fn capped(length_days: f64, multiplier: f64) -> Self {
        Self { length_days: Some(length_days), multiplier }
    }

    const fn open(multiplier: f64) -> Self {
        Self { length_days: None, multiplier }
    }
}

/// Step accrual ramps from toddler (30%) through child (70%) to full rate.
pub const STEP_BANDS: [RateBand; 3] = [
    RateBand::capped(730.0, 0.3),
    RateBand::capped(3285.0, 0.7),
    RateBand::open(1.0),
];

/// Daily reading hours: 1.0 as a child, 1.5 as a teen, 2.0 as an adult.
pub const READING_HOUR_BANDS: [RateBand; 3] = [
    RateBand::capped(1825.0, 1.0),
    RateBand::capped(2190.0, 1.5),
    RateBand::open(2.0),
];

/// Movies per week: 1 as a child, 2 as a teen, 1.5 as a busy adult.
pub const MOVIE_WEEKLY_BANDS: [RateBand; 3] = [
    RateBand::capped(3285.0, 1.0),
    RateBand::capped(2190.0, 2.0),
    RateBand::open(1.5),
];

/// Movies need no milestone; they start around age three.
pub const MOVIE_START_AGE_MONTHS: i64 = 36;

/// Prevalence assumed when a profile has no coffee entry.
pub const DEFAULT_COFFEE_PREVALENCE: f64 = 0.85;

/// Fold elapsed days through a band schedule.
///
/// Returns the sum of `band_days * multiplier` in multiplier-day units; the
/// caller scales by its per-day or per-week rate.
pub fn banded_total(elapsed_days: f64, bands: &[RateBand]) -> f64 {
    let mut remaining = elapsed_days.max(0.0);
    let mut total = 0.0;

    for band in bands {
        let days = match band.length_days {
            Some(length) => remaining.min(length),
            None => remaining,
        };
        total += days * band.multiplier;
        remaining -= days;
        if remaining <= 0.0 {
            break;
        }
    }

    total
}

fn elapsed_days_since(age_in_days: i64, start_age_months: i64) -> f64 {
    age_in_days as f64 - start_age_months as f64 * DAYS_PER_MONTH
}

fn floor_u64(value: f64) -> u64 {
    value.max(0.0).floor() as u64
}

/// Steps taken since the walking milestone.
pub fn steps_walked(age_in_days: i64, age_in_months: i64, ctx: &CalculationContext) -> u64 {
    let start = i64::from(resolver::resolve_start_age_months(MilestoneId::Walking, ctx));
    if age_in_months < start {
        return 0;
    }

    let elapsed = elapsed_days_since(age_in_days, start);
    floor_u64(banded_total(elapsed, &STEP_BANDS) * ctx.params.steps_per_day)
}

/// Books that could have been read since the reading milestone.
pub fn books_could_read(age_in_days: i64, age_in_months: i64, ctx: &CalculationContext) -> u64 {
    let start = i64::from(resolver::resolve_start_age_months(MilestoneId::Reading, ctx));
    if age_in_months < start {
        return 0;
    }

    let hours_per_book = ctx.params.average_book_pages / ctx.params.reading_speed_pages_per_hour;
    if !hours_per_book.is_finite() || hours_per_book <= 0.0 {
        return 0;
    }

    let elapsed = elapsed_days_since(age_in_days, start);
    let reading_hours = banded_total(elapsed, &READING_HOUR_BANDS);
    floor_u64(reading_hours / hours_per_book)
}

/// Movies watched since early childhood.
pub fn movies_watched(age_in_days: i64, age_in_months: i64, _ctx: &CalculationContext) -> u64 {
    if age_in_months < MOVIE_START_AGE_MONTHS {
        return 0;
    }

    let elapsed = elapsed_days_since(age_in_days, MOVIE_START_AGE_MONTHS);
    floor_u64(banded_total(elapsed, &MOVIE_WEEKLY_BANDS) / 7.0)
}

/// Cups of coffee since the coffee milestone, gated by the coffee habit.
pub fn cups_of_coffee(age_in_days: i64, age_in_months: i64, ctx: &CalculationContext) -> u64 {
    let start =
        i64::from(resolver::resolve_start_age_months(MilestoneId::CoffeeConsumption, ctx));
    if age_in_months < start {
        return 0;
    }

    if !drinks_coffee(ctx) {
        return 0;
    }

    let elapsed = elapsed_days_since(age_in_days, start);
    floor_u64(elapsed * ctx.params.cups_of_coffee_per_day)
}

/// Whether this person drinks coffee at all.
///
/// An explicit personal milestone decides directly via its `is_active` flag.
/// Otherwise the habit is a stable per-person trait: a hash of the birth date
/// and profile id drawn against the profile's prevalence, so identical
/// contexts always agree and totals stay monotonic as time passes.
pub fn drinks_coffee(ctx: &CalculationContext) -> bool {
    if let Some(personal) = ctx.personal_milestone(MilestoneId::CoffeeConsumption) {
        return personal.is_active;
    }

    let prevalence = ctx
        .profile
        .prevalence_for(MilestoneId::CoffeeConsumption)
        .unwrap_or(DEFAULT_COFFEE_PREVALENCE);
    coffee_trait_draw(ctx) < prevalence
}

/// Stable draw in `[0, 1)` from the identifying parts of the context.
fn coffee_trait_draw(ctx: &CalculationContext) -> f64 {
    let mut hasher = FxHasher::default();
    ctx.birth_date.hash(&mut hasher);
    ctx.profile.id.hash(&mut hasher);
    (hasher.finish() >> 11) as f64 / (1u64 << 53) as f64
}
