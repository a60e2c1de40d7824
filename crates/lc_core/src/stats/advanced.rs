//! Advanced life calculator
//!
//! The orchestrator: one pure function from `(now, context)` to a complete
//! milestone-aware snapshot. No state is held between calls; callers
//! recompute whenever an input or the clock moves, and every stat is
//! non-decreasing as `now` advances over a fixed context.

use chrono::{DateTime, Utc};

use super::{bands, basic, context};
use super::types::{AdvancedLifeStats, CalculationContext, LifeStats};
use crate::dates;
use crate::milestones::{resolver, MilestoneId};

/// Whole years since a milestone's resolved start age, 0 when not reached.
pub fn years_since_milestone(
    id: MilestoneId,
    age_in_months: i64,
    ctx: &CalculationContext,
) -> u32 {
    let start = i64::from(resolver::resolve_start_age_months(id, ctx));
    if age_in_months < start {
        return 0;
    }
    ((age_in_months - start) / 12) as u32
}

/// Compute the complete milestone-aware snapshot.
pub fn calculate_advanced_stats(
    now: DateTime<Utc>,
    ctx: &CalculationContext,
) -> AdvancedLifeStats {
    let age_in_days = dates::age_in_days(ctx.birth_date, now);
    let age_in_months = dates::age_in_months(ctx.birth_date, now);
    let params = &ctx.params;

    let stats = LifeStats {
        days_lived: age_in_days.max(0) as u64,
        hours_slept: basic::hours_slept(age_in_days, params),
        total_heartbeats: basic::total_heartbeats(age_in_days, params),
        breaths_taken: basic::breaths_taken(age_in_days, params),
        meals_consumed: basic::meals_consumed(age_in_days, params),
        steps_walked: bands::steps_walked(age_in_days, age_in_months, ctx),
        cups_of_coffee: bands::cups_of_coffee(age_in_days, age_in_months, ctx),
        books_could_read: bands::books_could_read(age_in_days, age_in_months, ctx),
        movies_watched: bands::movies_watched(age_in_days, age_in_months, ctx),
        earth_distance_traveled: basic::earth_distance_traveled(age_in_days),
    };

    AdvancedLifeStats {
        stats,
        years_walking: years_since_milestone(MilestoneId::Walking, age_in_months, ctx),
        years_driving: years_since_milestone(MilestoneId::Driving, age_in_months, ctx),
        years_reading: years_since_milestone(MilestoneId::Reading, age_in_months, ctx),
        years_coffee_consumption: years_since_milestone(
            MilestoneId::CoffeeConsumption,
            age_in_months,
            ctx,
        ),
        developmental_context: context::developmental_context(age_in_months, ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::milestones::PersonalMilestone;
    use chrono::{Duration, NaiveDate, TimeZone};
    use proptest::prelude::*;

    fn twenty_year_fixture() -> (DateTime<Utc>, CalculationContext) {
        let now = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let ctx = CalculationContext::new(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        (now, ctx)
    }

    #[test]
    fn twenty_year_snapshot_matches_expected_counters() {
        let (now, ctx) = twenty_year_fixture();
        let snapshot = calculate_advanced_stats(now, &ctx);

        assert_eq!(snapshot.stats.days_lived, 7305);
        assert_eq!(snapshot.stats.hours_slept, 58_440);
        assert_eq!(snapshot.stats.total_heartbeats, 736_344_000);
        assert_eq!(snapshot.stats.breaths_taken, 168_307_200);
        assert_eq!(snapshot.stats.meals_consumed, 21_915);
        assert_eq!(snapshot.stats.earth_distance_traveled, 18_800_000_000);
        assert!(snapshot.stats.steps_walked > 0);
    }

    #[test]
    fn twenty_year_elapsed_years_per_milestone() {
        let (now, ctx) = twenty_year_fixture();
        let snapshot = calculate_advanced_stats(now, &ctx);

        // 239 months: walking since 15, reading since 84, driving since 192,
        // coffee since 168 (typical 192 - 24 profile shift).
        assert_eq!(snapshot.years_walking, 18);
        assert_eq!(snapshot.years_reading, 12);
        assert_eq!(snapshot.years_driving, 3);
        assert_eq!(snapshot.years_coffee_consumption, 5);
    }

    #[test]
    fn years_are_zero_before_each_milestone() {
        let now = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let ctx = CalculationContext::new(NaiveDate::from_ymd_opt(2019, 3, 1).unwrap());
        let snapshot = calculate_advanced_stats(now, &ctx);

        assert_eq!(snapshot.years_walking, 0);
        assert_eq!(snapshot.years_driving, 0);
        assert_eq!(snapshot.years_reading, 0);
        assert_eq!(snapshot.years_coffee_consumption, 0);
        assert_eq!(snapshot.stats.steps_walked, 0);
        assert_eq!(snapshot.developmental_context.current_phase, "Infancy");
    }

    #[test]
    fn ten_month_old_has_no_steps() {
        let now = Utc.with_ymd_and_hms(2026, 8, 6, 0, 0, 0).unwrap();
        let ctx = CalculationContext::new(NaiveDate::from_ymd_opt(2025, 10, 6).unwrap());
        let snapshot = calculate_advanced_stats(now, &ctx);
        assert_eq!(snapshot.stats.steps_walked, 0);
    }

    #[test]
    fn stats_never_decrease_as_time_advances() {
        let ctx = CalculationContext::new(NaiveDate::from_ymd_opt(1985, 7, 20).unwrap())
            .with_personal_milestone(PersonalMilestone {
                milestone_id: MilestoneId::CoffeeConsumption,
                personal_age_months: None,
                is_active: true,
                custom_start_date: None,
            });
        let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();

        let mut previous = calculate_advanced_stats(start, &ctx);
        for weeks in 1..=12 {
            let later = start + Duration::weeks(weeks * 13);
            let next = calculate_advanced_stats(later, &ctx);

            assert!(next.stats.days_lived >= previous.stats.days_lived);
            assert!(next.stats.hours_slept >= previous.stats.hours_slept);
            assert!(next.stats.total_heartbeats >= previous.stats.total_heartbeats);
            assert!(next.stats.breaths_taken >= previous.stats.breaths_taken);
            assert!(next.stats.meals_consumed >= previous.stats.meals_consumed);
            assert!(next.stats.steps_walked >= previous.stats.steps_walked);
            assert!(next.stats.cups_of_coffee >= previous.stats.cups_of_coffee);
            assert!(next.stats.books_could_read >= previous.stats.books_could_read);
            assert!(next.stats.movies_watched >= previous.stats.movies_watched);
            assert!(
                next.stats.earth_distance_traveled >= previous.stats.earth_distance_traveled
            );
            previous = next;
        }
    }

    #[test]
    fn identical_inputs_give_identical_snapshots() {
        let (now, ctx) = twenty_year_fixture();
        let first = calculate_advanced_stats(now, &ctx);
        let second = calculate_advanced_stats(now, &ctx);
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn snapshots_are_reproducible_for_arbitrary_birthdays(
            days_back in 0i64..40_000,
        ) {
            let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
            let birth = (now - Duration::days(days_back)).date_naive();
            let ctx = CalculationContext::new(birth);

            let first = calculate_advanced_stats(now, &ctx);
            let second = calculate_advanced_stats(now, &ctx);
            prop_assert_eq!(first, second);
        }
    }
}
