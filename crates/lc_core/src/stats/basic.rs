//! Linear accumulation stats
//!
//! Everything here is `floor(age x rate)`: no milestone gating, no phase
//! bands. The advanced calculator reuses these helpers for the vital-sign
//! counters and replaces the activity counters with the phase-segmented
//! versions.

use chrono::{DateTime, Utc};

use super::types::{ConfigurableParams, LifeStats};
use crate::dates::{self, DAYS_PER_YEAR};

/// Minutes in a day.
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Earth's orbital travel per year, in kilometers.
pub const ORBIT_KM_PER_YEAR: f64 = 940_000_000.0;

fn floor_u64(value: f64) -> u64 {
    value.max(0.0).floor() as u64
}

/// Hours spent asleep.
pub fn hours_slept(age_in_days: i64, params: &ConfigurableParams) -> u64 {
    floor_u64(age_in_days as f64 * params.sleep_hours_per_day)
}

/// Total heartbeats, from a steady resting rate.
pub fn total_heartbeats(age_in_days: i64, params: &ConfigurableParams) -> u64 {
    floor_u64(age_in_days as f64 * MINUTES_PER_DAY * params.heart_rate_per_minute)
}

/// Breaths taken.
pub fn breaths_taken(age_in_days: i64, params: &ConfigurableParams) -> u64 {
    floor_u64(age_in_days as f64 * MINUTES_PER_DAY * params.breaths_per_minute)
}

/// Meals eaten.
pub fn meals_consumed(age_in_days: i64, params: &ConfigurableParams) -> u64 {
    floor_u64(age_in_days as f64 * params.meals_per_day)
}

/// Kilometers traveled around the sun.
pub fn earth_distance_traveled(age_in_days: i64) -> u64 {
    floor_u64(age_in_days as f64 / DAYS_PER_YEAR * ORBIT_KM_PER_YEAR)
}

/// Whole-life stats at flat rates, with no milestone awareness.
///
/// The simple engine the dashboard starts from before any milestone data is
/// configured: steps and coffee accrue from birth, reading assumes two hours
/// a day, movies two a week.
pub fn calculate_life_stats(
    birth_date: chrono::NaiveDate,
    now: DateTime<Utc>,
    params: &ConfigurableParams,
) -> LifeStats {
    let age_in_days = dates::age_in_days(birth_date, now);

    let reading_hours = age_in_days as f64 * 2.0;
    let hours_per_book = params.average_book_pages / params.reading_speed_pages_per_hour;
    let books_could_read = if hours_per_book.is_finite() && hours_per_book > 0.0 {
        floor_u64(reading_hours / hours_per_book)
    } else {
        0
    };

    LifeStats {
        days_lived: age_in_days.max(0) as u64,
        hours_slept: hours_slept(age_in_days, params),
        total_heartbeats: total_heartbeats(age_in_days, params),
        breaths_taken: breaths_taken(age_in_days, params),
        meals_consumed: meals_consumed(age_in_days, params),
        steps_walked: floor_u64(age_in_days as f64 * params.steps_per_day),
        cups_of_coffee: floor_u64(age_in_days as f64 * params.cups_of_coffee_per_day),
        books_could_read,
        movies_watched: floor_u64(age_in_days as f64 / 7.0 * 2.0),
        earth_distance_traveled: earth_distance_traveled(age_in_days),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn vital_counters_floor_the_products() {
        let params = ConfigurableParams::default();
        assert_eq!(hours_slept(7305, &params), 58_440);
        assert_eq!(total_heartbeats(7305, &params), 736_344_000);
        assert_eq!(breaths_taken(7305, &params), 168_307_200);
        assert_eq!(meals_consumed(7305, &params), 21_915);
    }

    #[test]
    fn earth_distance_is_orbit_rate_times_years() {
        // 7305 days is exactly 20 fixed-length years.
        assert_eq!(earth_distance_traveled(7305), 18_800_000_000);
        assert_eq!(earth_distance_traveled(0), 0);
    }

    #[test]
    fn flat_engine_accrues_from_birth() {
        let birth = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let now = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let stats = calculate_life_stats(birth, now, &ConfigurableParams::default());

        assert_eq!(stats.days_lived, 7305);
        assert_eq!(stats.steps_walked, 7305 * 7000);
        assert_eq!(stats.cups_of_coffee, 7305 * 2);
        // 2 hours/day over 6 hours/book.
        assert_eq!(stats.books_could_read, 2435);
        // (7305 / 7) * 2 = 2087.14...
        assert_eq!(stats.movies_watched, 2087);
    }

    #[test]
    fn degenerate_reading_params_read_as_zero_books() {
        let birth = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let now = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let params = ConfigurableParams { average_book_pages: 0.0, ..Default::default() };
        let stats = calculate_life_stats(birth, now, &params);
        assert_eq!(stats.books_could_read, 0);
    }
}
