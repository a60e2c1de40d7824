//! Birth-date validation and calendar helpers
//!
//! The engine works from a calendar birth date and a `now` instant supplied
//! by the caller. Calendar arithmetic is deliberately approximate: a month is
//! 30.44 days and a year is 365.25 days everywhere in the statistics; the
//! helpers in this module that report calendar ages (`age_breakdown`,
//! `time_until_next_birthday`) use real month lengths because they feed
//! display output, not accumulation.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fractional month-to-day conversion constant used throughout.
pub const DAYS_PER_MONTH: f64 = 30.44;

/// Fixed-length year approximation used throughout.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Oldest supported birth year.
pub const MIN_BIRTH_YEAR: i32 = 1900;

/// No one older than this is considered a valid input.
pub const MAX_AGE_YEARS: f64 = 150.0;

/// Rejection reasons for a birth date.
///
/// Callers check validity before invoking the calculator and treat a
/// rejection as "no statistics available", never as a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BirthDateError {
    #[error("Birth date cannot be in the future")]
    InFuture,
    #[error("Birth date cannot be before 1900")]
    BeforeSupportedRange,
    #[error("Please enter a valid birth date")]
    ExceedsMaximumAge,
}

/// Calendar age split into years, months, and days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AgeBreakdown {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

/// Time remaining until the next birthday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BirthdayCountdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Whole days lived: `floor((now - birth) / 1 day)`.
pub fn age_in_days(birth: NaiveDate, now: DateTime<Utc>) -> i64 {
    (now - midnight_utc(birth)).num_days()
}

/// Whole months lived under the fixed 30.44-day month.
pub fn age_in_months(birth: NaiveDate, now: DateTime<Utc>) -> i64 {
    (age_in_days(birth, now) as f64 / DAYS_PER_MONTH).floor() as i64
}

/// Check a birth date against the supported range.
///
/// Rejects dates in the future, before 1900-01-01, or implying an age over
/// 150 years. Checked in that order, matching the settings flow.
pub fn validate_birth_date(birth: NaiveDate, now: DateTime<Utc>) -> Result<(), BirthDateError> {
    if midnight_utc(birth) > now {
        return Err(BirthDateError::InFuture);
    }

    if birth.year() < MIN_BIRTH_YEAR {
        return Err(BirthDateError::BeforeSupportedRange);
    }

    let age_years = (now - midnight_utc(birth)).num_seconds() as f64 / (86_400.0 * DAYS_PER_YEAR);
    if age_years > MAX_AGE_YEARS {
        return Err(BirthDateError::ExceedsMaximumAge);
    }

    Ok(())
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn days_in_month(year: i32, month: u32) -> i32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        _ => 28,
    }
}

/// Calendar age with real month lengths, for display.
pub fn age_breakdown(birth: NaiveDate, now: DateTime<Utc>) -> AgeBreakdown {
    let today = now.date_naive();
    let mut years = today.year() - birth.year();
    let mut months = today.month() as i32 - birth.month() as i32;
    let mut days = today.day() as i32 - birth.day() as i32;

    if days < 0 {
        months -= 1;
        // Borrow the length of the month preceding `today`.
        let (prev_year, prev_month) = if today.month() == 1 {
            (today.year() - 1, 12)
        } else {
            (today.year(), today.month() - 1)
        };
        days += days_in_month(prev_year, prev_month);
    }

    if months < 0 {
        years -= 1;
        months += 12;
    }

    AgeBreakdown { years, months, days }
}

/// The birthday anniversary within `year`; Feb 29 rolls to Mar 1 off-leap-years.
fn birthday_in_year(birth: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(birth)
}

/// Countdown to the next birthday anniversary.
pub fn time_until_next_birthday(birth: NaiveDate, now: DateTime<Utc>) -> BirthdayCountdown {
    let mut next = birthday_in_year(birth, now.year());
    if midnight_utc(next) < now {
        next = birthday_in_year(birth, now.year() + 1);
    }

    let remaining = midnight_utc(next) - now;
    BirthdayCountdown {
        days: remaining.num_days(),
        hours: remaining.num_hours() % 24,
        minutes: remaining.num_minutes() % 60,
    }
}
