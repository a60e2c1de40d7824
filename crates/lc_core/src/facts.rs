//! Fun-fact display formatting
//!
//! A pure formatter over computed values: it never recomputes statistics,
//! only turns a `(stat kind, value, age)` triple into a sentence for display.
//! The milestone-gated activities get age-aware wording so a stat that has
//! not started yet reads as an outlook instead of a zero.

use serde::{Deserialize, Serialize};

use crate::dates::DAYS_PER_YEAR;

/// Display keys for the ten statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatKind {
    DaysLived,
    HoursSlept,
    TotalHeartbeats,
    BreathsTaken,
    MealsConsumed,
    StepsWalked,
    CupsOfCoffee,
    BooksCouldRead,
    MoviesWatched,
    EarthDistanceTraveled,
}

impl StatKind {
    /// All kinds, in dashboard display order.
    pub const ALL: [StatKind; 10] = [
        StatKind::DaysLived,
        StatKind::HoursSlept,
        StatKind::TotalHeartbeats,
        StatKind::BreathsTaken,
        StatKind::MealsConsumed,
        StatKind::StepsWalked,
        StatKind::CupsOfCoffee,
        StatKind::BooksCouldRead,
        StatKind::MoviesWatched,
        StatKind::EarthDistanceTraveled,
    ];

    /// Stable camelCase key used by display payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatKind::DaysLived => "daysLived",
            StatKind::HoursSlept => "hoursSlept",
            StatKind::TotalHeartbeats => "totalHeartbeats",
            StatKind::BreathsTaken => "breathsTaken",
            StatKind::MealsConsumed => "mealsConsumed",
            StatKind::StepsWalked => "stepsWalked",
            StatKind::CupsOfCoffee => "cupsOfCoffee",
            StatKind::BooksCouldRead => "booksCouldRead",
            StatKind::MoviesWatched => "moviesWatched",
            StatKind::EarthDistanceTraveled => "earthDistanceTraveled",
        }
    }

    /// Human title for report output.
    pub fn title(&self) -> &'static str {
        match self {
            StatKind::DaysLived => "Days lived",
            StatKind::HoursSlept => "Hours slept",
            StatKind::TotalHeartbeats => "Heartbeats",
            StatKind::BreathsTaken => "Breaths taken",
            StatKind::MealsConsumed => "Meals consumed",
            StatKind::StepsWalked => "Steps walked",
            StatKind::CupsOfCoffee => "Cups of coffee",
            StatKind::BooksCouldRead => "Books could read",
            StatKind::MoviesWatched => "Movies watched",
            StatKind::EarthDistanceTraveled => "Distance around the sun (km)",
        }
    }
}

/// Abbreviate a large count: 1.2K, 3.4M, 5.6B.
pub fn format_number(value: u64) -> String {
    if value >= 1_000_000_000 {
        format!("{:.1}B", value as f64 / 1e9)
    } else if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1e6)
    } else if value >= 1_000 {
        format!("{:.1}K", value as f64 / 1e3)
    } else {
        value.to_string()
    }
}

/// Group digits with commas: 1234567 -> "1,234,567".
pub fn with_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// One sentence about a computed value, aware of the person's age in months.
pub fn fun_fact(kind: StatKind, value: u64, age_in_months: i64) -> String {
    match kind {
        StatKind::DaysLived => format!(
            "That's {} years of amazing experiences!",
            (value as f64 / DAYS_PER_YEAR).floor() as u64
        ),
        StatKind::HoursSlept => format!(
            "You've spent {} years dreaming!",
            (value as f64 / 24.0 / DAYS_PER_YEAR).floor() as u64
        ),
        StatKind::TotalHeartbeats => format!(
            "Enough heartbeats to power a small city for {} days!",
            value / 100_000
        ),
        StatKind::BreathsTaken => format!(
            "You've inhaled enough air to fill {} hot air balloons!",
            value / 1_000
        ),
        StatKind::MealsConsumed => format!(
            "That's enough food to feed a family of 4 for {} years!",
            value / (3 * 4 * 365)
        ),
        StatKind::StepsWalked => {
            if age_in_months < 15 {
                "You haven't started walking yet, but you will soon!".to_string()
            } else {
                format!(
                    "You've been walking for {} years and covered {} km!",
                    (age_in_months - 15) / 12,
                    (value as f64 * 0.0008).floor() as u64
                )
            }
        }
        StatKind::CupsOfCoffee => {
            if age_in_months < 192 {
                "Coffee is still in your future - enjoy your sleep while you can!".to_string()
            } else {
                format!(
                    "{} years of coffee addiction has given you {} cups of energy!",
                    (age_in_months - 192) / 12,
                    value
                )
            }
        }
        StatKind::BooksCouldRead => {
            if age_in_months < 84 {
                "Reading adventures await you in the coming years!".to_string()
            } else {
                format!(
                    "Since learning to read, you could have built a library of {} books!",
                    value
                )
            }
        }
        StatKind::MoviesWatched => {
            if age_in_months < 36 {
                "Movie nights are coming soon in your future!".to_string()
            } else {
                format!("You've spent {} hours being entertained by movies!", value * 2)
            }
        }
        StatKind::EarthDistanceTraveled => format!(
            "You've traveled {} million km through space on Earth!",
            value / 1_000_000
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_number_abbreviates_by_magnitude() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_500), "1.5K");
        assert_eq!(format_number(2_300_000), "2.3M");
        assert_eq!(format_number(18_800_000_000), "18.8B");
    }

    #[test]
    fn with_thousands_groups_digits() {
        assert_eq!(with_thousands(0), "0");
        assert_eq!(with_thousands(999), "999");
        assert_eq!(with_thousands(1_000), "1,000");
        assert_eq!(with_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn milestone_facts_switch_on_age() {
        let waiting = fun_fact(StatKind::StepsWalked, 0, 10);
        assert_eq!(waiting, "You haven't started walking yet, but you will soon!");

        let walking = fun_fact(StatKind::StepsWalked, 1_000_000, 255);
        assert_eq!(walking, "You've been walking for 20 years and covered 800 km!");

        let no_coffee = fun_fact(StatKind::CupsOfCoffee, 0, 100);
        assert!(no_coffee.contains("still in your future"));
    }

    #[test]
    fn linear_facts_scale_with_value() {
        assert_eq!(
            fun_fact(StatKind::DaysLived, 7305, 240),
            "That's 20 years of amazing experiences!"
        );
        assert_eq!(
            fun_fact(StatKind::EarthDistanceTraveled, 18_800_000_000, 240),
            "You've traveled 18800 million km through space on Earth!"
        );
    }

    #[test]
    fn stat_kind_keys_are_stable() {
        assert_eq!(StatKind::DaysLived.as_str(), "daysLived");
        let json = serde_json::to_string(&StatKind::BooksCouldRead).unwrap();
        assert_eq!(json, "\"booksCouldRead\"");
    }
}
