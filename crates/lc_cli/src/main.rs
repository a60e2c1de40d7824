//! LifeClock CLI
//!
//! Command-line frontend for the statistics engine: compute a full
//! milestone-aware report for a birth date, browse the reference registry,
//! or validate input the way the settings flow would.

use anyhow::{bail, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};

use lc_core::{
    age_breakdown, calculate_advanced_stats, calculate_stats_json, cultural_profiles,
    default_cultural_profile, fun_fact, life_phases, milestones, time_until_next_birthday,
    validate_birth_date, validate_milestone_age, with_thousands, AdvancedLifeStats,
    CalculationContext, ConfigurableParams, MilestoneId, PersonalMilestone, StatKind,
};

#[derive(Parser)]
#[command(name = "lifeclock")]
#[command(about = "Compute milestone-aware life statistics", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a full statistics report
    Stats {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth_date: NaiveDate,

        /// Cultural profile id (see `profiles`)
        #[arg(long)]
        profile: Option<String>,

        /// Personal milestone override, repeatable: id=months (e.g. walking=12)
        #[arg(long = "milestone")]
        milestone_overrides: Vec<String>,

        /// Activity never taken up, repeatable (e.g. coffee_consumption)
        #[arg(long = "inactive")]
        inactive: Vec<String>,

        /// Pin the clock for reproducible output (RFC 3339)
        #[arg(long)]
        now: Option<DateTime<Utc>>,

        /// Emit the raw JSON response instead of a report
        #[arg(long, default_value = "false")]
        json: bool,

        #[command(flatten)]
        rates: RateArgs,
    },

    /// List the developmental milestone registry
    Milestones,

    /// List cultural profiles
    Profiles,

    /// List life phases
    Phases,

    /// Validate a birth date
    Validate {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth_date: NaiveDate,
    },
}

/// Overrides for the configurable behavioral rates.
#[derive(Args)]
struct RateArgs {
    #[arg(long)]
    sleep_hours_per_day: Option<f64>,
    #[arg(long)]
    heart_rate_per_minute: Option<f64>,
    #[arg(long)]
    steps_per_day: Option<f64>,
    #[arg(long)]
    cups_of_coffee_per_day: Option<f64>,
    #[arg(long)]
    meals_per_day: Option<f64>,
    #[arg(long)]
    breaths_per_minute: Option<f64>,
    #[arg(long)]
    reading_speed_pages_per_hour: Option<f64>,
    #[arg(long)]
    average_book_pages: Option<f64>,
    #[arg(long)]
    average_movie_minutes: Option<f64>,
}

impl RateArgs {
    fn apply(&self, mut params: ConfigurableParams) -> Result<ConfigurableParams> {
        let overrides = [
            (&mut params.sleep_hours_per_day, self.sleep_hours_per_day),
            (&mut params.heart_rate_per_minute, self.heart_rate_per_minute),
            (&mut params.steps_per_day, self.steps_per_day),
            (&mut params.cups_of_coffee_per_day, self.cups_of_coffee_per_day),
            (&mut params.meals_per_day, self.meals_per_day),
            (&mut params.breaths_per_minute, self.breaths_per_minute),
            (&mut params.reading_speed_pages_per_hour, self.reading_speed_pages_per_hour),
            (&mut params.average_book_pages, self.average_book_pages),
            (&mut params.average_movie_minutes, self.average_movie_minutes),
        ];
        for (slot, value) in overrides {
            if let Some(value) = value {
                if value < 0.0 {
                    bail!("rates must be non-negative, got {}", value);
                }
                *slot = value;
            }
        }
        Ok(params)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Stats {
            birth_date,
            profile,
            milestone_overrides,
            inactive,
            now,
            json,
            rates,
        } => cmd_stats(birth_date, profile, &milestone_overrides, &inactive, now, json, &rates),
        Commands::Milestones => cmd_milestones(),
        Commands::Profiles => cmd_profiles(),
        Commands::Phases => cmd_phases(),
        Commands::Validate { birth_date } => cmd_validate(birth_date),
    }
}

fn parse_milestone_id(raw: &str) -> Result<MilestoneId> {
    match MilestoneId::from_id(raw) {
        Some(id) => Ok(id),
        None => {
            let known: Vec<&str> = MilestoneId::ALL.iter().map(|id| id.as_str()).collect();
            bail!("unknown milestone id '{}' (known: {})", raw, known.join(", "))
        }
    }
}

/// Parse `id=months` overrides, enforcing realistic bounds like the settings
/// flow does.
fn parse_overrides(raw_overrides: &[String], inactive: &[String]) -> Result<Vec<PersonalMilestone>> {
    let mut personal = Vec::new();

    for raw in raw_overrides {
        let Some((id_part, months_part)) = raw.split_once('=') else {
            bail!("milestone override must look like id=months, got '{}'", raw);
        };
        let id = parse_milestone_id(id_part)?;
        let months: i32 = months_part
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid month count '{}' for {}", months_part, id))?;
        if let Err(reason) = validate_milestone_age(id, months) {
            bail!("{}: {}", id, reason);
        }
        personal.push(PersonalMilestone::at_age(id, months));
    }

    for raw in inactive {
        let id = parse_milestone_id(raw)?;
        match personal.iter_mut().find(|pm| pm.milestone_id == id) {
            Some(existing) => existing.is_active = false,
            None => personal.push(PersonalMilestone::inactive(id)),
        }
    }

    Ok(personal)
}

fn stat_value(kind: StatKind, snapshot: &AdvancedLifeStats) -> u64 {
    let stats = &snapshot.stats;
    match kind {
        StatKind::DaysLived => stats.days_lived,
        StatKind::HoursSlept => stats.hours_slept,
        StatKind::TotalHeartbeats => stats.total_heartbeats,
        StatKind::BreathsTaken => stats.breaths_taken,
        StatKind::MealsConsumed => stats.meals_consumed,
        StatKind::StepsWalked => stats.steps_walked,
        StatKind::CupsOfCoffee => stats.cups_of_coffee,
        StatKind::BooksCouldRead => stats.books_could_read,
        StatKind::MoviesWatched => stats.movies_watched,
        StatKind::EarthDistanceTraveled => stats.earth_distance_traveled,
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_stats(
    birth_date: NaiveDate,
    profile: Option<String>,
    milestone_overrides: &[String],
    inactive: &[String],
    now: Option<DateTime<Utc>>,
    json: bool,
    rates: &RateArgs,
) -> Result<()> {
    let now = now.unwrap_or_else(Utc::now);

    if let Err(reason) = validate_birth_date(birth_date, now) {
        bail!("{}", reason);
    }

    let selected_profile = match profile.as_deref() {
        None => default_cultural_profile().clone(),
        Some(id) => match lc_core::profile_by_id(id) {
            Some(profile) => profile.clone(),
            None => {
                let known: Vec<&str> =
                    cultural_profiles().iter().map(|p| p.id.as_str()).collect();
                bail!("unknown cultural profile '{}' (known: {})", id, known.join(", "));
            }
        },
    };

    let personal_milestones = parse_overrides(milestone_overrides, inactive)?;
    let params = rates.apply(ConfigurableParams::default())?;
    log::debug!(
        "profile {} with {} personal override(s)",
        selected_profile.id,
        personal_milestones.len()
    );

    if json {
        let request = serde_json::json!({
            "schema_version": lc_core::SCHEMA_VERSION,
            "birth_date": birth_date,
            "now": now,
            "params": params,
            "cultural_profile": selected_profile.id,
            "personal_milestones": personal_milestones,
        });
        let response = calculate_stats_json(&request.to_string())?;
        println!("{}", response);
        return Ok(());
    }

    let ctx = CalculationContext {
        birth_date,
        personal_milestones,
        profile: selected_profile,
        params,
    };
    let snapshot = calculate_advanced_stats(now, &ctx);
    print_report(&ctx, now, &snapshot);
    Ok(())
}

fn print_report(ctx: &CalculationContext, now: DateTime<Utc>, snapshot: &AdvancedLifeStats) {
    let age = age_breakdown(ctx.birth_date, now);
    let countdown = time_until_next_birthday(ctx.birth_date, now);
    let age_in_months = lc_core::age_in_months(ctx.birth_date, now);
    let context = &snapshot.developmental_context;

    println!("Life statistics for {} ({})", ctx.birth_date, ctx.profile.name);
    println!(
        "Age: {} years, {} months, {} days - next birthday in {} days",
        age.years, age.months, age.days, countdown.days
    );
    println!("Current phase: {}", context.current_phase);
    if !context.milestones_achieved.is_empty() {
        println!("Milestones achieved: {}", context.milestones_achieved.join(", "));
    }
    if !context.upcoming_milestones.is_empty() {
        println!("Coming up: {}", context.upcoming_milestones.join(", "));
    }
    println!();

    for kind in StatKind::ALL {
        let value = stat_value(kind, snapshot);
        println!(
            "{:<28} {:>18}   {}",
            kind.title(),
            with_thousands(value),
            fun_fact(kind, value, age_in_months)
        );
    }
}

fn cmd_milestones() -> Result<()> {
    println!("{:<20} {:<22} {:>8} {:>12}  required", "id", "name", "typical", "range");
    for m in milestones() {
        println!(
            "{:<20} {:<22} {:>5} mo {:>5}-{} mo  {}",
            m.id,
            m.name,
            m.typical_age_months,
            m.earliest_age_months,
            m.latest_age_months,
            if m.is_required { "yes" } else { "no" }
        );
        for v in &m.cultural_variations {
            println!(
                "    {:<24} {:>5} mo  prevalence {:.0}%",
                v.region,
                v.typical_age_months,
                v.prevalence * 100.0
            );
        }
    }
    Ok(())
}

fn cmd_profiles() -> Result<()> {
    for p in cultural_profiles() {
        let marker = if p.id == default_cultural_profile().id { " (default)" } else { "" };
        println!("{}{} - {} [{}]", p.id, marker, p.name, p.region);
        for id in MilestoneId::ALL {
            let adjustment = p.adjustment_for(id);
            let prevalence = p.prevalence_for(id);
            if adjustment != 0 || prevalence.is_some() {
                let prevalence = prevalence
                    .map(|v| format!("{:.0}%", v * 100.0))
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "    {:<20} {:>+4} mo  prevalence {}",
                    id.as_str(),
                    adjustment,
                    prevalence
                );
            }
        }
    }
    Ok(())
}

fn cmd_phases() -> Result<()> {
    for phase in life_phases() {
        println!(
            "{:<18} {:>4}-{:<4} mo ({}-{} yrs)",
            phase.name,
            phase.start_age_months,
            phase.end_age_months,
            phase.start_age_months / 12,
            phase.end_age_months / 12
        );
        println!("    {}", phase.characteristics.join(", "));
    }
    Ok(())
}

fn cmd_validate(birth_date: NaiveDate) -> Result<()> {
    match validate_birth_date(birth_date, Utc::now()) {
        Ok(()) => {
            println!("{} is a valid birth date", birth_date);
            Ok(())
        }
        Err(reason) => bail!("{}", reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_parse_and_validate() {
        let parsed =
            parse_overrides(&["walking=12".to_string()], &["coffee_consumption".to_string()])
                .unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].milestone_id, MilestoneId::Walking);
        assert_eq!(parsed[0].personal_age_months, Some(12));
        assert!(!parsed[1].is_active);
    }

    #[test]
    fn out_of_range_override_is_rejected() {
        let err = parse_overrides(&["walking=99".to_string()], &[]).unwrap_err();
        assert!(err.to_string().contains("Too late"));
    }

    #[test]
    fn unknown_ids_are_rejected_with_hints() {
        let err = parse_overrides(&["juggling=12".to_string()], &[]).unwrap_err();
        assert!(err.to_string().contains("unknown milestone id"));
        assert!(err.to_string().contains("walking"));
    }

    #[test]
    fn inactive_flag_merges_into_existing_override() {
        let parsed = parse_overrides(
            &["coffee_consumption=200".to_string()],
            &["coffee_consumption".to_string()],
        )
        .unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].personal_age_months, Some(200));
        assert!(!parsed[0].is_active);
    }

    #[test]
    fn negative_rates_are_rejected() {
        let rates = RateArgs {
            sleep_hours_per_day: Some(-1.0),
            heart_rate_per_minute: None,
            steps_per_day: None,
            cups_of_coffee_per_day: None,
            meals_per_day: None,
            breaths_per_minute: None,
            reading_speed_pages_per_hour: None,
            average_book_pages: None,
            average_movie_minutes: None,
        };
        assert!(rates.apply(ConfigurableParams::default()).is_err());
    }
}
