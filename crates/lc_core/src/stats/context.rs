//! Developmental context derivation

use super::types::{CalculationContext, DevelopmentalContext};
use crate::milestones::{registry, resolver};

/// Months ahead to scan for upcoming milestones.
pub const UPCOMING_WINDOW_MONTHS: i64 = 60;

/// Derive the current life phase and milestone outlook for an age.
///
/// A milestone lands in `milestones_achieved` when its resolved start age has
/// been reached and in `upcoming_milestones` when it starts within the next
/// five years; the two lists are disjoint by construction. Ages outside the
/// phase table label the phase "Unknown" rather than failing.
pub fn developmental_context(
    age_in_months: i64,
    ctx: &CalculationContext,
) -> DevelopmentalContext {
    let current_phase = registry::phase_for_age(age_in_months)
        .map(|phase| phase.name.clone())
        .unwrap_or_else(|| "Unknown".to_string());

    let mut milestones_achieved = Vec::new();
    let mut upcoming_milestones = Vec::new();

    for milestone in registry::milestones() {
        let start = i64::from(resolver::resolve_start_age_months(milestone.id, ctx));
        if age_in_months >= start {
            milestones_achieved.push(milestone.name.clone());
        } else if start <= age_in_months + UPCOMING_WINDOW_MONTHS {
            upcoming_milestones.push(milestone.name.clone());
        }
    }

    DevelopmentalContext { current_phase, milestones_achieved, upcoming_milestones }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::milestones::{MilestoneId, PersonalMilestone};
    use crate::stats::CalculationContext;
    use chrono::NaiveDate;

    fn ctx() -> CalculationContext {
        CalculationContext::new(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap())
    }

    #[test]
    fn newborn_has_everything_ahead() {
        let context = developmental_context(0, &ctx());
        assert_eq!(context.current_phase, "Infancy");
        assert!(context.milestones_achieved.is_empty());
        // Only walking (15 months) starts within the first 60 months.
        assert_eq!(context.upcoming_milestones, vec!["Walking".to_string()]);
    }

    #[test]
    fn young_adult_context_splits_achieved_and_upcoming() {
        // 239 months with the default profile: everything but alcohol has
        // started, and alcohol (252) falls inside the 60-month window.
        let context = developmental_context(239, &ctx());
        assert_eq!(context.current_phase, "Young Adulthood");
        assert_eq!(context.milestones_achieved.len(), 6);
        assert_eq!(context.upcoming_milestones, vec!["Alcohol Consumption".to_string()]);
    }

    #[test]
    fn achieved_and_upcoming_are_disjoint_at_any_age() {
        for age in [0, 12, 60, 120, 200, 300, 600, 1100] {
            let context = developmental_context(age, &ctx());
            for name in &context.milestones_achieved {
                assert!(
                    !context.upcoming_milestones.contains(name),
                    "{} in both lists at {} months",
                    name,
                    age
                );
            }
        }
    }

    #[test]
    fn far_upcoming_milestones_are_excluded() {
        // At 60 months, driving (192) is more than 60 months away.
        let context = developmental_context(60, &ctx());
        assert!(!context.upcoming_milestones.contains(&"Driving".to_string()));
    }

    #[test]
    fn window_boundary_is_inclusive() {
        // Walking resolved at 15: at 14 months it is upcoming, at 15 achieved.
        let context = developmental_context(14, &ctx());
        assert!(context.upcoming_milestones.contains(&"Walking".to_string()));

        let context = developmental_context(15, &ctx());
        assert!(context.milestones_achieved.contains(&"Walking".to_string()));
    }

    #[test]
    fn personal_override_moves_a_milestone_between_lists() {
        let delayed = ctx()
            .with_personal_milestone(PersonalMilestone::at_age(MilestoneId::Walking, 20));
        let context = developmental_context(18, &delayed);
        assert!(!context.milestones_achieved.contains(&"Walking".to_string()));
        assert!(context.upcoming_milestones.contains(&"Walking".to_string()));
    }

    #[test]
    fn out_of_table_age_reads_unknown() {
        let context = developmental_context(1500, &ctx());
        assert_eq!(context.current_phase, "Unknown");
    }
}
