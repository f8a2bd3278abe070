//! Condition evaluation against a trip context.

use crate::catalog::entry::{Condition, ConditionKind, ConditionOp};
use crate::context::TripContext;
use crate::domain::trip::TransportMode;

/// Numeric tolerance for `Equals` comparisons on duration and group size.
const EQUALS_TOLERANCE: f64 = 0.1;

/// Base score a matched condition contributes, determined by its kind and
/// scaled by the condition's own weight.
pub fn base_score(kind: ConditionKind) -> f64 {
    match kind {
        ConditionKind::Climate | ConditionKind::Temperature => 0.9,
        ConditionKind::Activity => 0.8,
        ConditionKind::Transport => 0.7,
        ConditionKind::Accommodation | ConditionKind::BusinessTrip => 0.6,
        ConditionKind::Duration | ConditionKind::Season => 0.5,
        ConditionKind::GroupSize => 0.4,
        // Declared but unimplemented kinds never match, so they never score.
        ConditionKind::TimeOfDay | ConditionKind::Destination => 0.0,
    }
}

pub fn matches(condition: &Condition, context: &TripContext) -> bool {
    match condition.kind {
        ConditionKind::Transport => condition.values.iter().any(|value| {
            value
                .parse::<TransportMode>()
                .map(|mode| context.transports.contains(&mode))
                .unwrap_or(false)
        }),
        ConditionKind::Activity => condition
            .values
            .iter()
            .any(|value| context.activities.contains(&value.to_ascii_lowercase())),
        ConditionKind::Accommodation => {
            single_value_eq(&condition.values, context.accommodation.as_str())
        }
        ConditionKind::Climate => single_value_eq(&condition.values, context.climate.as_str()),
        ConditionKind::Season => single_value_eq(&condition.values, context.season.as_str()),
        ConditionKind::Duration => {
            numeric_matches(condition.op, context.duration_days as f64, &condition.values)
        }
        ConditionKind::GroupSize => {
            numeric_matches(condition.op, f64::from(context.party_size), &condition.values)
        }
        ConditionKind::BusinessTrip => condition
            .values
            .first()
            .and_then(|value| match value.trim().to_ascii_lowercase().as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            })
            .map(|expected| expected == context.business_focused)
            .unwrap_or(false),
        ConditionKind::Temperature => context
            .weather
            .map(|weather| single_value_eq(&condition.values, weather.bucket.as_str()))
            .unwrap_or(false),
        ConditionKind::TimeOfDay | ConditionKind::Destination => false,
    }
}

fn single_value_eq(values: &[String], actual: &str) -> bool {
    values.first().map(|value| value.trim().eq_ignore_ascii_case(actual)).unwrap_or(false)
}

fn numeric_matches(op: ConditionOp, actual: f64, values: &[String]) -> bool {
    let Some(parsed) = parse_numbers(values) else {
        return false;
    };

    match op {
        ConditionOp::Equals => parsed
            .first()
            .map(|bound| (actual - bound).abs() <= EQUALS_TOLERANCE)
            .unwrap_or(false),
        ConditionOp::Contains => {
            parsed.iter().any(|bound| (actual - bound).abs() <= EQUALS_TOLERANCE)
        }
        ConditionOp::GreaterThan => parsed.first().map(|bound| actual > *bound).unwrap_or(false),
        ConditionOp::LessThan => parsed.first().map(|bound| actual < *bound).unwrap_or(false),
        ConditionOp::Between => {
            // Requires exactly two bounds, inclusive on both ends.
            if parsed.len() != 2 {
                return false;
            }
            let low = parsed[0].min(parsed[1]);
            let high = parsed[0].max(parsed[1]);
            actual >= low && actual <= high
        }
        ConditionOp::Not => {
            !parsed.iter().any(|bound| (actual - bound).abs() <= EQUALS_TOLERANCE)
        }
    }
}

fn parse_numbers(values: &[String]) -> Option<Vec<f64>> {
    if values.is_empty() {
        return None;
    }
    values.iter().map(|value| value.trim().parse::<f64>().ok()).collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::domain::trip::{Accommodation, Climate, TripSnapshot};

    use super::*;

    fn context() -> TripContext {
        let snapshot = TripSnapshot::new(
            "Anywhere",
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 7, 8).unwrap(),
        )
        .with_transports([TransportMode::Plane])
        .with_accommodation(Accommodation::Hotel)
        .with_activities(["hiking"])
        .with_party_size(2)
        .with_climate(Climate::Cold);
        TripContext::from_snapshot(&snapshot)
    }

    #[test]
    fn transport_matches_on_set_intersection() {
        let context = context();
        assert!(matches(&Condition::new(ConditionKind::Transport, ["train", "plane"]), &context));
        assert!(!matches(&Condition::new(ConditionKind::Transport, ["car"]), &context));
        assert!(!matches(&Condition::new(ConditionKind::Transport, ["submarine"]), &context));
    }

    #[test]
    fn activity_matches_any_value_case_insensitively() {
        let context = context();
        assert!(matches(&Condition::new(ConditionKind::Activity, ["Hiking", "surfing"]), &context));
        assert!(!matches(&Condition::new(ConditionKind::Activity, ["surfing"]), &context));
    }

    #[test]
    fn duration_operators() {
        let context = context(); // 7 days
        let duration = |op, values: &[&str]| {
            matches(
                &Condition::new(ConditionKind::Duration, values.iter().copied()).with_op(op),
                &context,
            )
        };

        assert!(duration(ConditionOp::Equals, &["7"]));
        assert!(duration(ConditionOp::Equals, &["7.05"]));
        assert!(!duration(ConditionOp::Equals, &["8"]));
        assert!(duration(ConditionOp::GreaterThan, &["5"]));
        assert!(duration(ConditionOp::LessThan, &["10"]));
        assert!(duration(ConditionOp::Between, &["5", "10"]));
        assert!(duration(ConditionOp::Between, &["7", "10"]));
        assert!(!duration(ConditionOp::Between, &["8", "10"]));
        assert!(!duration(ConditionOp::Between, &["5"]));
        assert!(duration(ConditionOp::Not, &["5"]));
        assert!(!duration(ConditionOp::Not, &["7"]));
        assert!(!duration(ConditionOp::Equals, &["soon"]));
    }

    #[test]
    fn business_trip_compares_boolean_value() {
        let context = context();
        assert!(matches(
            &Condition::new(ConditionKind::BusinessTrip, ["false"]).with_op(ConditionOp::Equals),
            &context
        ));
        assert!(!matches(
            &Condition::new(ConditionKind::BusinessTrip, ["true"]).with_op(ConditionOp::Equals),
            &context
        ));
        assert!(!matches(
            &Condition::new(ConditionKind::BusinessTrip, ["maybe"]).with_op(ConditionOp::Equals),
            &context
        ));
    }

    #[test]
    fn temperature_requires_weather_context() {
        let mut context = context();
        let condition =
            Condition::new(ConditionKind::Temperature, ["cold"]).with_op(ConditionOp::Equals);
        assert!(matches(&condition, &context));

        context.weather = None;
        assert!(!matches(&condition, &context));
    }

    #[test]
    fn unimplemented_kinds_evaluate_false() {
        let context = context();
        assert!(!matches(&Condition::new(ConditionKind::TimeOfDay, ["morning"]), &context));
        assert!(!matches(&Condition::new(ConditionKind::Destination, ["Anywhere"]), &context));
    }

    #[test]
    fn base_scores_by_kind() {
        assert_eq!(base_score(ConditionKind::Climate), 0.9);
        assert_eq!(base_score(ConditionKind::Activity), 0.8);
        assert_eq!(base_score(ConditionKind::Transport), 0.7);
        assert_eq!(base_score(ConditionKind::Accommodation), 0.6);
        assert_eq!(base_score(ConditionKind::Duration), 0.5);
        assert_eq!(base_score(ConditionKind::GroupSize), 0.4);
        assert_eq!(base_score(ConditionKind::Destination), 0.0);
    }
}
