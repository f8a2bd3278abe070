//! Quantity calculation: an ordered fold over an entry's quantity rules.

use crate::catalog::entry::{CatalogEntry, QuantityFormula, QuantityRule};
use crate::context::TripContext;
use crate::domain::item::ItemCategory;
use crate::domain::trip::TemperatureBucket;

use super::conditions;

pub const GLOBAL_MIN_QUANTITY: u32 = 1;
pub const GLOBAL_MAX_QUANTITY: u32 = 20;

/// Fold the entry's quantity rules in declared order. Guarded rules are
/// skipped unless their condition matches; the last applicable rule wins.
/// Each applicable rule recomputes from the base quantity, is clamped to
/// its own bounds, and the result is clamped to the global range at the end.
pub fn recommended_quantity(entry: &CatalogEntry, context: &TripContext) -> u32 {
    let base = entry.base_quantity.max(1);

    let quantity = entry.quantity_rules.iter().fold(base, |current, rule| {
        if !rule_applies(rule, context) {
            return current;
        }
        clamp_rule(apply_formula(rule.formula, entry, context, base), rule)
    });

    quantity.clamp(GLOBAL_MIN_QUANTITY, GLOBAL_MAX_QUANTITY)
}

fn rule_applies(rule: &QuantityRule, context: &TripContext) -> bool {
    rule.condition
        .as_ref()
        .map(|condition| conditions::matches(condition, context))
        .unwrap_or(true)
}

fn clamp_rule(value: u32, rule: &QuantityRule) -> u32 {
    let floored = rule.min.map(|min| value.max(min)).unwrap_or(value);
    rule.max.map(|max| floored.min(max)).unwrap_or(floored)
}

fn apply_formula(
    formula: QuantityFormula,
    entry: &CatalogEntry,
    context: &TripContext,
    base: u32,
) -> u32 {
    let days = context.duration_days.max(1) as u32;
    let party = context.party_size.max(1);

    match formula {
        QuantityFormula::Fixed => base,
        QuantityFormula::PerDay => base.saturating_mul(days),
        QuantityFormula::PerPerson => base.saturating_mul(party),
        QuantityFormula::PerDayPerPerson => base.saturating_mul(days).saturating_mul(party),
        QuantityFormula::Conditional => conditional_quantity(entry, context, base),
        QuantityFormula::WeatherDependent => weather_quantity(entry, context, base),
    }
}

/// Category-specific heuristics for the `conditional` formula. The tag
/// families interpreted here follow the dataset's conventions; unknown
/// tags fall through to the base quantity.
fn conditional_quantity(entry: &CatalogEntry, context: &TripContext, base: u32) -> u32 {
    let days = context.duration_days.max(1) as u32;

    match entry.category {
        ItemCategory::Clothing => {
            if entry.has_tag("underwear") || entry.has_tag("socks") {
                (days + 1).min(7)
            } else if entry.has_tag("shirt") || entry.has_tag("top") {
                (days / 2).clamp(2, 5)
            } else if entry.has_tag("pants") || entry.has_tag("bottom") {
                if context.long_trip {
                    3
                } else {
                    2
                }
            } else if entry.has_tag("outerwear") {
                1
            } else {
                base
            }
        }
        ItemCategory::Toiletries => {
            if context.long_trip {
                2
            } else {
                1
            }
        }
        ItemCategory::Electronics => {
            if context.party_size > 2 {
                2
            } else {
                1
            }
        }
        ItemCategory::Documents => 1,
        _ => base,
    }
}

/// `weatherDependent` degrades to the base quantity when the weather
/// sub-context is absent.
fn weather_quantity(entry: &CatalogEntry, context: &TripContext, base: u32) -> u32 {
    let Some(weather) = context.weather else {
        return base;
    };

    match weather.bucket {
        TemperatureBucket::Cold if entry.has_tag("cold") || entry.has_tag("winter") => base + 1,
        TemperatureBucket::Hot if entry.has_tag("sun") || entry.has_tag("cooling") => base + 1,
        _ => base,
    }
}
