//! Post-processing pipeline: ordered refinement stages over the raw
//! recommendation set. Every stage consumes and returns a fresh list;
//! recommendations are never mutated in place.

use std::collections::HashSet;

use crate::catalog::entry::{CatalogEntry, EntryId};
use crate::catalog::Catalog;
use crate::context::TripContext;
use crate::domain::item::{ItemCategory, PriorityTier};
use crate::engine::Recommendation;

const BASE_MAX_ITEMS: i64 = 30;
const MIN_MAX_ITEMS: i64 = 15;
const MAX_MAX_ITEMS: i64 = 80;

const SHORT_TRIP_PRUNE_CONFIDENCE: f64 = 0.4;
const CHARGER_BOOST: f64 = 0.3;
const ACTIVITY_BOOST: f64 = 0.2;
const CLIMATE_CLOTHING_BOOST: f64 = 0.3;
const CLIMATE_CLOTHING_TARGET: usize = 3;

pub fn run(
    recommendations: Vec<Recommendation>,
    context: &TripContext,
    catalog: &Catalog,
) -> Vec<Recommendation> {
    let recommendations = prune_short_trip(recommendations, context, catalog);
    let recommendations = apply_cardinality_cap(recommendations, context);
    let recommendations = dedup_alternatives(recommendations, catalog);
    bundle_related(recommendations, context, catalog)
}

/// Item budget for a trip, grown for long, outdoor, business, and group
/// trips, shrunk for short ones.
pub fn max_items(context: &TripContext) -> usize {
    let mut budget = BASE_MAX_ITEMS;
    if context.long_trip {
        budget += 15;
    }
    if context.short_trip {
        budget -= 10;
    }
    if context.outdoor_activity {
        budget += 10;
    }
    if context.business_focused {
        budget += 8;
    }
    budget += 5 * (i64::from(context.party_size.max(1)) - 1);

    budget.clamp(MIN_MAX_ITEMS, MAX_MAX_ITEMS) as usize
}

fn entry_of<'a>(catalog: &'a Catalog, recommendation: &Recommendation) -> Option<&'a CatalogEntry> {
    catalog.find(&recommendation.entry_id)
}

/// Stage 1: on short trips, weak recommendations are noise. Critical items
/// survive regardless.
fn prune_short_trip(
    recommendations: Vec<Recommendation>,
    context: &TripContext,
    catalog: &Catalog,
) -> Vec<Recommendation> {
    if !context.short_trip {
        return recommendations;
    }

    recommendations
        .into_iter()
        .filter(|recommendation| {
            if recommendation.confidence > SHORT_TRIP_PRUNE_CONFIDENCE {
                return true;
            }
            entry_of(catalog, recommendation)
                .map(|entry| entry.priority == PriorityTier::Critical)
                .unwrap_or(false)
        })
        .collect()
}

/// Stage 2: cardinality cap. Essential and critical recommendations are
/// retained unconditionally (the cap yields to them); remaining capacity is
/// filled with the highest-confidence remainder. Relative order of the
/// survivors is preserved.
fn apply_cardinality_cap(
    recommendations: Vec<Recommendation>,
    context: &TripContext,
) -> Vec<Recommendation> {
    let cap = max_items(context);
    if recommendations.len() <= cap {
        return recommendations;
    }

    let forced: Vec<&Recommendation> =
        recommendations.iter().filter(|recommendation| recommendation.auto_select).collect();

    let mut remainder: Vec<&Recommendation> =
        recommendations.iter().filter(|recommendation| !recommendation.auto_select).collect();
    remainder.sort_by(|a, b| {
        b.confidence.partial_cmp(&a.confidence).unwrap_or(std::cmp::Ordering::Equal)
    });

    let capacity = cap.saturating_sub(forced.len());
    let mut kept: HashSet<EntryId> =
        forced.iter().map(|recommendation| recommendation.entry_id.clone()).collect();
    kept.extend(
        remainder.iter().take(capacity).map(|recommendation| recommendation.entry_id.clone()),
    );

    recommendations
        .into_iter()
        .filter(|recommendation| kept.contains(&recommendation.entry_id))
        .collect()
}

/// Stage 3: alternative-based deduplication. Processed by confidence
/// descending so the strongest of an alternative group wins; keeping an
/// entry covers its id and all of its declared alternatives.
fn dedup_alternatives(
    recommendations: Vec<Recommendation>,
    catalog: &Catalog,
) -> Vec<Recommendation> {
    let mut by_confidence: Vec<&Recommendation> = recommendations.iter().collect();
    by_confidence.sort_by(|a, b| {
        b.confidence.partial_cmp(&a.confidence).unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut covered: HashSet<EntryId> = HashSet::new();
    let mut kept: HashSet<EntryId> = HashSet::new();

    for recommendation in by_confidence {
        let alternatives = entry_of(catalog, recommendation)
            .map(|entry| entry.alternatives.clone())
            .unwrap_or_default();

        let blocked = covered.contains(&recommendation.entry_id)
            || alternatives.iter().any(|alternative| covered.contains(alternative));
        if blocked {
            continue;
        }

        kept.insert(recommendation.entry_id.clone());
        covered.insert(recommendation.entry_id.clone());
        covered.extend(alternatives);
    }

    recommendations
        .into_iter()
        .filter(|recommendation| kept.contains(&recommendation.entry_id))
        .collect()
}

/// Stage 4: contextual bundling. Confidence-only adjustments; never removes
/// or reorders items.
fn bundle_related(
    recommendations: Vec<Recommendation>,
    context: &TripContext,
    catalog: &Catalog,
) -> Vec<Recommendation> {
    let recommendations = boost_charger_pairs(recommendations, catalog);
    let recommendations = boost_activity_matches(recommendations, context, catalog);
    boost_climate_clothing(recommendations, context, catalog)
}

fn boost_charger_pairs(
    recommendations: Vec<Recommendation>,
    catalog: &Catalog,
) -> Vec<Recommendation> {
    let has_tag = |tag: &str| {
        recommendations.iter().any(|recommendation| {
            entry_of(catalog, recommendation).map(|entry| entry.has_tag(tag)).unwrap_or(false)
        })
    };
    if !(has_tag("needs_charger") && has_tag("charger")) {
        return recommendations;
    }

    recommendations
        .into_iter()
        .map(|recommendation| {
            let is_charger = entry_of(catalog, &recommendation)
                .map(|entry| entry.has_tag("charger"))
                .unwrap_or(false);
            if is_charger {
                recommendation.with_confidence(recommendation.confidence + CHARGER_BOOST)
            } else {
                recommendation
            }
        })
        .collect()
}

fn boost_activity_matches(
    recommendations: Vec<Recommendation>,
    context: &TripContext,
    catalog: &Catalog,
) -> Vec<Recommendation> {
    if context.activities.is_empty() {
        return recommendations;
    }

    recommendations
        .into_iter()
        .map(|recommendation| {
            let overlaps = entry_of(catalog, &recommendation)
                .map(|entry| entry.tags.iter().any(|tag| context.activities.contains(tag)))
                .unwrap_or(false);
            if overlaps {
                recommendation.with_confidence(recommendation.confidence + ACTIVITY_BOOST)
            } else {
                recommendation
            }
        })
        .collect()
}

fn boost_climate_clothing(
    recommendations: Vec<Recommendation>,
    context: &TripContext,
    catalog: &Catalog,
) -> Vec<Recommendation> {
    let climate_tag = context.climate.as_str();

    let tagged_clothing = |recommendation: &Recommendation| {
        entry_of(catalog, recommendation)
            .map(|entry| entry.category == ItemCategory::Clothing && entry.has_tag(climate_tag))
            .unwrap_or(false)
    };

    let already_covered =
        recommendations.iter().filter(|recommendation| tagged_clothing(recommendation)).count();
    if already_covered >= CLIMATE_CLOTHING_TARGET {
        return recommendations;
    }

    recommendations
        .into_iter()
        .map(|recommendation| {
            if tagged_clothing(&recommendation) {
                recommendation.with_confidence(recommendation.confidence + CLIMATE_CLOTHING_BOOST)
            } else {
                recommendation
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::catalog::entry::CatalogEntry;
    use crate::domain::trip::{Climate, TripSnapshot};

    use super::*;

    fn context(days: u32, party: u32) -> TripContext {
        let start = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let snapshot =
            TripSnapshot::new("Test", start, start + chrono::Duration::days(i64::from(days)))
                .with_party_size(party);
        TripContext::from_snapshot(&snapshot)
    }

    fn recommendation(id: &str, confidence: f64, auto_select: bool) -> Recommendation {
        Recommendation {
            entry_id: EntryId::new(id),
            quantity: 1,
            confidence,
            reasons: vec!["test".to_string()],
            auto_select,
        }
    }

    fn entry(id: &str, priority: PriorityTier) -> CatalogEntry {
        CatalogEntry::new(id, format!("item.{id}"), ItemCategory::Other, priority)
    }

    #[test]
    fn max_items_formula_and_bounds() {
        assert_eq!(max_items(&context(7, 1)), 30);
        assert_eq!(max_items(&context(2, 1)), 20);
        assert_eq!(max_items(&context(20, 1)), 45);
        assert_eq!(max_items(&context(7, 4)), 45);
        // Long outdoor business group trip hits the upper clamp.
        let mut big = context(20, 8);
        big.outdoor_activity = true;
        big.business_focused = true;
        assert_eq!(max_items(&big), 80);
    }

    #[test]
    fn short_trip_pruning_spares_critical_items() {
        let catalog = Catalog::from_entries(vec![
            entry("weak", PriorityTier::Optional),
            entry("weak_critical", PriorityTier::Critical),
            entry("strong", PriorityTier::Optional),
        ])
        .unwrap();
        let context = context(2, 1);

        let pruned = prune_short_trip(
            vec![
                recommendation("weak", 0.35, false),
                recommendation("weak_critical", 0.35, true),
                recommendation("strong", 0.8, false),
            ],
            &context,
            &catalog,
        );

        let ids: Vec<&str> = pruned.iter().map(|r| r.entry_id.as_str()).collect();
        assert_eq!(ids, vec!["weak_critical", "strong"]);
    }

    #[test]
    fn cardinality_cap_yields_to_forced_items() {
        let context = context(2, 1); // cap = 20
        let mut recommendations = Vec::new();
        for index in 0..25 {
            recommendations.push(recommendation(
                &format!("forced_{index}"),
                0.5,
                true,
            ));
        }
        for index in 0..10 {
            recommendations.push(recommendation(
                &format!("extra_{index}"),
                0.9 - f64::from(index) * 0.01,
                false,
            ));
        }

        let capped = apply_cardinality_cap(recommendations, &context);
        // All 25 forced survive even though they alone exceed the cap.
        assert_eq!(capped.iter().filter(|r| r.auto_select).count(), 25);
        assert_eq!(capped.iter().filter(|r| !r.auto_select).count(), 0);
    }

    #[test]
    fn cardinality_cap_fills_with_highest_confidence() {
        let context = context(2, 1); // cap = 20
        let mut recommendations = vec![recommendation("forced", 0.7, true)];
        for index in 0..30 {
            recommendations.push(recommendation(
                &format!("extra_{index:02}"),
                0.9 - f64::from(index) * 0.02,
                false,
            ));
        }

        let capped = apply_cardinality_cap(recommendations, &context);
        assert_eq!(capped.len(), 20);
        assert!(capped.iter().any(|r| r.entry_id.as_str() == "forced"));
        assert!(capped.iter().any(|r| r.entry_id.as_str() == "extra_00"));
        assert!(!capped.iter().any(|r| r.entry_id.as_str() == "extra_29"));
    }

    #[test]
    fn alternatives_keep_only_the_strongest() {
        let catalog = Catalog::from_entries(vec![
            entry("boots", PriorityTier::Essential).with_alternatives(["runners"]),
            entry("runners", PriorityTier::Optional).with_alternatives(["boots"]),
            entry("unrelated", PriorityTier::Optional),
        ])
        .unwrap();

        let deduped = dedup_alternatives(
            vec![
                recommendation("boots", 0.9, true),
                recommendation("runners", 0.6, false),
                recommendation("unrelated", 0.5, false),
            ],
            &catalog,
        );

        let ids: Vec<&str> = deduped.iter().map(|r| r.entry_id.as_str()).collect();
        assert_eq!(ids, vec!["boots", "unrelated"]);
    }

    #[test]
    fn charger_boost_requires_both_sides_of_the_pair() {
        let catalog = Catalog::from_entries(vec![
            entry("phone", PriorityTier::Essential).with_tags(["needs_charger"]),
            entry("charger", PriorityTier::Essential).with_tags(["charger"]),
            entry("plain", PriorityTier::Optional),
        ])
        .unwrap();

        let boosted = boost_charger_pairs(
            vec![
                recommendation("phone", 0.6, true),
                recommendation("charger", 0.6, true),
                recommendation("plain", 0.6, false),
            ],
            &catalog,
        );
        assert!((boosted[1].confidence - 0.9).abs() < 1e-9);
        assert_eq!(boosted[0].confidence, 0.6);
        assert_eq!(boosted[2].confidence, 0.6);

        // Charger alone: nothing to pair with, no boost.
        let unboosted =
            boost_charger_pairs(vec![recommendation("charger", 0.6, true)], &catalog);
        assert_eq!(unboosted[0].confidence, 0.6);
    }

    #[test]
    fn activity_tag_overlap_boost() {
        let catalog = Catalog::from_entries(vec![
            entry("boots", PriorityTier::Essential).with_tags(["hiking"]),
            entry("plain", PriorityTier::Optional),
        ])
        .unwrap();
        let start = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let context = TripContext::from_snapshot(
            &TripSnapshot::new("Test", start, start + chrono::Duration::days(5))
                .with_activities(["hiking"]),
        );

        let boosted = boost_activity_matches(
            vec![recommendation("boots", 0.5, true), recommendation("plain", 0.5, false)],
            &context,
            &catalog,
        );
        assert!((boosted[0].confidence - 0.7).abs() < 1e-9);
        assert_eq!(boosted[1].confidence, 0.5);
    }

    #[test]
    fn climate_clothing_boost_stops_once_covered() {
        let entries: Vec<CatalogEntry> = (0..4)
            .map(|index| {
                CatalogEntry::new(
                    format!("cold_{index}"),
                    format!("item.cold_{index}"),
                    ItemCategory::Clothing,
                    PriorityTier::Recommended,
                )
                .with_tags(["cold"])
            })
            .collect();
        let catalog = Catalog::from_entries(entries).unwrap();

        let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        let context = TripContext::from_snapshot(
            &TripSnapshot::new("Test", start, start + chrono::Duration::days(5))
                .with_climate(Climate::Cold),
        );

        // Two cold-tagged clothing recommendations: below target, boosted.
        let boosted = boost_climate_clothing(
            vec![recommendation("cold_0", 0.5, false), recommendation("cold_1", 0.5, false)],
            &context,
            &catalog,
        );
        assert!(boosted.iter().all(|r| (r.confidence - 0.8).abs() < 1e-9));

        // Four already cover the climate: left untouched.
        let untouched = boost_climate_clothing(
            (0..4).map(|index| recommendation(&format!("cold_{index}"), 0.5, false)).collect(),
            &context,
            &catalog,
        );
        assert!(untouched.iter().all(|r| (r.confidence - 0.5).abs() < 1e-9));
    }

    #[test]
    fn boosts_clamp_at_full_confidence() {
        let catalog = Catalog::from_entries(vec![
            entry("phone", PriorityTier::Essential).with_tags(["needs_charger"]),
            entry("charger", PriorityTier::Essential).with_tags(["charger"]),
        ])
        .unwrap();

        let boosted = boost_charger_pairs(
            vec![recommendation("phone", 0.9, true), recommendation("charger", 0.9, true)],
            &catalog,
        );
        assert_eq!(boosted[1].confidence, 1.0);
    }
}
