//! Rule engine: evaluates every catalog entry against a trip context and
//! produces scored recommendations.

pub mod conditions;
pub mod quantity;

use serde::{Deserialize, Serialize};

use crate::catalog::entry::{CatalogEntry, ConditionKind, EntryId};
use crate::catalog::Catalog;
use crate::context::TripContext;
use crate::domain::item::PriorityTier;

/// Recommendations below this confidence are dropped unless the entry is
/// essential or critical.
pub const MIN_CONFIDENCE: f64 = 0.3;

/// Confidence floor applied to essential and critical entries.
pub const FORCE_INCLUDE_FLOOR: f64 = 0.7;

/// A scored packing recommendation. Immutable value; pipeline stages build
/// adjusted copies rather than mutating in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub entry_id: EntryId,
    pub quantity: u32,
    pub confidence: f64,
    pub reasons: Vec<String>,
    pub auto_select: bool,
}

impl Recommendation {
    /// Copy with an adjusted confidence, clamped to [0, 1].
    pub fn with_confidence(&self, confidence: f64) -> Self {
        Self { confidence: confidence.clamp(0.0, 1.0), ..self.clone() }
    }
}

#[derive(Clone, Debug, Default)]
pub struct RuleEngine;

impl RuleEngine {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate every catalog entry, ordered by priority-tier weight
    /// descending, ties broken by confidence, then entry id for
    /// determinism.
    pub fn evaluate(&self, catalog: &Catalog, context: &TripContext) -> Vec<Recommendation> {
        let mut scored: Vec<(f64, Recommendation)> = catalog
            .entries()
            .iter()
            .filter_map(|entry| {
                evaluate_entry(entry, context)
                    .map(|recommendation| (entry.priority.weight(), recommendation))
            })
            .collect();

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| {
                    b.1.confidence
                        .partial_cmp(&a.1.confidence)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .then_with(|| a.1.entry_id.cmp(&b.1.entry_id))
        });

        scored.into_iter().map(|(_, recommendation)| recommendation).collect()
    }
}

fn evaluate_entry(entry: &CatalogEntry, context: &TripContext) -> Option<Recommendation> {
    let matched: Vec<ConditionKind> = entry
        .conditions
        .iter()
        .filter(|condition| conditions::matches(condition, context))
        .map(|condition| condition.kind)
        .collect();

    // Entries declaring no conditions apply to every trip.
    let applicable =
        entry.conditions.is_empty() || !matched.is_empty() || entry.priority == PriorityTier::Critical;
    if !applicable {
        return None;
    }

    let mut score = entry.priority.weight();
    for condition in &entry.conditions {
        if conditions::matches(condition, context) {
            score += conditions::base_score(condition.kind) * condition.weight.clamp(0.0, 1.0);
        }
    }

    let force_include = entry.essential || entry.priority == PriorityTier::Critical;
    if force_include {
        score = score.max(FORCE_INCLUDE_FLOOR);
    }

    let confidence = score.clamp(0.0, 1.0);
    if confidence < MIN_CONFIDENCE && !force_include {
        return None;
    }

    Some(Recommendation {
        entry_id: entry.id.clone(),
        quantity: quantity::recommended_quantity(entry, context),
        confidence,
        reasons: build_reasons(&matched, force_include),
        auto_select: force_include,
    })
}

fn build_reasons(matched: &[ConditionKind], force_include: bool) -> Vec<String> {
    let mut reasons = Vec::new();

    if force_include {
        reasons.push("must-have for every trip".to_string());
    }

    for kind in matched {
        let reason = match kind {
            ConditionKind::Transport => "matches how you are travelling",
            ConditionKind::Accommodation => "fits where you are staying",
            ConditionKind::Activity => "needed for your planned activities",
            ConditionKind::Climate => "suited to the destination climate",
            ConditionKind::Duration => "appropriate for the trip length",
            ConditionKind::GroupSize => "fits your party size",
            ConditionKind::Season => "in season for your travel dates",
            ConditionKind::BusinessTrip => "recommended for business travel",
            ConditionKind::Temperature => "matches the expected temperatures",
            ConditionKind::TimeOfDay | ConditionKind::Destination => continue,
        };
        let reason = reason.to_string();
        if !reasons.contains(&reason) {
            reasons.push(reason);
        }
    }

    if reasons.is_empty() {
        reasons.push("generally useful when travelling".to_string());
    }

    reasons
}
