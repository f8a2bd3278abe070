//! Top-level generation: one pure pipeline run per trip snapshot.

use tracing::debug;

use crate::catalog::Catalog;
use crate::context::TripContext;
use crate::domain::item::PackItem;
use crate::domain::trip::TripSnapshot;
use crate::engine::{Recommendation, RuleEngine};
use crate::output::{map_items, NameResolver};
use crate::pipeline;

/// Packing-list generator over an explicitly injected, read-only catalog.
///
/// Holds no per-trip state: every call derives a fresh context, evaluates
/// the full catalog, and runs the post-processing stages. Concurrent calls
/// for different trips are fully independent.
#[derive(Debug)]
pub struct PackingListGenerator {
    catalog: Catalog,
    engine: RuleEngine,
}

impl PackingListGenerator {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog, engine: RuleEngine::new() }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Ranked, deduplicated, quantity-assigned recommendations for a trip.
    pub fn generate(&self, snapshot: &TripSnapshot) -> Vec<Recommendation> {
        let context = TripContext::from_snapshot(snapshot);

        let raw = self.engine.evaluate(&self.catalog, &context);
        debug!(candidates = raw.len(), duration_days = context.duration_days, "engine pass done");

        let refined = pipeline::run(raw, &context, &self.catalog);
        debug!(survivors = refined.len(), "post-processing done");

        refined
    }

    /// Full run through the output mapper: concrete packable items.
    pub fn generate_items(
        &self,
        snapshot: &TripSnapshot,
        resolver: &dyn NameResolver,
    ) -> Vec<PackItem> {
        let recommendations = self.generate(snapshot);
        map_items(&recommendations, &self.catalog, resolver)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::domain::trip::{Accommodation, Climate, TransportMode};
    use crate::output::KeyResolver;

    use super::*;

    fn generator() -> PackingListGenerator {
        PackingListGenerator::new(Catalog::fallback())
    }

    fn snapshot() -> TripSnapshot {
        TripSnapshot::new(
            "Lisbon, Portugal",
            NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 9).unwrap(),
        )
        .with_transports([TransportMode::Plane])
        .with_accommodation(Accommodation::Hotel)
        .with_climate(Climate::Warm)
    }

    #[test]
    fn generation_is_deterministic() {
        let generator = generator();
        let first = generator.generate(&snapshot());
        let second = generator.generate(&snapshot());
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn generated_items_are_unpacked_with_resolved_names() {
        let generator = generator();
        let items = generator.generate_items(&snapshot(), &KeyResolver);

        assert!(!items.is_empty());
        assert!(items.iter().all(|item| !item.packed));
        assert!(items.iter().all(|item| item.quantity >= 1));
        assert!(items.iter().all(|item| item.name.starts_with("item.")));
    }
}
