//! Output mapper: surviving recommendations to concrete packable items.

use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::domain::item::PackItem;
use crate::engine::Recommendation;

/// Opaque name-key to display-string resolution. The owning application
/// plugs in its localization layer; the engine only carries keys.
pub trait NameResolver {
    fn resolve(&self, key: &str) -> String;
}

/// Passes keys through unchanged. Useful default when no localization
/// layer is wired up.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyResolver;

impl NameResolver for KeyResolver {
    fn resolve(&self, key: &str) -> String {
        key.to_string()
    }
}

/// Table-backed resolver; unknown keys fall back to the key itself.
#[derive(Clone, Debug, Default)]
pub struct TableResolver {
    names: HashMap<String, String>,
}

impl TableResolver {
    pub fn new(names: impl IntoIterator<Item = (String, String)>) -> Self {
        Self { names: names.into_iter().collect() }
    }

    pub fn insert(&mut self, key: impl Into<String>, name: impl Into<String>) {
        self.names.insert(key.into(), name.into());
    }
}

impl NameResolver for TableResolver {
    fn resolve(&self, key: &str) -> String {
        self.names.get(key).cloned().unwrap_or_else(|| key.to_string())
    }
}

/// Map recommendations to packable items, in recommendation order.
/// Read-only with respect to the catalog; recommendations whose entry is
/// no longer present are skipped.
pub fn map_items(
    recommendations: &[Recommendation],
    catalog: &Catalog,
    resolver: &dyn NameResolver,
) -> Vec<PackItem> {
    recommendations
        .iter()
        .filter_map(|recommendation| {
            let entry = catalog.find(&recommendation.entry_id)?;
            Some(PackItem {
                name: resolver.resolve(&entry.name_key),
                category: entry.category,
                essential: entry.essential,
                quantity: recommendation.quantity,
                packed: false,
            })
        })
        .collect()
}
