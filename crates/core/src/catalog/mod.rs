//! Item catalog: loading, validation, and indexed lookup.

pub mod defaults;
pub mod entry;

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use tracing::warn;

use crate::domain::item::{ItemCategory, PriorityTier};
use crate::errors::CatalogError;

pub use entry::{
    CatalogEntry, Condition, ConditionKind, ConditionOp, EntryId, QuantityFormula, QuantityRule,
};

/// Multi-criterion catalog search. Omitted criteria match everything;
/// provided criteria are AND-combined.
#[derive(Clone, Debug, Default)]
pub struct CatalogQuery {
    pub categories: Vec<ItemCategory>,
    pub tags: Vec<String>,
    pub priorities: Vec<PriorityTier>,
    pub essential: Option<bool>,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = ItemCategory>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    pub fn with_tags<S: Into<String>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_priorities(mut self, priorities: impl IntoIterator<Item = PriorityTier>) -> Self {
        self.priorities = priorities.into_iter().collect();
        self
    }

    pub fn with_essential(mut self, essential: bool) -> Self {
        self.essential = Some(essential);
        self
    }

    fn matches(&self, entry: &CatalogEntry) -> bool {
        if !self.categories.is_empty() && !self.categories.contains(&entry.category) {
            return false;
        }
        if !self.tags.is_empty() && !self.tags.iter().any(|tag| entry.has_tag(tag)) {
            return false;
        }
        if !self.priorities.is_empty() && !self.priorities.contains(&entry.priority) {
            return false;
        }
        if let Some(essential) = self.essential {
            if entry.essential != essential {
                return false;
            }
        }
        true
    }
}

/// Read-only set of catalog entries with id, category, and tag indices.
///
/// Loaded once per process and shared by reference; generation calls never
/// mutate it.
#[derive(Debug)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    by_id: HashMap<EntryId, usize>,
    by_category: HashMap<ItemCategory, Vec<usize>>,
    by_tag: HashMap<String, Vec<usize>>,
}

impl Catalog {
    /// Build a catalog after validating ids and base quantities.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id.clone()) {
                return Err(CatalogError::Validation(format!(
                    "duplicate entry id `{}`",
                    entry.id.as_str()
                )));
            }
            if entry.base_quantity == 0 {
                return Err(CatalogError::Validation(format!(
                    "entry `{}` has zero base quantity",
                    entry.id.as_str()
                )));
            }
        }
        Ok(Self::index(entries))
    }

    /// The embedded default catalog.
    pub fn fallback() -> Self {
        Self::index(defaults::entries())
    }

    /// Load a catalog, substituting the embedded defaults on any failure.
    /// Never errors; the engine must not run against zero entries.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::fallback();
        };

        match load_entries(path).and_then(Self::from_entries) {
            Ok(catalog) => catalog,
            Err(error) => {
                warn!(path = %path.display(), %error, "catalog load failed, using embedded defaults");
                Self::fallback()
            }
        }
    }

    fn index(entries: Vec<CatalogEntry>) -> Self {
        let mut by_id = HashMap::new();
        let mut by_category: HashMap<ItemCategory, Vec<usize>> = HashMap::new();
        let mut by_tag: HashMap<String, Vec<usize>> = HashMap::new();

        for (position, entry) in entries.iter().enumerate() {
            by_id.entry(entry.id.clone()).or_insert(position);
            by_category.entry(entry.category).or_default().push(position);
            for tag in &entry.tags {
                by_tag.entry(tag.clone()).or_default().push(position);
            }
        }

        Self { entries, by_id, by_category, by_tag }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, id: &EntryId) -> Option<&CatalogEntry> {
        self.by_id.get(id).map(|position| &self.entries[*position])
    }

    pub fn by_category(&self, category: ItemCategory) -> Vec<&CatalogEntry> {
        self.by_category
            .get(&category)
            .map(|positions| positions.iter().map(|position| &self.entries[*position]).collect())
            .unwrap_or_default()
    }

    pub fn by_tag(&self, tag: &str) -> Vec<&CatalogEntry> {
        self.by_tag
            .get(tag)
            .map(|positions| positions.iter().map(|position| &self.entries[*position]).collect())
            .unwrap_or_default()
    }

    pub fn search(&self, query: &CatalogQuery) -> Vec<&CatalogEntry> {
        self.entries.iter().filter(|entry| query.matches(entry)).collect()
    }
}

/// Strict dataset loading; callers wanting the fallback behavior go through
/// `Catalog::load_or_default`.
pub fn load_entries(path: &Path) -> Result<Vec<CatalogEntry>, CatalogError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| CatalogError::ReadFile { path: path.to_path_buf(), source })?;
    serde_json::from_str(&raw)
        .map_err(|source| CatalogError::ParseFile { path: path.to_path_buf(), source })
}
