//! Packing-list recommendation engine.
//!
//! Given a trip snapshot (dates, transport modes, accommodation,
//! activities, climate, party size), produces a ranked, deduplicated,
//! quantity-assigned list of items to pack. The catalog is loaded once
//! and injected read-only; every generation call is a pure, full pipeline
//! run with no shared mutable state.

pub mod catalog;
pub mod config;
pub mod context;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod generator;
pub mod output;
pub mod pipeline;

pub use catalog::{
    Catalog, CatalogEntry, CatalogQuery, Condition, ConditionKind, ConditionOp, EntryId,
    QuantityFormula, QuantityRule,
};
pub use config::{AppConfig, ConfigError, ConfigOverrides, LoadOptions, LogFormat};
pub use context::{TripContext, WeatherContext};
pub use domain::item::{GenderAffinity, ItemCategory, PackItem, PriorityTier};
pub use domain::trip::{
    Accommodation, Climate, Season, TemperatureBucket, TransportMode, TripSnapshot,
};
pub use engine::{Recommendation, RuleEngine};
pub use errors::{CatalogError, UnknownVariant};
pub use generator::PackingListGenerator;
pub use output::{KeyResolver, NameResolver, TableResolver};
