//! Catalog entry records and their condition / quantity-rule vocabulary.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::item::{GenderAffinity, ItemCategory, PriorityTier};
use crate::domain::trip::Season;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntryId(pub String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Field of the trip context a condition is evaluated against.
///
/// `TimeOfDay` and `Destination` are declared for dataset compatibility but
/// always evaluate false; the context carries nothing they could match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionKind {
    Transport,
    Accommodation,
    Activity,
    Climate,
    Duration,
    GroupSize,
    Season,
    TimeOfDay,
    BusinessTrip,
    Destination,
    Temperature,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionOp {
    Equals,
    Contains,
    GreaterThan,
    LessThan,
    Between,
    Not,
}

impl Default for ConditionOp {
    fn default() -> Self {
        Self::Contains
    }
}

/// A predicate over trip-context fields gating or scoring inclusion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub kind: ConditionKind,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub op: ConditionOp,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl Condition {
    pub fn new(kind: ConditionKind, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            kind,
            values: values.into_iter().map(Into::into).collect(),
            op: ConditionOp::default(),
            weight: 1.0,
        }
    }

    pub fn with_op(mut self, op: ConditionOp) -> Self {
        self.op = op;
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityFormula {
    Fixed,
    PerDay,
    PerPerson,
    PerDayPerPerson,
    Conditional,
    WeatherDependent,
}

/// A formula plus clamp bounds computing the recommended unit count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuantityRule {
    #[serde(default)]
    pub condition: Option<Condition>,
    pub formula: QuantityFormula,
    #[serde(default)]
    pub min: Option<u32>,
    #[serde(default)]
    pub max: Option<u32>,
}

impl QuantityRule {
    pub fn new(formula: QuantityFormula) -> Self {
        Self { condition: None, formula, min: None, max: None }
    }

    pub fn when(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn clamped(mut self, min: u32, max: u32) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }
}

/// A reusable item definition with applicability conditions and quantity
/// rules. Immutable once loaded into a catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: EntryId,
    pub name_key: String,
    pub category: ItemCategory,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default = "default_base_quantity")]
    pub base_quantity: u32,
    #[serde(default)]
    pub essential: bool,
    pub priority: PriorityTier,
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub quantity_rules: Vec<QuantityRule>,
    #[serde(default)]
    pub alternatives: Vec<EntryId>,
    #[serde(default)]
    pub seasonality: Option<Season>,
    #[serde(default)]
    pub gender_affinity: Option<GenderAffinity>,
}

fn default_base_quantity() -> u32 {
    1
}

impl CatalogEntry {
    pub fn new(
        id: impl Into<String>,
        name_key: impl Into<String>,
        category: ItemCategory,
        priority: PriorityTier,
    ) -> Self {
        Self {
            id: EntryId::new(id),
            name_key: name_key.into(),
            category,
            tags: BTreeSet::new(),
            base_quantity: 1,
            essential: false,
            priority,
            conditions: Vec::new(),
            quantity_rules: Vec::new(),
            alternatives: Vec::new(),
            seasonality: None,
            gender_affinity: None,
        }
    }

    pub fn with_tags<S: Into<String>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_base_quantity(mut self, base_quantity: u32) -> Self {
        self.base_quantity = base_quantity.max(1);
        self
    }

    pub fn essential(mut self) -> Self {
        self.essential = true;
        self
    }

    pub fn with_conditions(mut self, conditions: impl IntoIterator<Item = Condition>) -> Self {
        self.conditions = conditions.into_iter().collect();
        self
    }

    pub fn with_quantity_rules(mut self, rules: impl IntoIterator<Item = QuantityRule>) -> Self {
        self.quantity_rules = rules.into_iter().collect();
        self
    }

    pub fn with_alternatives<S: Into<String>>(
        mut self,
        alternatives: impl IntoIterator<Item = S>,
    ) -> Self {
        self.alternatives = alternatives.into_iter().map(EntryId::new).collect();
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_deserializes_with_defaults() {
        let entry: CatalogEntry = serde_json::from_str(
            r#"{
                "id": "passport",
                "name_key": "item.passport",
                "category": "documents",
                "priority": "critical"
            }"#,
        )
        .unwrap();

        assert_eq!(entry.base_quantity, 1);
        assert!(!entry.essential);
        assert!(entry.conditions.is_empty());
        assert!(entry.alternatives.is_empty());
    }

    #[test]
    fn condition_defaults_to_full_weight_contains() {
        let condition: Condition = serde_json::from_str(
            r#"{ "kind": "activity", "values": ["hiking"] }"#,
        )
        .unwrap();

        assert_eq!(condition.op, ConditionOp::Contains);
        assert_eq!(condition.weight, 1.0);
    }
}
