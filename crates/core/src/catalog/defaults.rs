//! Embedded fallback catalog.
//!
//! Used whenever an external dataset cannot be loaded, so the engine never
//! runs against zero entries. Covers every priority tier and the core
//! categories (documents, clothing, toiletries, electronics).

use crate::domain::item::{ItemCategory, PriorityTier};

use super::entry::{
    CatalogEntry, Condition, ConditionKind, ConditionOp, QuantityFormula, QuantityRule,
};

pub(crate) fn entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(
            "travel_documents",
            "item.travel_documents",
            ItemCategory::Documents,
            PriorityTier::Critical,
        )
        .essential()
        .with_tags(["documents", "travel"])
        .with_quantity_rules([QuantityRule::new(QuantityFormula::Fixed)]),
        CatalogEntry::new("phone", "item.phone", ItemCategory::Electronics, PriorityTier::Essential)
            .essential()
            .with_tags(["electronics", "needs_charger"])
            .with_quantity_rules([QuantityRule::new(QuantityFormula::Fixed)]),
        CatalogEntry::new(
            "phone_charger",
            "item.phone_charger",
            ItemCategory::Electronics,
            PriorityTier::Essential,
        )
        .essential()
        .with_tags(["electronics", "charger"])
        .with_quantity_rules([QuantityRule::new(QuantityFormula::Fixed)]),
        CatalogEntry::new(
            "power_bank",
            "item.power_bank",
            ItemCategory::Electronics,
            PriorityTier::Optional,
        )
        .with_tags(["electronics", "charger"])
        .with_conditions([Condition::new(ConditionKind::Duration, ["7"])
            .with_op(ConditionOp::GreaterThan)
            .with_weight(0.8)])
        .with_quantity_rules([QuantityRule::new(QuantityFormula::Conditional)]),
        CatalogEntry::new(
            "underwear",
            "item.underwear",
            ItemCategory::Clothing,
            PriorityTier::Essential,
        )
        .essential()
        .with_tags(["underwear"])
        .with_quantity_rules([QuantityRule::new(QuantityFormula::Conditional)]),
        CatalogEntry::new("socks", "item.socks", ItemCategory::Clothing, PriorityTier::Essential)
            .essential()
            .with_tags(["socks"])
            .with_quantity_rules([QuantityRule::new(QuantityFormula::Conditional)]),
        CatalogEntry::new(
            "tshirts",
            "item.tshirts",
            ItemCategory::Clothing,
            PriorityTier::Recommended,
        )
        .with_tags(["shirt", "top"])
        .with_quantity_rules([QuantityRule::new(QuantityFormula::Conditional)]),
        CatalogEntry::new(
            "trousers",
            "item.trousers",
            ItemCategory::Clothing,
            PriorityTier::Recommended,
        )
        .with_tags(["pants", "bottom"])
        .with_quantity_rules([QuantityRule::new(QuantityFormula::Conditional)]),
        CatalogEntry::new(
            "warm_jacket",
            "item.warm_jacket",
            ItemCategory::Clothing,
            PriorityTier::Recommended,
        )
        .with_tags(["outerwear", "cold", "winter"])
        .with_conditions([
            Condition::new(ConditionKind::Climate, ["cold"]).with_op(ConditionOp::Equals),
            Condition::new(ConditionKind::Temperature, ["cold"])
                .with_op(ConditionOp::Equals)
                .with_weight(0.8),
        ])
        .with_quantity_rules([QuantityRule::new(QuantityFormula::Conditional)]),
        CatalogEntry::new(
            "toothbrush",
            "item.toothbrush",
            ItemCategory::Toiletries,
            PriorityTier::Essential,
        )
        .essential()
        .with_tags(["hygiene"])
        .with_quantity_rules([QuantityRule::new(QuantityFormula::PerPerson)]),
        CatalogEntry::new(
            "toiletry_kit",
            "item.toiletry_kit",
            ItemCategory::Toiletries,
            PriorityTier::Recommended,
        )
        .with_tags(["hygiene"])
        .with_quantity_rules([QuantityRule::new(QuantityFormula::Conditional)]),
        CatalogEntry::new(
            "sunscreen",
            "item.sunscreen",
            ItemCategory::Toiletries,
            PriorityTier::Recommended,
        )
        .with_tags(["sun", "cooling"])
        .with_conditions([
            Condition::new(ConditionKind::Climate, ["hot"]).with_op(ConditionOp::Equals),
            Condition::new(ConditionKind::Temperature, ["hot"])
                .with_op(ConditionOp::Equals)
                .with_weight(0.6),
        ])
        .with_quantity_rules([QuantityRule::new(QuantityFormula::WeatherDependent)]),
        CatalogEntry::new(
            "hiking_boots",
            "item.hiking_boots",
            ItemCategory::Gear,
            PriorityTier::Essential,
        )
        .essential()
        .with_tags(["hiking", "outdoor", "footwear"])
        .with_conditions([Condition::new(ConditionKind::Activity, ["hiking"])])
        .with_quantity_rules([QuantityRule::new(QuantityFormula::Fixed)])
        .with_alternatives(["trail_runners"]),
        CatalogEntry::new(
            "trail_runners",
            "item.trail_runners",
            ItemCategory::Gear,
            PriorityTier::Optional,
        )
        .with_tags(["hiking", "outdoor", "footwear"])
        .with_conditions([Condition::new(ConditionKind::Activity, ["hiking"]).with_weight(0.7)])
        .with_quantity_rules([QuantityRule::new(QuantityFormula::Fixed)])
        .with_alternatives(["hiking_boots"]),
        CatalogEntry::new(
            "business_attire",
            "item.business_attire",
            ItemCategory::Clothing,
            PriorityTier::Situational,
        )
        .with_tags(["formal", "business"])
        .with_conditions([
            Condition::new(ConditionKind::BusinessTrip, ["true"])
                .with_op(ConditionOp::Equals)
                .with_weight(0.9),
            Condition::new(ConditionKind::Activity, ["business"]).with_weight(0.7),
        ])
        .with_quantity_rules([QuantityRule::new(QuantityFormula::Fixed)]),
        CatalogEntry::new(
            "sleeping_bag",
            "item.sleeping_bag",
            ItemCategory::Gear,
            PriorityTier::Situational,
        )
        .with_tags(["camping", "outdoor"])
        .with_conditions([
            Condition::new(ConditionKind::Accommodation, ["camping"]).with_op(ConditionOp::Equals),
        ])
        .with_quantity_rules([QuantityRule::new(QuantityFormula::PerPerson)]),
        CatalogEntry::new(
            "first_aid_kit",
            "item.first_aid_kit",
            ItemCategory::Health,
            PriorityTier::Recommended,
        )
        .with_tags(["outdoor", "safety"])
        .with_conditions([
            Condition::new(ConditionKind::Activity, ["hiking", "camping", "climbing"])
                .with_weight(0.8),
            Condition::new(ConditionKind::Accommodation, ["camping"])
                .with_op(ConditionOp::Equals)
                .with_weight(0.5),
        ])
        .with_quantity_rules([QuantityRule::new(QuantityFormula::Fixed)]),
        CatalogEntry::new(
            "travel_pillow",
            "item.travel_pillow",
            ItemCategory::Accessories,
            PriorityTier::Optional,
        )
        .with_tags(["comfort", "travel"])
        .with_conditions([
            Condition::new(ConditionKind::Transport, ["plane"]).with_weight(0.6),
            Condition::new(ConditionKind::Duration, ["5"])
                .with_op(ConditionOp::GreaterThan)
                .with_weight(0.4),
        ])
        .with_quantity_rules([QuantityRule::new(QuantityFormula::Fixed)]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn fallback_spans_every_priority_tier() {
        let tiers: BTreeSet<_> = entries().iter().map(|entry| entry.priority).collect();
        assert_eq!(tiers.len(), 5);
    }

    #[test]
    fn fallback_covers_core_categories() {
        let categories: BTreeSet<_> = entries().iter().map(|entry| entry.category).collect();
        for required in [
            ItemCategory::Documents,
            ItemCategory::Clothing,
            ItemCategory::Toiletries,
            ItemCategory::Electronics,
        ] {
            assert!(categories.contains(&required), "missing category {required:?}");
        }
        assert!(entries().len() >= 6);
    }

    #[test]
    fn fallback_ids_are_unique() {
        let mut seen = BTreeSet::new();
        for entry in entries() {
            assert!(seen.insert(entry.id.clone()), "duplicate id {:?}", entry.id);
        }
    }
}
