use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::UnknownVariant;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Documents,
    Clothing,
    Toiletries,
    Electronics,
    Health,
    Accessories,
    Gear,
    Other,
}

impl ItemCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Documents => "documents",
            Self::Clothing => "clothing",
            Self::Toiletries => "toiletries",
            Self::Electronics => "electronics",
            Self::Health => "health",
            Self::Accessories => "accessories",
            Self::Gear => "gear",
            Self::Other => "other",
        }
    }
}

impl FromStr for ItemCategory {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "documents" => Ok(Self::Documents),
            "clothing" => Ok(Self::Clothing),
            "toiletries" => Ok(Self::Toiletries),
            "electronics" => Ok(Self::Electronics),
            "health" => Ok(Self::Health),
            "accessories" => Ok(Self::Accessories),
            "gear" => Ok(Self::Gear),
            "other" => Ok(Self::Other),
            other => Err(UnknownVariant::new("item category", other)),
        }
    }
}

/// Five-level importance ranking with fixed numeric weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityTier {
    Critical,
    Essential,
    Recommended,
    Optional,
    Situational,
}

impl PriorityTier {
    /// Base weight a tier contributes to an entry's score.
    pub fn weight(&self) -> f64 {
        match self {
            Self::Critical => 1.0,
            Self::Essential => 0.9,
            Self::Recommended => 0.7,
            Self::Optional => 0.5,
            Self::Situational => 0.3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Essential => "essential",
            Self::Recommended => "recommended",
            Self::Optional => "optional",
            Self::Situational => "situational",
        }
    }
}

impl FromStr for PriorityTier {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "critical" => Ok(Self::Critical),
            "essential" => Ok(Self::Essential),
            "recommended" => Ok(Self::Recommended),
            "optional" => Ok(Self::Optional),
            "situational" => Ok(Self::Situational),
            other => Err(UnknownVariant::new("priority tier", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenderAffinity {
    Female,
    Male,
}

/// A concrete packable item produced by the output mapper.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackItem {
    pub name: String,
    pub category: ItemCategory,
    pub essential: bool,
    pub quantity: u32,
    pub packed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_weights_are_fixed_and_monotone() {
        assert_eq!(PriorityTier::Critical.weight(), 1.0);
        assert_eq!(PriorityTier::Situational.weight(), 0.3);

        let tiers = [
            PriorityTier::Critical,
            PriorityTier::Essential,
            PriorityTier::Recommended,
            PriorityTier::Optional,
            PriorityTier::Situational,
        ];
        for pair in tiers.windows(2) {
            assert!(pair[0].weight() > pair[1].weight());
        }
    }

    #[test]
    fn category_round_trips_through_str() {
        assert_eq!("clothing".parse::<ItemCategory>().unwrap(), ItemCategory::Clothing);
        assert_eq!(ItemCategory::Clothing.as_str(), "clothing");
        assert!("weapons".parse::<ItemCategory>().is_err());
    }
}
