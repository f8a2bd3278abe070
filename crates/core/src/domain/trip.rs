use std::collections::BTreeSet;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::UnknownVariant;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Plane,
    Car,
    Train,
    Bus,
    Boat,
    Bicycle,
    OnFoot,
}

impl TransportMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plane => "plane",
            Self::Car => "car",
            Self::Train => "train",
            Self::Bus => "bus",
            Self::Boat => "boat",
            Self::Bicycle => "bicycle",
            Self::OnFoot => "on_foot",
        }
    }
}

impl FromStr for TransportMode {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "plane" => Ok(Self::Plane),
            "car" => Ok(Self::Car),
            "train" => Ok(Self::Train),
            "bus" => Ok(Self::Bus),
            "boat" => Ok(Self::Boat),
            "bicycle" => Ok(Self::Bicycle),
            "on_foot" | "foot" | "walking" => Ok(Self::OnFoot),
            other => Err(UnknownVariant::new("transport mode", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accommodation {
    Hotel,
    Hostel,
    Apartment,
    Camping,
    FamilyFriends,
    Other,
}

impl Accommodation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hotel => "hotel",
            Self::Hostel => "hostel",
            Self::Apartment => "apartment",
            Self::Camping => "camping",
            Self::FamilyFriends => "family_friends",
            Self::Other => "other",
        }
    }
}

impl FromStr for Accommodation {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "hotel" => Ok(Self::Hotel),
            "hostel" => Ok(Self::Hostel),
            "apartment" => Ok(Self::Apartment),
            "camping" => Ok(Self::Camping),
            "family_friends" | "family" | "friends" => Ok(Self::FamilyFriends),
            "other" => Ok(Self::Other),
            other => Err(UnknownVariant::new("accommodation", other)),
        }
    }
}

/// Climate value supplied with the trip, as selected by the traveller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Climate {
    Hot,
    Warm,
    Moderate,
    Cool,
    Cold,
    Freezing,
}

impl Climate {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Warm => "warm",
            Self::Moderate => "moderate",
            Self::Cool => "cool",
            Self::Cold => "cold",
            Self::Freezing => "freezing",
        }
    }

    /// Fixed mapping to the derived temperature bucket. Cold and freezing
    /// collapse into the same bucket.
    pub fn bucket(&self) -> TemperatureBucket {
        match self {
            Self::Hot => TemperatureBucket::Hot,
            Self::Warm => TemperatureBucket::Warm,
            Self::Moderate => TemperatureBucket::Mild,
            Self::Cool => TemperatureBucket::Cool,
            Self::Cold | Self::Freezing => TemperatureBucket::Cold,
        }
    }
}

impl FromStr for Climate {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "hot" => Ok(Self::Hot),
            "warm" => Ok(Self::Warm),
            "moderate" => Ok(Self::Moderate),
            "cool" => Ok(Self::Cool),
            "cold" => Ok(Self::Cold),
            "freezing" => Ok(Self::Freezing),
            other => Err(UnknownVariant::new("climate", other)),
        }
    }
}

/// Derived temperature bucket used by temperature conditions and
/// weather-dependent quantity rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureBucket {
    Hot,
    Warm,
    Mild,
    Cool,
    Cold,
}

impl TemperatureBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Warm => "warm",
            Self::Mild => "mild",
            Self::Cool => "cool",
            Self::Cold => "cold",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    /// Month bucket: Dec-Feb winter, Mar-May spring, Jun-Aug summer,
    /// Sep-Nov autumn.
    pub fn from_month(month: u32) -> Self {
        match month {
            12 | 1 | 2 => Self::Winter,
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            _ => Self::Autumn,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Winter => "winter",
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Autumn => "autumn",
        }
    }
}

/// Raw trip attributes handed to the engine by the owning application.
///
/// The engine only normalizes these in the context builder; whatever stores
/// or edits trips is out of scope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripSnapshot {
    pub destination: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(default)]
    pub transports: BTreeSet<TransportMode>,
    pub accommodation: Accommodation,
    #[serde(default)]
    pub activities: BTreeSet<String>,
    #[serde(default)]
    pub business: bool,
    pub party_size: u32,
    pub climate: Climate,
}

impl TripSnapshot {
    pub fn new(destination: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            destination: destination.into(),
            start,
            end,
            transports: BTreeSet::new(),
            accommodation: Accommodation::Hotel,
            activities: BTreeSet::new(),
            business: false,
            party_size: 1,
            climate: Climate::Moderate,
        }
    }

    pub fn with_transports(mut self, transports: impl IntoIterator<Item = TransportMode>) -> Self {
        self.transports = transports.into_iter().collect();
        self
    }

    pub fn with_accommodation(mut self, accommodation: Accommodation) -> Self {
        self.accommodation = accommodation;
        self
    }

    pub fn with_activities<S: Into<String>>(
        mut self,
        activities: impl IntoIterator<Item = S>,
    ) -> Self {
        self.activities = activities.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_business(mut self, business: bool) -> Self {
        self.business = business;
        self
    }

    pub fn with_party_size(mut self, party_size: u32) -> Self {
        self.party_size = party_size;
        self
    }

    pub fn with_climate(mut self, climate: Climate) -> Self {
        self.climate = climate;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn climate_buckets_collapse_cold_and_freezing() {
        assert_eq!(Climate::Cold.bucket(), TemperatureBucket::Cold);
        assert_eq!(Climate::Freezing.bucket(), TemperatureBucket::Cold);
        assert_eq!(Climate::Moderate.bucket(), TemperatureBucket::Mild);
    }

    #[test]
    fn season_month_buckets() {
        assert_eq!(Season::from_month(12), Season::Winter);
        assert_eq!(Season::from_month(2), Season::Winter);
        assert_eq!(Season::from_month(5), Season::Spring);
        assert_eq!(Season::from_month(8), Season::Summer);
        assert_eq!(Season::from_month(11), Season::Autumn);
    }

    #[test]
    fn transport_mode_parses_aliases() {
        assert_eq!("plane".parse::<TransportMode>().unwrap(), TransportMode::Plane);
        assert_eq!("walking".parse::<TransportMode>().unwrap(), TransportMode::OnFoot);
        assert!("teleport".parse::<TransportMode>().is_err());
    }
}
