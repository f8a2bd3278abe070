//! Derived, read-only trip context.

use std::collections::BTreeSet;

use chrono::{Datelike, Duration, Weekday};

use crate::domain::trip::{
    Accommodation, Climate, Season, TemperatureBucket, TransportMode, TripSnapshot,
};

const OUTDOOR_ACTIVITIES: &[&str] =
    &["hiking", "camping", "beach", "skiing", "cycling", "climbing", "fishing", "surfing"];

const SPECIAL_EQUIPMENT_ACTIVITIES: &[&str] =
    &["skiing", "diving", "climbing", "golf", "surfing", "photography"];

const SHORT_TRIP_DAYS: i64 = 3;
const LONG_TRIP_DAYS: i64 = 14;

/// Weather sub-context. Carried as an `Option` on the trip context so its
/// absence degrades temperature matching and weather-dependent quantities
/// rather than erroring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeatherContext {
    pub bucket: TemperatureBucket,
    pub season: Season,
}

/// Snapshot of computed trip characteristics, built once per generation
/// call and discarded afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TripContext {
    pub duration_days: i64,
    pub weekend: bool,
    pub international: bool,
    pub short_trip: bool,
    pub long_trip: bool,
    pub season: Season,
    pub business_focused: bool,
    pub outdoor_activity: bool,
    pub formal_wear_required: bool,
    pub special_equipment_required: bool,
    pub party_size: u32,
    pub transports: BTreeSet<TransportMode>,
    pub accommodation: Accommodation,
    pub activities: BTreeSet<String>,
    pub climate: Climate,
    pub weather: Option<WeatherContext>,
}

impl TripContext {
    /// Pure mapping from raw trip attributes. Out-of-range inputs are
    /// normalized here (duration and party size floored at 1), never
    /// rejected; downstream stages rely on clamping instead.
    pub fn from_snapshot(snapshot: &TripSnapshot) -> Self {
        let duration_days = (snapshot.end - snapshot.start).num_days().max(1);
        let short_trip = duration_days <= SHORT_TRIP_DAYS;
        let long_trip = duration_days >= LONG_TRIP_DAYS;
        let season = Season::from_month(snapshot.start.month());

        let activities: BTreeSet<String> =
            snapshot.activities.iter().map(|activity| activity.to_ascii_lowercase()).collect();

        let business_focused = snapshot.business
            || activities.contains("business")
            || activities.contains("work");
        let outdoor_activity =
            activities.iter().any(|activity| OUTDOOR_ACTIVITIES.contains(&activity.as_str()));
        let formal_wear_required = business_focused
            || activities.contains("formal")
            || activities.contains("wedding");
        let special_equipment_required = activities
            .iter()
            .any(|activity| SPECIAL_EQUIPMENT_ACTIVITIES.contains(&activity.as_str()));

        Self {
            duration_days,
            weekend: short_trip && touches_weekend(snapshot),
            international: snapshot.destination.contains(','),
            short_trip,
            long_trip,
            season,
            business_focused,
            outdoor_activity,
            formal_wear_required,
            special_equipment_required,
            party_size: snapshot.party_size.max(1),
            transports: snapshot.transports.clone(),
            accommodation: snapshot.accommodation,
            activities,
            climate: snapshot.climate,
            weather: Some(WeatherContext { bucket: snapshot.climate.bucket(), season }),
        }
    }
}

fn touches_weekend(snapshot: &TripSnapshot) -> bool {
    let mut date = snapshot.start;
    let last = snapshot.end.max(snapshot.start);
    loop {
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            return true;
        }
        if date >= last {
            return false;
        }
        date += Duration::days(1);
    }
}
