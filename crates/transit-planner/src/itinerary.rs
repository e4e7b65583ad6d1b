//! Planner output: itineraries and their legs.

use transit_catalog::City;
use transit_core::{ClockTime, GeoPoint, LegMode};

// ── Endpoint ──────────────────────────────────────────────────────────────────

/// A named place a trip starts or ends at.
///
/// Names are carried through to the legs verbatim; an empty name is allowed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Endpoint {
    pub name:        String,
    pub coordinates: GeoPoint,
}

impl Endpoint {
    pub fn new(name: impl Into<String>, coordinates: GeoPoint) -> Self {
        Self { name: name.into(), coordinates }
    }
}

impl From<&City> for Endpoint {
    fn from(city: &City) -> Self {
        Self::new(city.name.clone(), city.coordinates)
    }
}

// ── Leg ───────────────────────────────────────────────────────────────────────

/// Rider-facing label of a transit line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineLabel {
    /// Line number painted on the vehicle (`"1"`, `"E1"`).
    pub number: String,
    /// CSS-style hex color used to draw the line (`"#10B981"`).
    pub color: String,
}

impl LineLabel {
    pub fn new(number: impl Into<String>, color: impl Into<String>) -> Self {
        Self { number: number.into(), color: color.into() }
    }
}

/// One walk or ride within an itinerary.
///
/// A leg begins the moment the previous one ends.  A transit leg may open
/// with `wait_minutes` at the boarding point; that wait is part of
/// `duration_minutes`, so consecutive legs chain without gaps.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    pub id:   String,
    pub mode: LegMode,

    /// Display name: `"Walk"`, `"City Bus Line 1"`.
    pub name: String,

    /// `None` for walking legs.
    pub line: Option<LineLabel>,

    pub from: Endpoint,
    pub to:   Endpoint,

    pub departure: ClockTime,
    pub arrival:   ClockTime,

    /// `arrival - departure`, wait included.
    pub duration_minutes: u32,

    /// Minutes spent at the boarding point before the vehicle leaves.
    pub wait_minutes: u32,
}

impl Leg {
    /// When the vehicle actually leaves (or the walk starts).
    #[inline]
    pub fn boarding_time(&self) -> ClockTime {
        self.departure.add_minutes(self.wait_minutes as i64)
    }

    /// Minutes in motion.
    #[inline]
    pub fn travel_minutes(&self) -> u32 {
        self.duration_minutes.saturating_sub(self.wait_minutes)
    }
}

// ── ItineraryOption ───────────────────────────────────────────────────────────

/// A complete door-to-door option shown to the rider.
///
/// `departure` equals the first leg's departure and `arrival` the last leg's
/// arrival.  `total_duration_minutes` equals the sum of the leg durations.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItineraryOption {
    pub id: String,

    pub total_duration_minutes: u32,
    pub total_distance_km:      f32,

    pub departure: ClockTime,
    pub arrival:   ClockTime,

    pub price_units:    f32,
    pub transfer_count: u32,
    pub co2_saved_kg:   f32,

    pub legs: Vec<Leg>,
}

impl ItineraryOption {
    /// Legs that ride a vehicle.
    pub fn transit_legs(&self) -> impl Iterator<Item = &Leg> {
        self.legs.iter().filter(|l| l.mode.is_transit())
    }

    /// Human-readable total duration, e.g. `"1h 5m"`.
    pub fn duration_label(&self) -> String {
        format_duration(self.total_duration_minutes)
    }
}

/// `"45 min"` below an hour, `"1h 5m"` from an hour up.
pub fn format_duration(minutes: u32) -> String {
    let (h, m) = (minutes / 60, minutes % 60);
    if h == 0 {
        format!("{m} min")
    } else {
        format!("{h}h {m}m")
    }
}
