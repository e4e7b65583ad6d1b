//! Per-vehicle output of one simulator evaluation.

use transit_core::{GeoPoint, RouteId, VehicleId};

/// Coarse crowding bucket shown on the live map.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OccupancyLevel {
    Low,
    Medium,
    High,
}

impl OccupancyLevel {
    /// Below 30 % of capacity is low, below 70 % medium, anything else high.
    pub fn classify(occupancy_count: u32, capacity: u32) -> Self {
        let count = occupancy_count as f64;
        let capacity = capacity as f64;
        if count < capacity * 0.3 {
            OccupancyLevel::Low
        } else if count < capacity * 0.7 {
            OccupancyLevel::Medium
        } else {
            OccupancyLevel::High
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OccupancyLevel::Low    => "low",
            OccupancyLevel::Medium => "medium",
            OccupancyLevel::High   => "high",
        }
    }
}

impl std::fmt::Display for OccupancyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where one vehicle is and how it is doing.
///
/// Ephemeral: built fresh on every evaluation and owned by the caller.  It
/// carries copies of the route labels it needs for display and no reference
/// back into the catalog.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleState {
    pub id:             VehicleId,
    pub route_id:       RouteId,
    pub route_name:     String,
    pub vehicle_number: String,

    /// Interpolated coordinates between `current_stop` and `next_stop`.
    pub position: GeoPoint,

    pub current_stop: String,
    pub next_stop:    String,

    /// Always at least 1.
    pub minutes_to_next_stop: u32,

    /// Minutes since route start, in `[0, duration)`.
    pub route_offset_minutes: u32,

    /// Fraction of the current segment covered, in `[0, 1]`.
    pub segment_progress: f32,

    /// Standing at `current_stop` (then `next_stop` names the same stop).
    pub at_stop: bool,

    pub occupancy_count: u32,
    pub occupancy_level: OccupancyLevel,
    pub capacity:        u32,
    pub delay_minutes:   u32,
}

impl VehicleState {
    pub fn is_delayed(&self) -> bool {
        self.delay_minutes > 0
    }
}
