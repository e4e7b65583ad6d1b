//! Route and stop definitions.

use transit_core::{GeoPoint, RouteId, RouteKind};

use crate::{CatalogError, CatalogResult, ScheduleEntry};

// ── Stop ──────────────────────────────────────────────────────────────────────

/// One stop on a route.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    pub name: String,
    pub coordinates: GeoPoint,
    /// Minutes from the route's nominal start to this stop.
    pub time_offset_minutes: u32,
}

impl Stop {
    pub fn new(name: impl Into<String>, coordinates: GeoPoint, time_offset_minutes: u32) -> Self {
        Self { name: name.into(), coordinates, time_offset_minutes }
    }
}

// ── RouteDefinition ───────────────────────────────────────────────────────────

/// A fixed, named transit line.
///
/// Construct freely, then pass through [`RouteCatalog::new`][crate::RouteCatalog::new]
/// (or call [`validate`][Self::validate]) before simulating: the simulator
/// assumes every invariant listed in the crate docs holds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteDefinition {
    pub id:   RouteId,
    pub name: String,
    pub kind: RouteKind,

    /// Stops sorted by `time_offset_minutes`.
    pub stops: Vec<Stop>,

    /// Departure patterns; only `schedule[0]` drives the simulator.
    pub schedule: Vec<ScheduleEntry>,

    /// End-to-end trip time; equals the last stop's offset.
    pub duration_minutes: u32,

    /// Single-ride fare, in the operator's currency units.
    pub price_units: f32,

    /// Public line/vehicle number shown to riders (`"103"`, `"1"`).
    pub vehicle_number: String,

    /// Seats plus standing places per vehicle.
    pub capacity: u32,
}

impl RouteDefinition {
    /// Check every catalog-integrity rule.
    pub fn validate(&self) -> CatalogResult<()> {
        if self.id.is_empty() {
            return Err(CatalogError::EmptyRouteId);
        }
        let route = || self.id.clone();

        if self.stops.len() < 2 {
            return Err(CatalogError::TooFewStops { route: route(), count: self.stops.len() });
        }

        let first = self.stops[0].time_offset_minutes;
        if first != 0 {
            return Err(CatalogError::FirstOffsetNotZero { route: route(), offset: first });
        }

        for (index, pair) in self.stops.windows(2).enumerate() {
            let (prev, offset) = (pair[0].time_offset_minutes, pair[1].time_offset_minutes);
            if offset < prev {
                return Err(CatalogError::NonMonotonicOffsets {
                    route: route(),
                    index: index + 1,
                    prev,
                    offset,
                });
            }
        }

        if self.duration_minutes == 0 {
            return Err(CatalogError::ZeroDuration(route()));
        }

        let last_offset = self.last_stop().time_offset_minutes;
        if last_offset != self.duration_minutes {
            return Err(CatalogError::DurationMismatch {
                route: route(),
                last_offset,
                duration: self.duration_minutes,
            });
        }

        if self.capacity == 0 {
            return Err(CatalogError::ZeroCapacity(route()));
        }

        if self.schedule.is_empty() {
            return Err(CatalogError::EmptySchedule(route()));
        }

        Ok(())
    }

    /// The schedule entry the simulator uses, if any.
    #[inline]
    pub fn primary_schedule(&self) -> Option<&ScheduleEntry> {
        self.schedule.first()
    }

    pub fn first_stop(&self) -> &Stop {
        &self.stops[0]
    }

    pub fn last_stop(&self) -> &Stop {
        &self.stops[self.stops.len() - 1]
    }

    /// Straight-line length of the stop polyline, in kilometres.
    pub fn path_length_km(&self) -> f32 {
        self.stops
            .windows(2)
            .map(|w| w[0].coordinates.distance_m(w[1].coordinates))
            .sum::<f32>()
            / 1000.0
    }
}
