//! Catalog-wide and per-route vehicle evaluation.

use transit_catalog::{RouteCatalog, RouteDefinition};
use transit_core::{ClockTime, RouteIndex, RouteRng, VehicleId};

use crate::segment::{locate_segment, minutes_to_next_stop, normalize_offset, vehicle_count};
use crate::{OccupancyLevel, TelemetrySource, VehicleState};

/// Derive every vehicle in service on `routes` at `now`.
///
/// Routes are evaluated in slice order and vehicles within a route in ordinal
/// order, drawing telemetry from `telemetry` in that same order; a seeded
/// source therefore reproduces the output exactly.
///
/// Routes that cannot be placed on a timeline (no stops, no schedule, zero
/// duration) contribute no vehicles.  Those routes never survive
/// [`RouteCatalog::new`]; this only matters for hand-built slices.
pub fn compute_active_vehicles<T>(
    routes:    &[RouteDefinition],
    now:       ClockTime,
    telemetry: &mut T,
) -> Vec<VehicleState>
where
    T: TelemetrySource + ?Sized,
{
    routes
        .iter()
        .flat_map(|route| simulate_route(route, now, &mut *telemetry))
        .collect()
}

/// Like [`compute_active_vehicles`], but each route draws telemetry from its
/// own [`RouteRng`] seeded from `(seed, route index)`.
///
/// With the `parallel` feature routes are evaluated on Rayon's pool; the
/// output (order and values) is identical either way.
pub fn compute_active_vehicles_seeded(
    catalog: &RouteCatalog,
    now:     ClockTime,
    seed:    u64,
) -> Vec<VehicleState> {
    let evaluate = |(i, route): (usize, &RouteDefinition)| {
        let mut rng = RouteRng::new(seed, RouteIndex(i as u32));
        simulate_route(route, now, &mut rng)
    };

    #[cfg(feature = "parallel")]
    let per_route: Vec<Vec<VehicleState>> = {
        use rayon::prelude::*;
        catalog.routes().par_iter().enumerate().map(evaluate).collect()
    };

    #[cfg(not(feature = "parallel"))]
    let per_route: Vec<Vec<VehicleState>> =
        catalog.routes().iter().enumerate().map(evaluate).collect();

    per_route.into_iter().flatten().collect()
}

/// All vehicles of one route at `now`.
pub fn simulate_route<T>(route: &RouteDefinition, now: ClockTime, telemetry: &mut T) -> Vec<VehicleState>
where
    T: TelemetrySource + ?Sized,
{
    // Only the first schedule entry drives positions.
    let Some(schedule) = route.primary_schedule() else {
        log::warn!("route {} has no schedule; skipping", route.id);
        return Vec::new();
    };
    if route.stops.is_empty() || route.duration_minutes == 0 {
        log::warn!("route {} has no usable stop timeline; skipping", route.id);
        return Vec::new();
    }

    let headway = schedule.headway_minutes();
    let since = now.minutes_since(schedule.first_departure);
    let count = vehicle_count(route.duration_minutes, headway);

    let mut out = Vec::with_capacity(count as usize);
    for ordinal in 0..count {
        let offset = normalize_offset(since, ordinal, headway, route.duration_minutes);
        let Some(pos) = locate_segment(&route.stops, offset) else {
            continue;
        };

        let current = &route.stops[pos.current];
        let next = &route.stops[pos.next];
        let reading = telemetry.sample(route, ordinal);

        out.push(VehicleState {
            id:                   VehicleId::new(route.id.clone(), ordinal),
            route_id:             route.id.clone(),
            route_name:           route.name.clone(),
            vehicle_number:       route.vehicle_number.clone(),
            position:             current.coordinates.lerp(next.coordinates, pos.progress),
            current_stop:         current.name.clone(),
            next_stop:            next.name.clone(),
            minutes_to_next_stop: minutes_to_next_stop(&route.stops, pos, offset),
            route_offset_minutes: offset,
            segment_progress:     pos.progress,
            at_stop:              pos.is_at_stop(),
            occupancy_count:      reading.occupancy_count,
            occupancy_level:      OccupancyLevel::classify(reading.occupancy_count, route.capacity),
            capacity:             route.capacity,
            delay_minutes:        reading.delay_minutes,
        });
    }
    out
}
