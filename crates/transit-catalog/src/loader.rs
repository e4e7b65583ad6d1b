//! CSV catalog loader.
//!
//! # CSV format
//!
//! A catalog is three files.  Rows of `stops.csv` and `schedules.csv` are
//! grouped by `route_id` and kept in file order.
//!
//! ```csv
//! # routes.csv
//! route_id,name,kind,duration_minutes,price_units,vehicle_number,capacity
//! bus-3,Pristina - Mitrovica,intercity,40,2.5,103,45
//!
//! # stops.csv
//! route_id,stop_name,lat,lon,time_offset_minutes
//! bus-3,Pristina Bus Station,42.6629,21.1655,0
//! bus-3,Vushtrri,42.8273,20.9675,20
//! bus-3,Mitrovica Bus Station,42.8914,20.8660,40
//!
//! # schedules.csv
//! route_id,first_departure,frequency
//! bus-3,06:15,Every 30 mins until 22:15
//! bus-3,06:45,Every 30 mins until 22:45
//! ```
//!
//! `kind` is `city` or `intercity`.  `frequency` is the free-text timetable
//! description; see [`ScheduleEntry::from_description`].
//!
//! Stops or schedules naming a route absent from `routes.csv` are an error,
//! as is a `route_id` listed twice in `routes.csv`.
//! Every route is validated before the catalog is returned.

use std::io::Read;
use std::path::Path;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;

use transit_core::{ClockTime, GeoPoint, RouteId, RouteKind};

use crate::{CatalogError, CatalogResult, RouteCatalog, RouteDefinition, ScheduleEntry, Stop};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RouteRecord {
    route_id:         String,
    name:             String,
    kind:             String,
    duration_minutes: u32,
    price_units:      f32,
    vehicle_number:   String,
    capacity:         u32,
}

#[derive(Deserialize)]
struct StopRecord {
    route_id:            String,
    stop_name:           String,
    lat:                 f32,
    lon:                 f32,
    time_offset_minutes: u32,
}

#[derive(Deserialize)]
struct ScheduleRecord {
    route_id:        String,
    first_departure: String,
    frequency:       String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load `routes.csv`, `stops.csv`, and `schedules.csv` from `dir`.
pub fn load_catalog_dir(dir: &Path) -> CatalogResult<RouteCatalog> {
    let routes    = std::fs::File::open(dir.join("routes.csv"))?;
    let stops     = std::fs::File::open(dir.join("stops.csv"))?;
    let schedules = std::fs::File::open(dir.join("schedules.csv"))?;
    let catalog = load_catalog_readers(routes, stops, schedules)?;
    log::info!("loaded {} route(s) from {}", catalog.len(), dir.display());
    Ok(catalog)
}

/// Like [`load_catalog_dir`] but accepts any `Read` sources.
///
/// Useful for testing (pass `std::io::Cursor`s) or for catalogs embedded in a
/// binary.
pub fn load_catalog_readers<R1: Read, R2: Read, R3: Read>(
    routes:    R1,
    stops:     R2,
    schedules: R3,
) -> CatalogResult<RouteCatalog> {
    // ── Parse stops and schedules, grouped by route ───────────────────────
    let mut stops_by_route: FxHashMap<String, Vec<Stop>> = FxHashMap::default();
    for result in csv::Reader::from_reader(stops).deserialize::<StopRecord>() {
        let row = result.map_err(|e| CatalogError::Parse(e.to_string()))?;
        stops_by_route.entry(row.route_id).or_default().push(Stop {
            name:                row.stop_name,
            coordinates:         GeoPoint::new(row.lat, row.lon),
            time_offset_minutes: row.time_offset_minutes,
        });
    }

    let mut schedules_by_route: FxHashMap<String, Vec<ScheduleEntry>> = FxHashMap::default();
    for result in csv::Reader::from_reader(schedules).deserialize::<ScheduleRecord>() {
        let row = result.map_err(|e| CatalogError::Parse(e.to_string()))?;
        let departure: ClockTime = row.first_departure.parse()?;
        schedules_by_route
            .entry(row.route_id)
            .or_default()
            .push(ScheduleEntry::from_description(departure, &row.frequency));
    }

    // ── Assemble one RouteDefinition per routes.csv row ───────────────────
    let mut routes_out = Vec::new();
    let mut seen: FxHashSet<String> = FxHashSet::default();
    for result in csv::Reader::from_reader(routes).deserialize::<RouteRecord>() {
        let row = result.map_err(|e| CatalogError::Parse(e.to_string()))?;
        if !seen.insert(row.route_id.clone()) {
            return Err(CatalogError::DuplicateRoute(RouteId::from(row.route_id)));
        }
        let kind = RouteKind::parse(&row.kind).ok_or_else(|| {
            CatalogError::Parse(format!(
                "route {}: invalid kind {:?}: expected \"city\" or \"intercity\"",
                row.route_id, row.kind
            ))
        })?;

        routes_out.push(RouteDefinition {
            stops:            stops_by_route.remove(&row.route_id).unwrap_or_default(),
            schedule:         schedules_by_route.remove(&row.route_id).unwrap_or_default(),
            id:               RouteId::from(row.route_id),
            name:             row.name,
            kind,
            duration_minutes: row.duration_minutes,
            price_units:      row.price_units,
            vehicle_number:   row.vehicle_number,
            capacity:         row.capacity,
        });
    }

    // Anything left over names a route that routes.csv never declared.
    if let Some(route) = stops_by_route.into_keys().next() {
        return Err(CatalogError::UnknownRoute { route: RouteId::from(route), what: "stops.csv" });
    }
    if let Some(route) = schedules_by_route.into_keys().next() {
        return Err(CatalogError::UnknownRoute { route: RouteId::from(route), what: "schedules.csv" });
    }

    RouteCatalog::new(routes_out)
}
