//! Unit tests for transit-catalog.

use transit_core::{ClockTime, GeoPoint, RouteId, RouteKind};

use crate::{CatalogError, RouteDefinition, ScheduleEntry, Stop};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn t(s: &str) -> ClockTime {
    s.parse().unwrap()
}

/// Three-stop line shaped like bus-3 (0 / 20 / 40 min).
fn three_stop_route() -> RouteDefinition {
    RouteDefinition {
        id:               RouteId::from("r"),
        name:             "Test line".into(),
        kind:             RouteKind::Intercity,
        stops: vec![
            Stop::new("A", GeoPoint::new(0.0, 0.0), 0),
            Stop::new("B", GeoPoint::new(0.1, 0.0), 20),
            Stop::new("C", GeoPoint::new(0.2, 0.0), 40),
        ],
        schedule:         vec![ScheduleEntry::new(t("06:15"), 30, None)],
        duration_minutes: 40,
        price_units:      2.5,
        vehicle_number:   "103".into(),
        capacity:         45,
    }
}

const ROUTES_CSV: &str = "\
route_id,name,kind,duration_minutes,price_units,vehicle_number,capacity
bus-3,Pristina - Mitrovica,intercity,40,2.5,103,45
city-bus-2,Line 2,city,15,0.5,2,30
";

const STOPS_CSV: &str = "\
route_id,stop_name,lat,lon,time_offset_minutes
bus-3,Pristina Bus Station,42.6629,21.1655,0
city-bus-2,Main Bus Station,42.6607,21.1568,0
bus-3,Vushtrri,42.8273,20.9675,20
city-bus-2,Veternik,42.6433,21.1367,15
bus-3,Mitrovica Bus Station,42.8914,20.8660,40
";

const SCHEDULES_CSV: &str = "\
route_id,first_departure,frequency
bus-3,06:15,Every 30 mins until 22:15
bus-3,06:45,Every 30 mins until 22:45
city-bus-2,05:35,whenever the driver feels like it
";

// ── Frequency parsing ─────────────────────────────────────────────────────────

#[cfg(test)]
mod frequency {
    use super::*;
    use crate::{DEFAULT_FREQUENCY_MINUTES, parse_frequency_minutes};

    #[test]
    fn minutes_forms() {
        assert_eq!(parse_frequency_minutes("Every 30 mins until 22:00"), Some(30));
        assert_eq!(parse_frequency_minutes("Every 20 minutes"), Some(20));
        assert_eq!(parse_frequency_minutes("every 10 min"), Some(10));
    }

    #[test]
    fn hour_forms() {
        assert_eq!(parse_frequency_minutes("Hourly"), Some(60));
        assert_eq!(parse_frequency_minutes("Every 2 hours"), Some(120));
        assert_eq!(parse_frequency_minutes("Every 1 hour"), Some(60));
    }

    #[test]
    fn unreadable_or_zero_is_none() {
        assert_eq!(parse_frequency_minutes(""), None);
        assert_eq!(parse_frequency_minutes("Frequent service"), None);
        assert_eq!(parse_frequency_minutes("Every 0 mins"), None);
    }

    #[test]
    fn from_description_reads_service_end() {
        let e = ScheduleEntry::from_description(t("06:00"), "Every 30 mins until 22:00");
        assert_eq!(e.first_departure, t("06:00"));
        assert_eq!(e.frequency_minutes, 30);
        assert_eq!(e.service_end, Some(t("22:00")));
    }

    #[test]
    fn from_description_defaults_frequency() {
        let e = ScheduleEntry::from_description(t("06:00"), "see website");
        assert_eq!(e.frequency_minutes, DEFAULT_FREQUENCY_MINUTES);
        assert_eq!(e.service_end, None);
    }

    #[test]
    fn zero_headway_replaced() {
        let e = ScheduleEntry::new(t("06:00"), 0, None);
        assert_eq!(e.frequency_minutes, DEFAULT_FREQUENCY_MINUTES);

        let mut raw = e.clone();
        raw.frequency_minutes = 0;
        assert_eq!(raw.headway_minutes(), DEFAULT_FREQUENCY_MINUTES);
    }

    #[test]
    fn departures_per_day() {
        let e = ScheduleEntry::from_description(t("06:00"), "Every 30 mins until 22:00");
        assert_eq!(e.departures_per_day(), Some(33));
        let open = ScheduleEntry::new(t("06:00"), 30, None);
        assert_eq!(open.departures_per_day(), None);
    }
}

// ── Route validation ──────────────────────────────────────────────────────────

#[cfg(test)]
mod validation {
    use super::*;

    #[test]
    fn well_formed_route_passes() {
        three_stop_route().validate().unwrap();
    }

    #[test]
    fn single_stop_rejected() {
        let mut r = three_stop_route();
        r.stops.truncate(1);
        assert!(matches!(r.validate(), Err(CatalogError::TooFewStops { count: 1, .. })));
    }

    #[test]
    fn decreasing_offsets_rejected() {
        let mut r = three_stop_route();
        r.stops[1].time_offset_minutes = 45;
        assert!(matches!(
            r.validate(),
            Err(CatalogError::NonMonotonicOffsets { index: 2, prev: 45, offset: 40, .. })
        ));
    }

    #[test]
    fn equal_offsets_allowed() {
        let mut r = three_stop_route();
        r.stops[1].time_offset_minutes = 0;
        r.validate().unwrap();
    }

    #[test]
    fn first_offset_must_be_zero() {
        let mut r = three_stop_route();
        r.stops[0].time_offset_minutes = 5;
        assert!(matches!(r.validate(), Err(CatalogError::FirstOffsetNotZero { offset: 5, .. })));
    }

    #[test]
    fn duration_must_match_last_offset() {
        let mut r = three_stop_route();
        r.duration_minutes = 41;
        assert!(matches!(
            r.validate(),
            Err(CatalogError::DurationMismatch { last_offset: 40, duration: 41, .. })
        ));
    }

    #[test]
    fn zero_duration_rejected() {
        let mut r = three_stop_route();
        for s in &mut r.stops {
            s.time_offset_minutes = 0;
        }
        r.duration_minutes = 0;
        assert!(matches!(r.validate(), Err(CatalogError::ZeroDuration(_))));
    }

    #[test]
    fn zero_capacity_and_empty_schedule_rejected() {
        let mut r = three_stop_route();
        r.capacity = 0;
        assert!(matches!(r.validate(), Err(CatalogError::ZeroCapacity(_))));

        let mut r = three_stop_route();
        r.schedule.clear();
        assert!(matches!(r.validate(), Err(CatalogError::EmptySchedule(_))));
    }

    #[test]
    fn empty_id_rejected() {
        let mut r = three_stop_route();
        r.id = RouteId::default();
        assert!(matches!(r.validate(), Err(CatalogError::EmptyRouteId)));
    }

    #[test]
    fn path_length() {
        // 0.2 degrees of latitude ≈ 22.2 km
        let km = three_stop_route().path_length_km();
        assert!((km - 22.24).abs() < 0.2, "got {km}");
    }
}

// ── RouteCatalog ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod catalog {
    use super::*;
    use crate::{RouteCatalog, kosovo_catalog};
    use transit_core::RouteIndex;

    #[test]
    fn builtin_catalog_is_valid() {
        let cat = kosovo_catalog().unwrap();
        assert_eq!(cat.len(), 8);
        assert_eq!(cat.by_kind(RouteKind::Intercity).count(), 5);
        assert_eq!(cat.by_kind(RouteKind::City).count(), 3);
    }

    #[test]
    fn builtin_bus_3_matches_timetable() {
        let cat = kosovo_catalog().unwrap();
        let bus3 = cat.get("bus-3").unwrap();
        let offsets: Vec<u32> = bus3.stops.iter().map(|s| s.time_offset_minutes).collect();
        assert_eq!(offsets, vec![0, 20, 40]);
        assert_eq!(bus3.duration_minutes, 40);
        assert_eq!(bus3.schedule.len(), 2);
        assert_eq!(bus3.primary_schedule().unwrap().first_departure, t("06:15"));
        assert_eq!(bus3.primary_schedule().unwrap().frequency_minutes, 30);
        assert_eq!(bus3.vehicle_number, "103");
    }

    #[test]
    fn index_lookup() {
        let cat = kosovo_catalog().unwrap();
        assert_eq!(cat.index_of("bus-1"), Some(RouteIndex(0)));
        assert_eq!(cat.index_of("city-bus-3"), Some(RouteIndex(7)));
        assert_eq!(cat.by_index(RouteIndex(2)).unwrap().id.as_str(), "bus-3");
        assert!(cat.get("bus-99").is_none());
        let indices: Vec<u32> = cat.iter_indexed().map(|(i, _)| i.0).collect();
        assert_eq!(indices, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn duplicate_ids_rejected() {
        let r = three_stop_route();
        let result = RouteCatalog::new(vec![r.clone(), r]);
        assert!(matches!(result, Err(CatalogError::DuplicateRoute(id)) if id.as_str() == "r"));
    }

    #[test]
    fn invalid_route_rejects_whole_catalog() {
        let mut bad = three_stop_route();
        bad.id = RouteId::from("bad");
        bad.stops.truncate(1);
        assert!(RouteCatalog::new(vec![three_stop_route(), bad]).is_err());
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use super::*;
    use crate::{DEFAULT_FREQUENCY_MINUTES, load_catalog_dir, load_catalog_readers};

    #[test]
    fn loads_interleaved_rows() {
        let cat = load_catalog_readers(
            Cursor::new(ROUTES_CSV),
            Cursor::new(STOPS_CSV),
            Cursor::new(SCHEDULES_CSV),
        )
        .unwrap();
        assert_eq!(cat.len(), 2);

        let bus3 = cat.get("bus-3").unwrap();
        let names: Vec<&str> = bus3.stops.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Pristina Bus Station", "Vushtrri", "Mitrovica Bus Station"]);
        assert_eq!(bus3.schedule.len(), 2);
        assert_eq!(bus3.schedule[1].first_departure, t("06:45"));

        let city = cat.get("city-bus-2").unwrap();
        assert_eq!(city.kind, RouteKind::City);
        assert_eq!(city.schedule[0].frequency_minutes, DEFAULT_FREQUENCY_MINUTES);
    }

    #[test]
    fn unknown_route_in_stops_rejected() {
        let stops = format!("{STOPS_CSV}ghost,Nowhere,0.0,0.0,0\n");
        let result = load_catalog_readers(
            Cursor::new(ROUTES_CSV),
            Cursor::new(stops),
            Cursor::new(SCHEDULES_CSV),
        );
        assert!(matches!(result, Err(CatalogError::UnknownRoute { what: "stops.csv", .. })));
    }

    #[test]
    fn bad_kind_rejected() {
        let routes = ROUTES_CSV.replace("intercity", "zeppelin");
        let result = load_catalog_readers(
            Cursor::new(routes),
            Cursor::new(STOPS_CSV),
            Cursor::new(SCHEDULES_CSV),
        );
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn bad_departure_time_rejected() {
        let schedules = SCHEDULES_CSV.replace("06:15", "6h15");
        let result = load_catalog_readers(
            Cursor::new(ROUTES_CSV),
            Cursor::new(STOPS_CSV),
            Cursor::new(schedules),
        );
        assert!(matches!(result, Err(CatalogError::Core(_))));
    }

    #[test]
    fn repeated_route_id_is_duplicate() {
        let routes = format!("{ROUTES_CSV}bus-3,Pristina - Mitrovica,intercity,40,2.5,103,45\n");
        let result = load_catalog_readers(
            Cursor::new(routes),
            Cursor::new(STOPS_CSV),
            Cursor::new(SCHEDULES_CSV),
        );
        match result {
            Err(CatalogError::DuplicateRoute(id)) => assert_eq!(id.as_str(), "bus-3"),
            other => panic!("expected DuplicateRoute, got {:?}", other.map(|c| c.len())),
        }
    }

    #[test]
    fn route_without_stops_fails_validation() {
        let stops = "route_id,stop_name,lat,lon,time_offset_minutes\n\
                     bus-3,A,0,0,0\nbus-3,B,0,0,40\n";
        let result = load_catalog_readers(
            Cursor::new(ROUTES_CSV),
            Cursor::new(stops),
            Cursor::new(SCHEDULES_CSV),
        );
        assert!(matches!(result, Err(CatalogError::TooFewStops { count: 0, .. })));
    }

    #[test]
    fn loads_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("routes.csv"), ROUTES_CSV).unwrap();
        std::fs::write(dir.path().join("stops.csv"), STOPS_CSV).unwrap();
        std::fs::write(dir.path().join("schedules.csv"), SCHEDULES_CSV).unwrap();
        let cat = load_catalog_dir(dir.path()).unwrap();
        assert_eq!(cat.len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(load_catalog_dir(dir.path()), Err(CatalogError::Io(_))));
    }
}

// ── CityDirectory ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod cities {
    use super::*;
    use crate::CityDirectory;

    #[test]
    fn find_is_case_insensitive() {
        let dir = CityDirectory::kosovo();
        assert_eq!(dir.len(), 10);
        let p = dir.find("  pristina ").unwrap();
        assert!(p.is_capital);
        assert!(dir.find("Atlantis").is_none());
    }

    #[test]
    fn nearest_snaps_to_town() {
        let dir = CityDirectory::kosovo();
        // A point a little south of Vushtrri.
        let c = dir.nearest(GeoPoint::new(42.80, 20.97)).unwrap();
        assert_eq!(c.name, "Vushtrri");
    }

    #[test]
    fn empty_directory() {
        let dir = CityDirectory::new(vec![]);
        assert!(dir.is_empty());
        assert!(dir.nearest(GeoPoint::new(0.0, 0.0)).is_none());
    }
}
