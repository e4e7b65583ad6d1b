//! The shipped Kosovo network: five intercity lines out of Pristina and
//! three Pristina city lines.

use transit_core::{GeoPoint, RouteId, RouteKind};

use crate::{CatalogResult, RouteCatalog, RouteDefinition, ScheduleEntry, Stop};

fn stop(name: &str, lat: f32, lon: f32, offset: u32) -> Stop {
    Stop::new(name, GeoPoint::new(lat, lon), offset)
}

fn schedule(lines: &[(&str, &str)]) -> CatalogResult<Vec<ScheduleEntry>> {
    lines
        .iter()
        .map(|(departure, text)| Ok(ScheduleEntry::from_description(departure.parse()?, text)))
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn route(
    id:             &str,
    name:           &str,
    kind:           RouteKind,
    stops:          Vec<Stop>,
    schedule:       Vec<ScheduleEntry>,
    price_units:    f32,
    vehicle_number: &str,
    capacity:       u32,
) -> RouteDefinition {
    let duration_minutes = stops.last().map_or(0, |s| s.time_offset_minutes);
    RouteDefinition {
        id: RouteId::from(id),
        name: name.to_owned(),
        kind,
        stops,
        schedule,
        duration_minutes,
        price_units,
        vehicle_number: vehicle_number.to_owned(),
        capacity,
    }
}

/// Build the built-in catalog.
///
/// Order is stable: intercity `bus-1`..`bus-5`, then `city-bus-1`..`city-bus-3`.
pub fn kosovo_catalog() -> CatalogResult<RouteCatalog> {
    use RouteKind::{City, Intercity};

    let routes = vec![
        route(
            "bus-1", "Pristina - Prizren", Intercity,
            vec![
                stop("Pristina Bus Station", 42.6629, 21.1655, 0),
                stop("Lipjan",               42.5241, 21.1259, 15),
                stop("Shtime",               42.4331, 21.0394, 25),
                stop("Suhareka",             42.3592, 20.8254, 40),
                stop("Prizren Bus Station",  42.2139, 20.7397, 60),
            ],
            schedule(&[
                ("06:00", "Every 30 mins until 22:00"),
                ("06:30", "Every 30 mins until 22:30"),
            ])?,
            3.5, "101", 45,
        ),
        route(
            "bus-2", "Pristina - Peja", Intercity,
            vec![
                stop("Pristina Bus Station", 42.6629, 21.1655, 0),
                stop("Drenas",               42.6283, 20.8987, 20),
                stop("Klina",                42.6217, 20.5730, 50),
                stop("Peja Bus Station",     42.6598, 20.2888, 75),
            ],
            schedule(&[
                ("07:00", "Every 60 mins until 21:00"),
                ("08:00", "Every 60 mins until 22:00"),
            ])?,
            4.0, "102", 45,
        ),
        route(
            "bus-3", "Pristina - Mitrovica", Intercity,
            vec![
                stop("Pristina Bus Station",  42.6629, 21.1655, 0),
                stop("Vushtrri",              42.8273, 20.9675, 20),
                stop("Mitrovica Bus Station", 42.8914, 20.8660, 40),
            ],
            schedule(&[
                ("06:15", "Every 30 mins until 22:15"),
                ("06:45", "Every 30 mins until 22:45"),
            ])?,
            2.5, "103", 45,
        ),
        route(
            "bus-4", "Pristina - Gjilan", Intercity,
            vec![
                stop("Pristina Bus Station", 42.6629, 21.1655, 0),
                stop("Gjilan Bus Station",   42.4631, 21.4691, 45),
            ],
            schedule(&[
                ("06:30", "Every 30 mins until 22:30"),
                ("07:00", "Every 30 mins until 23:00"),
            ])?,
            3.0, "104", 45,
        ),
        route(
            "bus-5", "Pristina - Ferizaj", Intercity,
            vec![
                stop("Pristina Bus Station", 42.6629, 21.1655, 0),
                stop("Ferizaj Bus Station",  42.3706, 21.1553, 30),
            ],
            schedule(&[
                ("06:00", "Every 20 mins until 23:00"),
                ("06:20", "Every 20 mins until 23:20"),
                ("06:40", "Every 20 mins until 23:40"),
            ])?,
            2.0, "105", 45,
        ),
        route(
            "city-bus-1", "Line 1: City Center - Sunny Hill", City,
            vec![
                stop("Main Bus Station",       42.6607, 21.1568, 0),
                stop("City Center",            42.6629, 21.1655, 5),
                stop("Newborn Monument",       42.6583, 21.1608, 8),
                stop("University of Pristina", 42.6477, 21.1673, 12),
                stop("Sunny Hill",             42.6547, 21.1845, 20),
            ],
            schedule(&[("05:30", "Every 10 mins until 23:30")])?,
            0.5, "1", 30,
        ),
        route(
            "city-bus-2", "Line 2: City Center - Veternik", City,
            vec![
                stop("Main Bus Station", 42.6607, 21.1568, 0),
                stop("City Center",      42.6629, 21.1655, 5),
                stop("Grand Hotel",      42.6600, 21.1597, 7),
                stop("Veternik",         42.6433, 21.1367, 15),
            ],
            schedule(&[("05:35", "Every 10 mins until 23:35")])?,
            0.5, "2", 30,
        ),
        route(
            "city-bus-3", "Line 3: City Center - Dardania", City,
            vec![
                stop("Main Bus Station",                 42.6607, 21.1568, 0),
                stop("City Center",                      42.6629, 21.1655, 5),
                stop("Cathedral of Saint Mother Teresa", 42.6604, 21.1559, 7),
                stop("Dardania",                         42.6477, 21.1513, 15),
            ],
            schedule(&[("05:40", "Every 10 mins until 23:40")])?,
            0.5, "3", 30,
        ),
    ];

    RouteCatalog::new(routes)
}
