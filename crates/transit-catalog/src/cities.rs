//! Static city directory for resolving trip endpoints.
//!
//! The planner takes endpoints as `(name, coordinates)`.  Hosts without a
//! geocoder use this directory to turn a typed city name into coordinates,
//! or to snap a clicked map position to the nearest town.
//!
//! An R-tree (via `rstar`) answers nearest-city queries.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use transit_core::GeoPoint;

/// A named town with a representative coordinate.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub name:        String,
    pub coordinates: GeoPoint,
    pub is_capital:  bool,
}

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct CityEntry {
    point: [f32; 2], // [lat, lon]
    idx:   usize,
}

impl RTreeObject for CityEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for CityEntry {
    /// Squared Euclidean distance in lat/lon space; good enough to rank towns
    /// within one country.
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── CityDirectory ─────────────────────────────────────────────────────────────

pub struct CityDirectory {
    cities: Vec<City>,
    index:  RTree<CityEntry>,
}

impl CityDirectory {
    pub fn new(cities: Vec<City>) -> Self {
        let entries = cities
            .iter()
            .enumerate()
            .map(|(idx, c)| CityEntry { point: [c.coordinates.lat, c.coordinates.lon], idx })
            .collect();
        Self { index: RTree::bulk_load(entries), cities }
    }

    /// The ten largest towns of Kosovo.
    pub fn kosovo() -> Self {
        let city = |name: &str, lat: f32, lon: f32, is_capital: bool| City {
            name: name.to_owned(),
            coordinates: GeoPoint::new(lat, lon),
            is_capital,
        };
        Self::new(vec![
            city("Pristina",  42.6629, 21.1655, true),
            city("Prizren",   42.2139, 20.7397, false),
            city("Peja",      42.6598, 20.2888, false),
            city("Mitrovica", 42.8914, 20.8660, false),
            city("Gjakova",   42.3803, 20.4308, false),
            city("Gjilan",    42.4631, 21.4691, false),
            city("Ferizaj",   42.3706, 21.1553, false),
            city("Podujeva",  42.9098, 21.1932, false),
            city("Vushtrri",  42.8273, 20.9675, false),
            city("Suhareka",  42.3592, 20.8254, false),
        ])
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Case-insensitive lookup by name, ignoring surrounding whitespace.
    pub fn find(&self, name: &str) -> Option<&City> {
        let name = name.trim();
        self.cities.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// The city closest to `point`, or `None` for an empty directory.
    pub fn nearest(&self, point: GeoPoint) -> Option<&City> {
        self.index
            .nearest_neighbor(&[point.lat, point.lon])
            .map(|e| &self.cities[e.idx])
    }
}
