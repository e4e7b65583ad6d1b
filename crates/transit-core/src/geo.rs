//! Geographic coordinate type and spatial utilities.
//!
//! `GeoPoint` uses `f32` (single-precision) latitude/longitude.  At the
//! equator this gives ~1 m precision, more than enough for placing vehicle
//! markers on a regional map.

/// A WGS-84 geographic coordinate stored as single-precision floats.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f32,
    pub lon: f32,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f32, lon: f32) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Accuracy: ±0.5 % (f32 rounding).
    pub fn distance_m(self, other: GeoPoint) -> f32 {
        const R: f32 = 6_371_000.0; // mean Earth radius, metres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }

    /// Point at fraction `t` along the straight segment `self → other`.
    ///
    /// Latitude and longitude are blended independently.  `t` is clamped to
    /// `[0, 1]`; the endpoints are reproduced exactly at `t = 0` and `t = 1`.
    #[inline]
    pub fn lerp(self, other: GeoPoint, t: f32) -> GeoPoint {
        let t = t.clamp(0.0, 1.0);
        let s = 1.0 - t;
        GeoPoint {
            lat: self.lat * s + other.lat * t,
            lon: self.lon * s + other.lon * t,
        }
    }
}

impl From<[f32; 2]> for GeoPoint {
    /// `[lat, lon]`, the order used by map libraries and the built-in catalog.
    #[inline]
    fn from([lat, lon]: [f32; 2]) -> Self {
        Self { lat, lon }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
