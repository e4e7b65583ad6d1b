//! Route and leg classification enums shared across the engine.

/// Service class of a route.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RouteKind {
    /// Urban line with short headways (Pristina city buses).
    City,
    /// Line connecting two towns.
    Intercity,
}

impl RouteKind {
    /// Lower-case label, used for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            RouteKind::City      => "city",
            RouteKind::Intercity => "intercity",
        }
    }

    /// Parse the label written by [`as_str`][Self::as_str].
    pub fn parse(s: &str) -> Option<RouteKind> {
        match s.trim().to_ascii_lowercase().as_str() {
            "city"      => Some(RouteKind::City),
            "intercity" => Some(RouteKind::Intercity),
            _ => None,
        }
    }
}

impl std::fmt::Display for RouteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a traveller covers one itinerary leg.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LegMode {
    /// On foot.
    Walk,
    /// Aboard a scheduled bus or train.
    Transit,
}

impl LegMode {
    /// `true` for legs that ride a vehicle.
    #[inline]
    pub fn is_transit(self) -> bool {
        matches!(self, LegMode::Transit)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LegMode::Walk    => "walk",
            LegMode::Transit => "transit",
        }
    }
}

impl std::fmt::Display for LegMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
