//! Identifier types.
//!
//! Routes have two identities: the human-assigned [`RouteId`] string
//! (`"bus-3"`, `"city-bus-1"`) that appears in catalogs and output, and the
//! positional [`RouteIndex`] a route receives when a catalog is built.  The
//! index is `Copy` and is what per-route RNG seeding keys on, so reordering
//! string ids never disturbs a run as long as catalog order is stable.

use std::borrow::Borrow;
use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Position of a route within its `RouteCatalog`.
    pub struct RouteIndex(u32);
}

// ── RouteId ───────────────────────────────────────────────────────────────────

/// Catalog identifier of a transit line, e.g. `"bus-3"`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RouteId(pub String);

impl RouteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for RouteId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for RouteId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for RouteId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── VehicleId ─────────────────────────────────────────────────────────────────

/// Identity of one simulated vehicle: its route plus a 0-based ordinal.
///
/// Vehicles are not stored anywhere, so the id is only stable for a given
/// route, headway and duration: the same ordinal on the next evaluation is
/// the same logical vehicle one step further along the line.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleId {
    pub route:   RouteId,
    pub ordinal: u32,
}

impl VehicleId {
    pub fn new(route: RouteId, ordinal: u32) -> Self {
        Self { route, ordinal }
    }
}

impl fmt::Display for VehicleId {
    /// `"<route>-vehicle-<n>"` with a 1-based `n`, matching what riders see.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-vehicle-{}", self.route, self.ordinal + 1)
    }
}
