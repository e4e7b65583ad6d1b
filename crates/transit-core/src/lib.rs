//! `transit-core`: foundational types shared by every `transit-*` crate.
//!
//! This crate has no `transit-*` dependencies and minimal external ones (only
//! `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `RouteIndex`, `RouteId`, `VehicleId`                  |
//! | [`geo`]         | `GeoPoint`, haversine distance, interpolation         |
//! | [`time`]        | `ClockTime` (wall-clock `HH:MM`, wraps at midnight)   |
//! | [`rng`]         | `RouteRng` (per-route), `SimRng` (global)             |
//! | [`transport`]   | `RouteKind`, `LegMode`                                |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types; `ClockTime` serializes as an `"HH:MM"` string. |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;
pub mod transport;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::{RouteId, RouteIndex, VehicleId};
pub use rng::{RouteRng, SimRng};
pub use time::{ClockTime, MINUTES_PER_DAY};
pub use transport::{LegMode, RouteKind};
