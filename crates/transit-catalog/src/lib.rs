//! `transit-catalog`: static definitions of transit lines.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`route`]     | `Stop`, `RouteDefinition`, route validation               |
//! | [`schedule`]  | `ScheduleEntry`, frequency text parsing                   |
//! | [`catalog`]   | `RouteCatalog`: validated, id-indexed route collection   |
//! | [`loader`]    | `load_catalog_dir`, `load_catalog_readers`                |
//! | [`builtin`]   | `kosovo_catalog`, the shipped intercity and city lines   |
//! | [`cities`]    | `City`, `CityDirectory` (name + nearest-city lookup)      |
//! | [`error`]     | `CatalogError`, `CatalogResult<T>`                        |
//!
//! # Route model (summary)
//!
//! A route is an ordered list of stops, each tagged with the minutes elapsed
//! since the route's nominal start:
//!
//! ```text
//! Pristina ──20──▶ Vushtrri ──20──▶ Mitrovica
//!   0                20                40      = duration_minutes
//! ```
//!
//! Integrity rules (checked once, when a catalog is built, never per tick):
//! at least two stops, first offset 0, offsets non-decreasing, last offset
//! equal to `duration_minutes`, non-zero duration and capacity, and at least
//! one schedule entry.

pub mod builtin;
pub mod catalog;
pub mod cities;
pub mod error;
pub mod loader;
pub mod route;
pub mod schedule;

#[cfg(test)]
mod tests;

pub use builtin::kosovo_catalog;
pub use catalog::RouteCatalog;
pub use cities::{City, CityDirectory};
pub use error::{CatalogError, CatalogResult};
pub use loader::{load_catalog_dir, load_catalog_readers};
pub use route::{RouteDefinition, Stop};
pub use schedule::{DEFAULT_FREQUENCY_MINUTES, ScheduleEntry, parse_frequency_minutes};
