//! `transit-planner`: itinerary options between two places.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`itinerary`] | `Endpoint`, `Leg`, `LineLabel`, `ItineraryOption`, `format_duration` |
//! | [`template`]  | `ItineraryTemplate`, `LegTemplate`, `Waypoint`, `default_templates` |
//! | [`planner`]   | `TripPlanner` trait, `TemplatePlanner`, `plan_trip`           |
//! | [`error`]     | `PlannerError`, `PlannerResult<T>`                            |
//!
//! # Timing model
//!
//! ```text
//! now ──start offset──▶ leg 1 ──▶ leg 2 (wait + ride) ──▶ arrival
//! ```
//!
//! Every leg departs exactly when the previous one arrives; a transfer wait is
//! the opening part of the next leg.  All times are [`ClockTime`]s and wrap
//! past midnight.
//!
//! [`ClockTime`]: transit_core::ClockTime

pub mod error;
pub mod itinerary;
pub mod planner;
pub mod template;


pub use error::{PlannerError, PlannerResult};
pub use itinerary::{Endpoint, ItineraryOption, Leg, LineLabel, format_duration};
pub use planner::{TemplatePlanner, TripPlanner, plan_trip};
pub use template::{ItineraryTemplate, LegTemplate, Waypoint, default_templates};
