//! `transit-sim`: live vehicle positions derived from static timetables.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                    |
//! |-----------------|-------------------------------------------------------------|
//! | [`segment`]     | Offset normalization, segment lookup, ETA                   |
//! | [`telemetry`]   | `TelemetrySource` trait, `FixedTelemetry`, occupancy rules  |
//! | [`vehicle`]     | `VehicleState`, `OccupancyLevel`                            |
//! | [`simulator`]   | `compute_active_vehicles`, `compute_active_vehicles_seeded` |
//! | [`config`]      | `FeedConfig`                                                |
//! | [`feed`]        | `LiveFeed` replay runner, `FeedObserver`, `NoopObserver`    |
//! | [`error`]       | `SimError`, `SimResult<T>`                                  |
//!
//! # Position model
//!
//! Vehicles are not tracked; they are re-derived from the clock on every
//! call.  For a route with duration `D` and headway `F`, departing first at
//! `T0`:
//!
//! ```text
//! since    = now - T0                       (minutes, may be negative)
//! vehicles = D / F + 1
//! offset_k = (since + k * F) mod D          (k = 0 .. vehicles, in [0, D))
//! ```
//!
//! Each `offset_k` is placed on the stop timeline and the vehicle's
//! coordinates are interpolated between the surrounding stops.  Occupancy
//! and delay come from an injected [`TelemetrySource`].
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Runs per-route evaluation on Rayon's thread pool.         |
//! | `serde`    | Derives on `FeedConfig`, `VehicleState`, `OccupancyLevel`. |

pub mod config;
pub mod error;
pub mod feed;
pub mod segment;
pub mod simulator;
pub mod telemetry;
pub mod vehicle;


pub use config::FeedConfig;
pub use error::{SimError, SimResult};
pub use feed::{FeedObserver, LiveFeed, NoopObserver};
pub use segment::{SegmentPosition, locate_segment, minutes_to_next_stop, normalize_offset, vehicle_count};
pub use simulator::{compute_active_vehicles, compute_active_vehicles_seeded, simulate_route};
pub use telemetry::{FixedTelemetry, Telemetry, TelemetrySource};
pub use vehicle::{OccupancyLevel, VehicleState};
