//! `transit-output`: writers for live-feed snapshots and planned itineraries.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend | Files created                                                  |
//! |-----------|---------|----------------------------------------------------------------|
//! | *(none)*  | CSV     | `vehicle_snapshots.csv`, `feed_ticks.csv`, `itineraries.csv`   |
//! | `sqlite`  | SQLite  | `transit.db`                                                   |
//!
//! Both implement [`OutputWriter`] and are driven by [`FeedOutputObserver`],
//! which implements `transit_sim::FeedObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use transit_output::{CsvWriter, FeedOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = FeedOutputObserver::new(writer);
//! feed.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::FeedOutputObserver;
pub use row::{ItineraryRow, TickSummaryRow, VehicleSnapshotRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
