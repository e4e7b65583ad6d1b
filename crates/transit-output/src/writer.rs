//! The `OutputWriter` trait implemented by all backend writers.

use crate::{ItineraryRow, OutputResult, TickSummaryRow, VehicleSnapshotRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// When driven by [`FeedOutputObserver`][crate::FeedOutputObserver] errors
/// are stored and retrieved later with
/// [`take_error`][crate::FeedOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of vehicle snapshots.
    fn write_vehicles(&mut self, rows: &[VehicleSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Write the legs of one or more planned itineraries.
    fn write_itineraries(&mut self, rows: &[ItineraryRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
