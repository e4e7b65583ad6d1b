//! `FeedOutputObserver<W>` bridges `FeedObserver` to an `OutputWriter`.

use transit_core::ClockTime;
use transit_planner::ItineraryOption;
use transit_sim::{FeedObserver, VehicleState};

use crate::row::{ItineraryRow, TickSummaryRow, VehicleSnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`FeedObserver`] that writes vehicle snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `FeedObserver`
/// methods have no return value.  After `feed.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct FeedOutputObserver<W: OutputWriter> {
    writer:     W,
    rows:       usize,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> FeedOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, last_error: None }
    }

    /// Take the stored write error (if any) after `feed.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Vehicle rows handed to the writer so far.
    pub fn rows_written(&self) -> usize {
        self.rows
    }

    /// Record planned itineraries alongside the feed.
    pub fn write_itineraries(&mut self, options: &[ItineraryOption]) -> OutputResult<()> {
        let rows: Vec<ItineraryRow> = options.iter().flat_map(ItineraryRow::from_option).collect();
        self.writer.write_itineraries(&rows)
    }

    /// Unwrap the inner writer (e.g. to finish it after writing itineraries).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            log::error!("output write failed: {e}");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> FeedObserver for FeedOutputObserver<W> {
    fn on_vehicles(&mut self, tick: u64, now: ClockTime, vehicles: &[VehicleState]) {
        if vehicles.is_empty() {
            return;
        }
        let rows: Vec<VehicleSnapshotRow> = vehicles
            .iter()
            .map(|v| VehicleSnapshotRow::from_state(tick, now, v))
            .collect();
        let result = self.writer.write_vehicles(&rows);
        if result.is_ok() {
            self.rows += rows.len();
        }
        self.store_err(result);
    }

    fn on_tick_end(&mut self, tick: u64, now: ClockTime, vehicle_count: usize) {
        let row = TickSummaryRow { tick, time: now, vehicles: vehicle_count as u64 };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_feed_end(&mut self, final_tick: u64) {
        log::info!("feed finished at tick {final_tick}: {} vehicle rows written", self.rows);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
