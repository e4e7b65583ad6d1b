//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `vehicle_snapshots.csv`
//! - `feed_ticks.csv`
//! - `itineraries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{ItineraryRow, OutputResult, TickSummaryRow, VehicleSnapshotRow};

pub const VEHICLE_HEADERS: [&str; 12] = [
    "tick",
    "time",
    "vehicle_id",
    "route_id",
    "lat",
    "lon",
    "current_stop",
    "next_stop",
    "minutes_to_next_stop",
    "occupancy_count",
    "occupancy_level",
    "delay_minutes",
];

pub const ITINERARY_HEADERS: [&str; 13] = [
    "itinerary_id",
    "leg_index",
    "mode",
    "name",
    "line",
    "from",
    "to",
    "departure",
    "arrival",
    "duration_minutes",
    "total_duration_minutes",
    "price_units",
    "transfer_count",
];

/// Writes feed and planner output to three CSV files.
pub struct CsvWriter {
    vehicles:    Writer<File>,
    ticks:       Writer<File>,
    itineraries: Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the three CSV files and write the headers.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut vehicles = Writer::from_path(dir.join("vehicle_snapshots.csv"))?;
        vehicles.write_record(VEHICLE_HEADERS)?;

        let mut ticks = Writer::from_path(dir.join("feed_ticks.csv"))?;
        ticks.write_record(["tick", "time", "vehicles"])?;

        let mut itineraries = Writer::from_path(dir.join("itineraries.csv"))?;
        itineraries.write_record(ITINERARY_HEADERS)?;

        Ok(Self { vehicles, ticks, itineraries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_vehicles(&mut self, rows: &[VehicleSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.vehicles.write_record(&[
                row.tick.to_string(),
                row.time.to_string(),
                row.vehicle_id.clone(),
                row.route_id.clone(),
                format!("{:.5}", row.lat),
                format!("{:.5}", row.lon),
                row.current_stop.clone(),
                row.next_stop.clone(),
                row.minutes_to_next_stop.to_string(),
                row.occupancy_count.to_string(),
                row.occupancy_level.to_owned(),
                row.delay_minutes.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.ticks.write_record(&[
            row.tick.to_string(),
            row.time.to_string(),
            row.vehicles.to_string(),
        ])?;
        Ok(())
    }

    fn write_itineraries(&mut self, rows: &[ItineraryRow]) -> OutputResult<()> {
        for row in rows {
            self.itineraries.write_record(&[
                row.itinerary_id.clone(),
                row.leg_index.to_string(),
                row.mode.to_owned(),
                row.name.clone(),
                row.line.clone(),
                row.from.clone(),
                row.to.clone(),
                row.departure.to_string(),
                row.arrival.to_string(),
                row.duration_minutes.to_string(),
                row.total_duration_minutes.to_string(),
                row.price_units.to_string(),
                row.transfer_count.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.vehicles.flush()?;
        self.ticks.flush()?;
        self.itineraries.flush()?;
        Ok(())
    }
}
