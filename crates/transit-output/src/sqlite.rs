//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `transit.db` file in the configured output directory with
//! three tables: `vehicle_snapshots`, `feed_ticks`, and `itinerary_legs`.
//! Tables left by an earlier run into the same directory are dropped, so each
//! database holds exactly one run.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{ItineraryRow, OutputResult, TickSummaryRow, VehicleSnapshotRow};

/// Writes feed and planner output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `transit.db` in `dir` and recreate the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        let conn = Connection::open(dir.join("transit.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             DROP TABLE IF EXISTS vehicle_snapshots;
             DROP TABLE IF EXISTS feed_ticks;
             DROP TABLE IF EXISTS itinerary_legs;
             CREATE TABLE vehicle_snapshots (
                 tick                 INTEGER NOT NULL,
                 time                 TEXT    NOT NULL,
                 vehicle_id           TEXT    NOT NULL,
                 route_id             TEXT    NOT NULL,
                 lat                  REAL    NOT NULL,
                 lon                  REAL    NOT NULL,
                 current_stop         TEXT    NOT NULL,
                 next_stop            TEXT    NOT NULL,
                 minutes_to_next_stop INTEGER NOT NULL,
                 occupancy_count      INTEGER NOT NULL,
                 occupancy_level      TEXT    NOT NULL,
                 delay_minutes        INTEGER NOT NULL
             );
             CREATE TABLE feed_ticks (
                 tick     INTEGER PRIMARY KEY,
                 time     TEXT    NOT NULL,
                 vehicles INTEGER NOT NULL
             );
             CREATE TABLE itinerary_legs (
                 itinerary_id           TEXT    NOT NULL,
                 leg_index              INTEGER NOT NULL,
                 mode                   TEXT    NOT NULL,
                 name                   TEXT    NOT NULL,
                 line                   TEXT    NOT NULL,
                 from_name              TEXT    NOT NULL,
                 to_name                TEXT    NOT NULL,
                 departure              TEXT    NOT NULL,
                 arrival                TEXT    NOT NULL,
                 duration_minutes       INTEGER NOT NULL,
                 total_duration_minutes INTEGER NOT NULL,
                 price_units            REAL    NOT NULL,
                 transfer_count         INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_vehicles(&mut self, rows: &[VehicleSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO vehicle_snapshots \
                 (tick, time, vehicle_id, route_id, lat, lon, current_stop, next_stop, \
                  minutes_to_next_stop, occupancy_count, occupancy_level, delay_minutes) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.tick as i64,
                    row.time.to_string(),
                    row.vehicle_id,
                    row.route_id,
                    row.lat as f64,
                    row.lon as f64,
                    row.current_stop,
                    row.next_stop,
                    row.minutes_to_next_stop,
                    row.occupancy_count,
                    row.occupancy_level,
                    row.delay_minutes,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO feed_ticks (tick, time, vehicles) VALUES (?1, ?2, ?3)",
            rusqlite::params![row.tick as i64, row.time.to_string(), row.vehicles as i64],
        )?;
        Ok(())
    }

    fn write_itineraries(&mut self, rows: &[ItineraryRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO itinerary_legs \
                 (itinerary_id, leg_index, mode, name, line, from_name, to_name, departure, \
                  arrival, duration_minutes, total_duration_minutes, price_units, transfer_count) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.itinerary_id,
                    row.leg_index,
                    row.mode,
                    row.name,
                    row.line,
                    row.from,
                    row.to,
                    row.departure.to_string(),
                    row.arrival.to_string(),
                    row.duration_minutes,
                    row.total_duration_minutes,
                    row.price_units as f64,
                    row.transfer_count,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
