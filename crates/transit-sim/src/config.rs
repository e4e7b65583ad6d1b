//! Live-feed configuration.

use transit_core::ClockTime;

use crate::{SimError, SimResult};

/// Parameters for a [`LiveFeed`][crate::LiveFeed] replay.
///
/// Typically loaded from a JSON file by the host binary and then overridden
/// from the command line.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FeedConfig {
    /// Wall-clock time of tick 0.
    pub start: ClockTime,

    /// Simulated minutes between ticks.  Must be > 0.
    pub step_minutes: u32,

    /// Ticks to replay.  1 440 at one-minute steps covers a full day.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical telemetry.
    pub seed: u64,

    /// Hand vehicle snapshots to the observer every N ticks.  Must be > 0.
    pub output_interval_ticks: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            start:                 ClockTime::MIDNIGHT.add_minutes(6 * 60),
            step_minutes:          1,
            total_ticks:           60,
            seed:                  42,
            output_interval_ticks: 1,
        }
    }
}

impl FeedConfig {
    pub fn validate(&self) -> SimResult<()> {
        if self.step_minutes == 0 {
            return Err(SimError::Config("step_minutes must be > 0".into()));
        }
        if self.output_interval_ticks == 0 {
            return Err(SimError::Config("output_interval_ticks must be > 0".into()));
        }
        Ok(())
    }

    /// Wall-clock time at `tick`; wraps past midnight.
    #[inline]
    pub fn time_at(&self, tick: u64) -> ClockTime {
        let minutes = (tick as i64).wrapping_mul(self.step_minutes as i64);
        self.start.add_minutes(minutes)
    }
}
