//! Synthetic occupancy and delay telemetry.
//!
//! Nothing here models passengers or traffic.  A [`TelemetrySource`] stands
//! in for a real AVL/APC feed: the random implementations draw uniform
//! occupancy and an occasional delay, and [`FixedTelemetry`] returns constant
//! values so tests can assert on exact output.

use rand::Rng;

use transit_catalog::RouteDefinition;
use transit_core::{RouteRng, SimRng};

/// Probability that a vehicle reports a delay.
pub const DELAY_PROBABILITY: f64 = 0.2;

/// Exclusive upper bound of a reported delay, in minutes.
pub const MAX_DELAY_MINUTES: u32 = 10;

/// One vehicle's rider count and lateness.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Telemetry {
    pub occupancy_count: u32,
    pub delay_minutes:   u32,
}

/// Supplies telemetry for each simulated vehicle.
///
/// Implemented for [`SimRng`] (one stream for a whole evaluation) and
/// [`RouteRng`] (one stream per route, used by the parallel path).
pub trait TelemetrySource {
    fn sample(&mut self, route: &RouteDefinition, ordinal: u32) -> Telemetry;
}

/// Occupancy uniform in `[0, capacity)`; delay 0 with probability 0.8,
/// otherwise uniform in `[0, MAX_DELAY_MINUTES)`.
fn sample_uniform<R: Rng>(rng: &mut R, capacity: u32) -> Telemetry {
    let occupancy_count = if capacity == 0 { 0 } else { rng.gen_range(0..capacity) };
    let delay_minutes = if rng.gen_bool(DELAY_PROBABILITY) {
        rng.gen_range(0..MAX_DELAY_MINUTES)
    } else {
        0
    };
    Telemetry { occupancy_count, delay_minutes }
}

impl TelemetrySource for SimRng {
    fn sample(&mut self, route: &RouteDefinition, _ordinal: u32) -> Telemetry {
        sample_uniform(self.inner(), route.capacity)
    }
}

impl TelemetrySource for RouteRng {
    fn sample(&mut self, route: &RouteDefinition, _ordinal: u32) -> Telemetry {
        sample_uniform(self.inner(), route.capacity)
    }
}

/// Returns the same reading for every vehicle.
///
/// `occupancy_count` is capped at `capacity - 1` so readings stay within the
/// range the random sources produce.
#[derive(Copy, Clone, Debug, Default)]
pub struct FixedTelemetry(pub Telemetry);

impl FixedTelemetry {
    pub fn new(occupancy_count: u32, delay_minutes: u32) -> Self {
        Self(Telemetry { occupancy_count, delay_minutes })
    }
}

impl TelemetrySource for FixedTelemetry {
    fn sample(&mut self, route: &RouteDefinition, _ordinal: u32) -> Telemetry {
        Telemetry {
            occupancy_count: self.0.occupancy_count.min(route.capacity.saturating_sub(1)),
            delay_minutes:   self.0.delay_minutes,
        }
    }
}
