//! Seeded random streams for vehicle telemetry.
//!
//! A feed run owns one [`SimRng`]. Each tick draws a fresh `u64` from it with
//! [`SimRng::tick_seed`], and every route evaluated in that tick gets a
//! [`RouteRng`] built from `(tick seed, route index)`:
//!
//!   route seed = tick seed XOR (route index * golden-ratio constant)
//!
//! The route stream depends only on those two values, so the sequential and
//! Rayon paths in `transit_sim` produce the same occupancy and delay readings.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::RouteIndex;

/// 64-bit fractional part of the golden ratio.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Telemetry stream for one route within one evaluation.
pub struct RouteRng(SmallRng);

impl RouteRng {
    pub fn new(seed: u64, route: RouteIndex) -> Self {
        RouteRng(SmallRng::seed_from_u64(mix(seed, route.0 as u64)))
    }

    /// The underlying generator, for use with `rand::Rng` methods.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}

/// Master stream of a feed run, or a single stream shared by every route in
/// a sequential evaluation.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed for the evaluation at `tick`.
    ///
    /// Advances the master stream once per call, so the same seed and the
    /// same sequence of ticks always yield the same seeds.
    pub fn tick_seed(&mut self, tick: u64) -> u64 {
        mix(self.0.r#gen::<u64>(), tick)
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}

#[inline]
fn mix(seed: u64, index: u64) -> u64 {
    seed ^ index.wrapping_mul(MIXING_CONSTANT)
}
