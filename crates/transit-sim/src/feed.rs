//! Tick-driven replay of the live vehicle feed.

use transit_catalog::RouteCatalog;
use transit_core::{ClockTime, SimRng};

use crate::{FeedConfig, SimError, SimResult, VehicleState, compute_active_vehicles_seeded};

/// Callbacks invoked by [`LiveFeed::run`] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: arrival board printer
///
/// ```rust,ignore
/// struct Board;
///
/// impl FeedObserver for Board {
///     fn on_vehicles(&mut self, _tick: u64, now: ClockTime, vehicles: &[VehicleState]) {
///         for v in vehicles {
///             println!("{now} {} -> {} in {} min", v.id, v.next_stop, v.minutes_to_next_stop);
///         }
///     }
/// }
/// ```
pub trait FeedObserver {
    /// Called at the very start of each tick, before any evaluation.
    fn on_tick_start(&mut self, _tick: u64, _now: ClockTime) {}

    /// Called at snapshot ticks (every `config.output_interval_ticks` ticks)
    /// with every vehicle in service at `now`.
    fn on_vehicles(&mut self, _tick: u64, _now: ClockTime, _vehicles: &[VehicleState]) {}

    /// Called at the end of each tick with the number of vehicles evaluated.
    fn on_tick_end(&mut self, _tick: u64, _now: ClockTime, _vehicle_count: usize) {}

    /// Called once after the final tick of [`LiveFeed::run`].
    fn on_feed_end(&mut self, _final_tick: u64) {}
}

/// A [`FeedObserver`] that does nothing.
pub struct NoopObserver;

impl FeedObserver for NoopObserver {}

/// Replays the simulator over a window of wall-clock times.
///
/// Each tick draws a seed from the master RNG and evaluates the whole
/// catalog with [`compute_active_vehicles_seeded`], so a given
/// [`FeedConfig::seed`] always yields the same sequence of snapshots.
pub struct LiveFeed<'a> {
    pub config:  FeedConfig,
    catalog:     &'a RouteCatalog,
    rng:         SimRng,
    tick:        u64,
}

impl<'a> LiveFeed<'a> {
    pub fn new(config: FeedConfig, catalog: &'a RouteCatalog) -> SimResult<Self> {
        config.validate()?;
        if catalog.is_empty() {
            return Err(SimError::EmptyCatalog);
        }
        let rng = SimRng::new(config.seed);
        Ok(Self { config, catalog, rng, tick: 0 })
    }

    /// Index of the next tick to evaluate.
    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    /// Wall-clock time of the next tick.
    pub fn current_time(&self) -> ClockTime {
        self.config.time_at(self.tick)
    }

    pub fn catalog(&self) -> &RouteCatalog {
        self.catalog
    }

    /// Evaluate the current tick without calling any observer and advance.
    pub fn step(&mut self) -> Vec<VehicleState> {
        let now = self.current_time();
        let seed = self.rng.tick_seed(self.tick);
        let vehicles = compute_active_vehicles_seeded(self.catalog, now, seed);
        log::debug!("tick {} at {now}: {} vehicles", self.tick, vehicles.len());
        self.tick += 1;
        vehicles
    }

    /// Run from the current tick to `config.total_ticks`.
    pub fn run<O: FeedObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        log::info!(
            "live feed: {} routes, {} ticks from {} every {} min",
            self.catalog.len(),
            self.config.total_ticks,
            self.config.start,
            self.config.step_minutes,
        );
        while self.tick < self.config.total_ticks {
            self.process_tick(observer);
        }
        observer.on_feed_end(self.tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `total_ticks`).
    pub fn run_ticks<O: FeedObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.process_tick(observer);
        }
        Ok(())
    }

    fn process_tick<O: FeedObserver>(&mut self, observer: &mut O) {
        let tick = self.tick;
        let now = self.current_time();
        observer.on_tick_start(tick, now);
        let vehicles = self.step();
        if tick.is_multiple_of(self.config.output_interval_ticks) {
            observer.on_vehicles(tick, now, &vehicles);
        }
        observer.on_tick_end(tick, now, vehicles.len());
    }
}
