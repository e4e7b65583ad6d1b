//! live_feed: replays the vehicle feed for the Kosovo network and plans a
//! trip between two towns.
//!
//! Stands in for the live map's redraw loop: instead of polling the wall
//! clock every few seconds it steps simulated time from a start time, writes
//! every snapshot to CSV, and prints an arrivals board at each snapshot.
//!
//! ```text
//! RUST_LOG=info cargo run -p live_feed -- --config demos/live_feed/config.json --from Pristina --to Peja
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use chrono::Timelike;
use clap::Parser;

use transit_catalog::{CityDirectory, RouteCatalog, kosovo_catalog, load_catalog_dir};
use transit_core::ClockTime;
use transit_output::{CsvWriter, FeedOutputObserver, OutputWriter};
use transit_planner::{Endpoint, ItineraryOption, format_duration, plan_trip};
use transit_sim::{FeedConfig, FeedObserver, LiveFeed, VehicleState};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON feed configuration; flags below override its fields
    #[arg(short, long, value_name = "*.json")]
    config: Option<PathBuf>,

    /// Directory with routes.csv, stops.csv and schedules.csv (default: built-in catalog)
    #[arg(long)]
    catalog_dir: Option<PathBuf>,

    /// Start time as HH:MM (default: the config's start, or the local time)
    #[arg(long)]
    start: Option<String>,

    /// Simulated minutes per tick
    #[arg(long)]
    step: Option<u32>,

    /// Number of ticks to replay
    #[arg(long)]
    ticks: Option<u64>,

    /// Print and write vehicles every N ticks
    #[arg(long)]
    interval: Option<u64>,

    /// Telemetry seed
    #[arg(long)]
    seed: Option<u64>,

    /// Output directory for CSV files
    #[arg(short, long, default_value = "output")]
    out: PathBuf,

    /// Trip origin (city name)
    #[arg(long, default_value = "Pristina")]
    from: String,

    /// Trip destination (city name)
    #[arg(long, default_value = "Prizren")]
    to: String,
}

// ── Observer wrapper to print an arrivals board ───────────────────────────────

struct BoardObserver<W: OutputWriter> {
    inner:     FeedOutputObserver<W>,
    snapshots: usize,
}

impl<W: OutputWriter> FeedObserver for BoardObserver<W> {
    fn on_tick_start(&mut self, tick: u64, now: ClockTime) {
        self.inner.on_tick_start(tick, now);
    }

    fn on_vehicles(&mut self, tick: u64, now: ClockTime, vehicles: &[VehicleState]) {
        self.snapshots += 1;
        print_board(tick, now, vehicles);
        self.inner.on_vehicles(tick, now, vehicles);
    }

    fn on_tick_end(&mut self, tick: u64, now: ClockTime, vehicle_count: usize) {
        self.inner.on_tick_end(tick, now, vehicle_count);
    }

    fn on_feed_end(&mut self, final_tick: u64) {
        self.inner.on_feed_end(final_tick);
    }
}

fn print_board(tick: u64, now: ClockTime, vehicles: &[VehicleState]) {
    println!();
    println!("── tick {tick} · {now} · {} vehicles ──", vehicles.len());
    println!(
        "{:<22} {:>5}  {:<24} {:<24} {:>4}  {:<7} {:>5}",
        "vehicle", "line", "at / from", "next", "eta", "load", "delay"
    );
    for v in vehicles {
        let from = if v.at_stop { format!("@ {}", v.current_stop) } else { v.current_stop.clone() };
        let delay = if v.is_delayed() { format!("+{}", v.delay_minutes) } else { "-".into() };
        println!(
            "{:<22} {:>5}  {:<24} {:<24} {:>4}  {:<7} {:>5}",
            v.id.to_string(),
            v.vehicle_number,
            from,
            v.next_stop,
            v.minutes_to_next_stop,
            v.occupancy_level.as_str(),
            delay,
        );
    }
}

fn print_itineraries(origin: &Endpoint, destination: &Endpoint, options: &[ItineraryOption]) {
    println!("Trip options {} → {}:", origin.name, destination.name);
    for option in options {
        println!(
            "  {:<9} {} → {}  {:>7}  {:>4.1} km  €{:.2}  {} transfer(s)  {:.1} kg CO₂ saved",
            option.id,
            option.departure,
            option.arrival,
            format_duration(option.total_duration_minutes),
            option.total_distance_km,
            option.price_units,
            option.transfer_count,
            option.co2_saved_kg,
        );
        for leg in &option.legs {
            let line = leg.line.as_ref().map_or(String::new(), |l| format!(" [{}]", l.number));
            println!(
                "      {} {:<16}{} {} → {}  ({} min)",
                leg.departure, leg.name, line, leg.from.name, leg.to.name, leg.duration_minutes
            );
        }
    }
}

// ── Setup helpers ─────────────────────────────────────────────────────────────

fn load_config(args: &Args) -> Result<FeedConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => FeedConfig { start: local_clock()?, ..FeedConfig::default() },
    };

    if let Some(start) = &args.start {
        config.start = start.parse().with_context(|| format!("invalid --start {start:?}"))?;
    }
    if let Some(step) = args.step {
        config.step_minutes = step;
    }
    if let Some(ticks) = args.ticks {
        config.total_ticks = ticks;
    }
    if let Some(interval) = args.interval {
        config.output_interval_ticks = interval;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    config.validate()?;
    Ok(config)
}

/// The host's wall clock, read once; the engine only ever sees explicit times.
fn local_clock() -> Result<ClockTime> {
    let now = chrono::Local::now();
    Ok(ClockTime::from_hm(now.hour(), now.minute())?)
}

fn load_catalog(dir: Option<&Path>) -> Result<RouteCatalog> {
    let catalog = match dir {
        Some(dir) => load_catalog_dir(dir).with_context(|| format!("loading catalog from {}", dir.display()))?,
        None => {
            log::info!("no --catalog-dir given; using the built-in Kosovo catalog");
            kosovo_catalog()?
        }
    };
    Ok(catalog)
}

fn endpoint(cities: &CityDirectory, name: &str) -> Result<Endpoint> {
    match cities.find(name) {
        Some(city) => Ok(Endpoint::from(city)),
        None => {
            let known: Vec<&str> = cities.cities().iter().map(|c| c.name.as_str()).collect();
            bail!("unknown city {name:?}; known: {}", known.join(", "))
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("=== live_feed: transit vehicle replay ===");

    // 1. Configuration and catalog.
    let config = load_config(&args)?;
    let catalog = load_catalog(args.catalog_dir.as_deref())?;
    println!(
        "Routes: {}  |  Start: {}  |  Step: {} min  |  Ticks: {}  |  Seed: {}",
        catalog.len(),
        config.start,
        config.step_minutes,
        config.total_ticks,
        config.seed,
    );

    // 2. Plan a trip at the feed's start time.
    let cities = CityDirectory::kosovo();
    let origin = endpoint(&cities, &args.from)?;
    let destination = endpoint(&cities, &args.to)?;
    let options = plan_trip(&origin, &destination, config.start);
    log::debug!("{} trip option(s) at {}", options.len(), config.start);
    println!();
    print_itineraries(&origin, &destination, &options);

    // 3. Output writer; itineraries go in before the feed closes the files.
    let writer = CsvWriter::new(&args.out)
        .with_context(|| format!("creating output in {}", args.out.display()))?;
    let mut output = FeedOutputObserver::new(writer);
    output.write_itineraries(&options)?;

    // 4. Replay the feed.
    let mut feed = LiveFeed::new(config, &catalog)?;
    let mut observer = BoardObserver { inner: output, snapshots: 0 };

    let t0 = Instant::now();
    feed.run(&mut observer)?;
    let elapsed = t0.elapsed();

    if let Some(e) = observer.inner.take_error() {
        bail!("output error: {e}");
    }
    log::info!(
        "replay finished: {} ticks, {} vehicle rows in {:.1} ms",
        feed.current_tick(),
        observer.inner.rows_written(),
        elapsed.as_secs_f64() * 1_000.0,
    );

    println!();
    println!(
        "Replayed {} ticks in {:.1} ms; {} snapshots, {} vehicle rows → {}",
        feed.current_tick(),
        elapsed.as_secs_f64() * 1_000.0,
        observer.snapshots,
        observer.inner.rows_written(),
        args.out.display(),
    );
    Ok(())
}
