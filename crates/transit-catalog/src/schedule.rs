//! Departure schedules and frequency-description parsing.
//!
//! Schedules are published as free text (`"Every 30 mins until 22:00"`,
//! `"Hourly"`, `"Every 2 hours"`).  The engine only needs the headway in
//! minutes, so the text is reduced to a [`ScheduleEntry`] once at load time.
//!
//! Unparseable or zero headways never fail a load: they fall back to
//! [`DEFAULT_FREQUENCY_MINUTES`] with a warning.

use std::sync::LazyLock;

use regex::Regex;

use transit_core::ClockTime;

/// Headway used when a schedule's frequency cannot be determined.
pub const DEFAULT_FREQUENCY_MINUTES: u32 = 30;

static EVERY_N: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| {
    Regex::new(r"(?i)\bevery\s+(\d+)\s*(minutes|minute|mins|min|hours|hour|hrs|hr|h)\b")
});

static HOURLY: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"(?i)\bhourly\b"));

static UNTIL: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"(?i)\buntil\s+(\d{1,2}:\d{2})\b"));

fn compiled(re: &'static LazyLock<Result<Regex, regex::Error>>) -> Option<&'static Regex> {
    match LazyLock::force(re) {
        Ok(re) => Some(re),
        Err(e) => {
            log::error!("schedule pattern failed to compile: {e}");
            None
        }
    }
}

/// Extract the headway in minutes from a free-text frequency description.
///
/// Returns `None` when no positive headway can be read; callers substitute
/// [`DEFAULT_FREQUENCY_MINUTES`].
pub fn parse_frequency_minutes(text: &str) -> Option<u32> {
    if let Some(caps) = compiled(&EVERY_N).and_then(|re| re.captures(text)) {
        let n: u32 = caps[1].parse().ok()?;
        let unit = caps[2].to_ascii_lowercase();
        let minutes = if unit.starts_with('h') { n.checked_mul(60)? } else { n };
        return (minutes > 0).then_some(minutes);
    }
    if compiled(&HOURLY).is_some_and(|re| re.is_match(text)) {
        return Some(60);
    }
    None
}

/// Extract the `until HH:MM` service end, if present and valid.
fn parse_service_end(text: &str) -> Option<ClockTime> {
    let caps = compiled(&UNTIL)?.captures(text)?;
    caps[1].parse().ok()
}

// ── ScheduleEntry ─────────────────────────────────────────────────────────────

/// One departure pattern of a route: a first departure, then one vehicle every
/// `frequency_minutes` until `service_end`.
///
/// Routes usually carry one entry per direction or shift.  The vehicle
/// simulator only consults the first.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleEntry {
    pub first_departure: ClockTime,

    /// Headway between successive departures.  Always > 0 when built through
    /// [`ScheduleEntry::new`] or [`ScheduleEntry::from_description`].
    pub frequency_minutes: u32,

    /// Last departure of the day, when the timetable states one.
    pub service_end: Option<ClockTime>,
}

impl ScheduleEntry {
    /// Build from an already-numeric headway; `0` is replaced by the default.
    pub fn new(first_departure: ClockTime, frequency_minutes: u32, service_end: Option<ClockTime>) -> Self {
        let frequency_minutes = if frequency_minutes == 0 {
            log::warn!(
                "schedule departing {first_departure} has a zero headway; using {DEFAULT_FREQUENCY_MINUTES} min"
            );
            DEFAULT_FREQUENCY_MINUTES
        } else {
            frequency_minutes
        };
        Self { first_departure, frequency_minutes, service_end }
    }

    /// Build from a timetable line such as `("06:00", "Every 30 mins until 22:00")`.
    ///
    /// An unreadable frequency falls back to [`DEFAULT_FREQUENCY_MINUTES`];
    /// an unreadable `until` clause leaves `service_end` empty.
    pub fn from_description(first_departure: ClockTime, description: &str) -> Self {
        let frequency_minutes = parse_frequency_minutes(description).unwrap_or_else(|| {
            log::warn!(
                "cannot read a frequency from {description:?}; using {DEFAULT_FREQUENCY_MINUTES} min"
            );
            DEFAULT_FREQUENCY_MINUTES
        });
        Self {
            first_departure,
            frequency_minutes,
            service_end: parse_service_end(description),
        }
    }

    /// Headway guaranteed to be non-zero, even for entries whose public
    /// field was zeroed after construction.
    #[inline]
    pub fn headway_minutes(&self) -> u32 {
        if self.frequency_minutes == 0 {
            DEFAULT_FREQUENCY_MINUTES
        } else {
            self.frequency_minutes
        }
    }

    /// Number of departures between `first_departure` and `service_end`
    /// inclusive, or `None` when the timetable states no end.
    pub fn departures_per_day(&self) -> Option<u32> {
        let end = self.service_end?;
        let span = end.minutes_since(self.first_departure);
        if span < 0 {
            return Some(0);
        }
        Some(span as u32 / self.headway_minutes() + 1)
    }
}
