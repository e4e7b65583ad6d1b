//! Wall-clock time of day.
//!
//! # Design
//!
//! Every time the engine handles is a minute-resolution time of day with no
//! date attached: schedule departures (`"06:15"`), the caller-supplied "now",
//! and itinerary leg times.  `ClockTime` stores minutes since midnight in a
//! `u16`, so all arithmetic is exact integer math.
//!
//! Two kinds of arithmetic are provided:
//!
//! - [`ClockTime::add_minutes`] wraps past midnight (`23:40 + 45 = 00:25`),
//!   which is what itinerary legs want.
//! - [`ClockTime::minutes_since`] returns the raw signed difference with no
//!   day-wrap, which is what the vehicle simulator uses to place vehicles
//!   relative to a route's first departure.

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, CoreResult};

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 1_440;

/// A time of day with minute resolution, always in `00:00..=23:59`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct ClockTime(u16);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Build from hour and minute components.
    pub fn from_hm(hour: u32, minute: u32) -> CoreResult<Self> {
        if hour >= 24 || minute >= 60 {
            return Err(CoreError::ClockOutOfRange { hour, minute });
        }
        Ok(ClockTime((hour * 60 + minute) as u16))
    }

    /// Build from a minute count, wrapping into a single day.
    ///
    /// Negative inputs wrap backwards: `-15` is `23:45`.
    #[inline]
    pub fn from_minutes(total: i64) -> Self {
        ClockTime(total.rem_euclid(MINUTES_PER_DAY as i64) as u16)
    }

    #[inline]
    pub fn hour(self) -> u32 {
        self.0 as u32 / 60
    }

    #[inline]
    pub fn minute(self) -> u32 {
        self.0 as u32 % 60
    }

    /// Minutes elapsed since midnight, `0..1440`.
    #[inline]
    pub fn minutes_of_day(self) -> u32 {
        self.0 as u32
    }

    /// Wall-clock addition; wraps past `24:00` back to `00:00`.
    #[inline]
    pub fn add_minutes(self, minutes: i64) -> ClockTime {
        ClockTime::from_minutes(self.0 as i64 + minutes)
    }

    /// Signed minutes from `earlier` to `self` on the same calendar day.
    ///
    /// Not corrected for day wrap: `06:00.minutes_since(06:15) == -15`.
    #[inline]
    pub fn minutes_since(self, earlier: ClockTime) -> i32 {
        self.0 as i32 - earlier.0 as i32
    }
}

impl std::ops::Add<u32> for ClockTime {
    type Output = ClockTime;
    #[inline]
    fn add(self, rhs: u32) -> ClockTime {
        self.add_minutes(rhs as i64)
    }
}

impl fmt::Display for ClockTime {
    /// Zero-padded 24-hour `HH:MM`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = CoreError;

    /// Parse `"HH:MM"` (a single-digit hour such as `"6:15"` is accepted).
    fn from_str(s: &str) -> CoreResult<Self> {
        let bad = || CoreError::Parse(format!("invalid clock time {s:?}: expected HH:MM"));
        let (h, m) = s.trim().split_once(':').ok_or_else(bad)?;
        if m.len() != 2 {
            return Err(bad());
        }
        let hour: u32 = h.parse().map_err(|_| bad())?;
        let minute: u32 = m.parse().map_err(|_| bad())?;
        ClockTime::from_hm(hour, minute)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = CoreError;
    fn try_from(s: String) -> CoreResult<Self> {
        s.parse()
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> String {
        t.to_string()
    }
}
