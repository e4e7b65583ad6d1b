//! Timeline arithmetic: where along its stop sequence is a vehicle?

use transit_catalog::Stop;

/// Number of vehicles simultaneously in service on a route: one departs every
/// `headway_minutes`, and each needs `duration_minutes` to finish a trip.
///
/// `headway_minutes` of zero is treated as one minute.
#[inline]
pub fn vehicle_count(duration_minutes: u32, headway_minutes: u32) -> u32 {
    duration_minutes / headway_minutes.max(1) + 1
}

/// Position of vehicle `ordinal` on the route timeline, in `[0, duration)`.
///
/// `minutes_since_first_departure` may be negative (before the first
/// departure of the day); the Euclidean remainder keeps the result in range.
/// Returns 0 for a zero duration.
#[inline]
pub fn normalize_offset(
    minutes_since_first_departure: i32,
    ordinal:                       u32,
    headway_minutes:               u32,
    duration_minutes:              u32,
) -> u32 {
    if duration_minutes == 0 {
        return 0;
    }
    let raw = minutes_since_first_departure as i64 + ordinal as i64 * headway_minutes as i64;
    raw.rem_euclid(duration_minutes as i64) as u32
}

/// Where a vehicle sits relative to the stop list.
///
/// `current == next` means the vehicle is standing at that stop (its offset
/// equals the stop's offset exactly, or it has reached the end of the line);
/// `progress` is then 0.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SegmentPosition {
    /// Index of the stop most recently reached.
    pub current: usize,
    /// Index of the stop being approached.
    pub next: usize,
    /// Fraction of the `current → next` segment covered, in `[0, 1]`.
    pub progress: f32,
}

impl SegmentPosition {
    #[inline]
    fn at_stop(index: usize) -> Self {
        Self { current: index, next: index, progress: 0.0 }
    }

    #[inline]
    pub fn is_at_stop(&self) -> bool {
        self.current == self.next
    }
}

/// Locate `offset` (minutes since route start) on the stop timeline.
///
/// The vehicle is between the last stop whose offset is `<= offset` and the
/// first stop whose offset is `> offset`.  A zero-length segment yields
/// progress 0 rather than dividing by zero.  Returns `None` only for an empty
/// stop list.
///
/// When `offset` equals a stop's offset exactly, `next` names that same stop,
/// not the following one.  This holds at offset 0 too: a vehicle leaving the
/// origin reports the origin as both current and next stop until a minute
/// has passed.
pub fn locate_segment(stops: &[Stop], offset: u32) -> Option<SegmentPosition> {
    let last = stops.len().checked_sub(1)?;

    // partition_point returns the first index whose offset is > `offset`.
    let first_after = stops.partition_point(|s| s.time_offset_minutes <= offset);

    if first_after == 0 {
        // Only possible when the first stop's offset is > 0; such a route
        // never passes validation.  Park the vehicle at the first stop.
        return Some(SegmentPosition::at_stop(0));
    }

    let current = first_after - 1;
    if first_after > last || stops[current].time_offset_minutes == offset {
        return Some(SegmentPosition::at_stop(current));
    }

    let start = stops[current].time_offset_minutes;
    let end = stops[first_after].time_offset_minutes;
    let span = end - start;
    let progress = if span == 0 {
        0.0
    } else {
        ((offset - start) as f32 / span as f32).clamp(0.0, 1.0)
    };

    Some(SegmentPosition { current, next: first_after, progress })
}

/// Minutes until the vehicle reaches `pos.next`, never less than 1.
///
/// A vehicle standing at a stop reports 1: "arriving in 0 minutes" reads as
/// already departed on a rider display.
pub fn minutes_to_next_stop(stops: &[Stop], pos: SegmentPosition, offset: u32) -> u32 {
    if pos.is_at_stop() {
        return 1;
    }
    let start = stops[pos.current].time_offset_minutes;
    let end = stops[pos.next].time_offset_minutes;
    let span = end.saturating_sub(start);
    let remaining = end.saturating_sub(offset);
    let eta = if span == 0 { 0 } else { remaining % span };
    eta.max(1)
}
