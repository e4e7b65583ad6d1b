//! Plain data row types written by output backends.

use transit_core::ClockTime;
use transit_planner::ItineraryOption;
use transit_sim::VehicleState;

/// One vehicle's state at a feed tick.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleSnapshotRow {
    pub tick:                 u64,
    pub time:                 ClockTime,
    pub vehicle_id:           String,
    pub route_id:             String,
    pub lat:                  f32,
    pub lon:                  f32,
    pub current_stop:         String,
    pub next_stop:            String,
    pub minutes_to_next_stop: u32,
    pub occupancy_count:      u32,
    pub occupancy_level:      &'static str,
    pub delay_minutes:        u32,
}

impl VehicleSnapshotRow {
    pub fn from_state(tick: u64, time: ClockTime, v: &VehicleState) -> Self {
        Self {
            tick,
            time,
            vehicle_id:           v.id.to_string(),
            route_id:             v.route_id.to_string(),
            lat:                  v.position.lat,
            lon:                  v.position.lon,
            current_stop:         v.current_stop.clone(),
            next_stop:            v.next_stop.clone(),
            minutes_to_next_stop: v.minutes_to_next_stop,
            occupancy_count:      v.occupancy_count,
            occupancy_level:      v.occupancy_level.as_str(),
            delay_minutes:        v.delay_minutes,
        }
    }
}

/// Summary of one feed tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:     u64,
    pub time:     ClockTime,
    pub vehicles: u64,
}

/// One leg of a planned itinerary, with the itinerary's totals repeated so
/// each row stands alone.
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryRow {
    pub itinerary_id:           String,
    pub leg_index:              u32,
    pub mode:                   &'static str,
    pub name:                   String,
    /// Empty for walking legs.
    pub line:                   String,
    pub from:                   String,
    pub to:                     String,
    pub departure:              ClockTime,
    pub arrival:                ClockTime,
    pub duration_minutes:       u32,
    pub total_duration_minutes: u32,
    pub price_units:            f32,
    pub transfer_count:         u32,
}

impl ItineraryRow {
    /// One row per leg, in leg order.
    pub fn from_option(option: &ItineraryOption) -> Vec<Self> {
        option
            .legs
            .iter()
            .enumerate()
            .map(|(i, leg)| Self {
                itinerary_id:           option.id.clone(),
                leg_index:              i as u32,
                mode:                   leg.mode.as_str(),
                name:                   leg.name.clone(),
                line:                   leg.line.as_ref().map(|l| l.number.clone()).unwrap_or_default(),
                from:                   leg.from.name.clone(),
                to:                     leg.to.name.clone(),
                departure:              leg.departure,
                arrival:                leg.arrival,
                duration_minutes:       leg.duration_minutes,
                total_duration_minutes: option.total_duration_minutes,
                price_units:            option.price_units,
                transfer_count:         option.transfer_count,
            })
            .collect()
    }
}
