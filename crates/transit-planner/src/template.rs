//! Canned itinerary shapes, parameterized by endpoints and time.

use transit_core::{ClockTime, LegMode};

use crate::{Endpoint, ItineraryOption, Leg, LineLabel, PlannerError, PlannerResult};

/// Where a templated leg starts or ends.
#[derive(Clone, Debug, PartialEq)]
pub enum Waypoint {
    /// The rider's origin.
    Origin,
    /// The rider's destination.
    Destination,
    /// A transfer point without surveyed coordinates; placed halfway between
    /// origin and destination.
    Transfer(String),
    /// A transfer point at known coordinates.
    Fixed(Endpoint),
}

impl Waypoint {
    pub fn transfer(name: &str) -> Self {
        Waypoint::Transfer(name.to_owned())
    }

    fn resolve(&self, origin: &Endpoint, destination: &Endpoint) -> Endpoint {
        match self {
            Waypoint::Origin => origin.clone(),
            Waypoint::Destination => destination.clone(),
            Waypoint::Transfer(name) => {
                Endpoint::new(name.clone(), origin.coordinates.lerp(destination.coordinates, 0.5))
            }
            Waypoint::Fixed(e) => e.clone(),
        }
    }

    /// Same place, compared by role or name.
    fn connects_to(&self, other: &Waypoint) -> bool {
        match (self, other) {
            (Waypoint::Origin, Waypoint::Origin) | (Waypoint::Destination, Waypoint::Destination) => true,
            (Waypoint::Origin | Waypoint::Destination, _) | (_, Waypoint::Origin | Waypoint::Destination) => false,
            _ => self.label() == other.label(),
        }
    }

    fn label(&self) -> &str {
        match self {
            Waypoint::Origin => "<origin>",
            Waypoint::Destination => "<destination>",
            Waypoint::Transfer(name) => name,
            Waypoint::Fixed(e) => &e.name,
        }
    }
}

/// One leg of an [`ItineraryTemplate`].
#[derive(Clone, Debug, PartialEq)]
pub struct LegTemplate {
    pub mode: LegMode,
    pub name: String,
    pub line: Option<LineLabel>,
    pub from: Waypoint,
    pub to:   Waypoint,
    /// Minutes at the boarding point before the ride starts.
    pub wait_minutes: u32,
    /// Minutes in motion.
    pub ride_minutes: u32,
}

impl LegTemplate {
    pub fn walk(from: Waypoint, to: Waypoint, ride_minutes: u32) -> Self {
        Self {
            mode: LegMode::Walk,
            name: "Walk".into(),
            line: None,
            from,
            to,
            wait_minutes: 0,
            ride_minutes,
        }
    }

    pub fn transit(name: &str, line: LineLabel, from: Waypoint, to: Waypoint, ride_minutes: u32) -> Self {
        Self {
            mode: LegMode::Transit,
            name: name.into(),
            line: Some(line),
            from,
            to,
            wait_minutes: 0,
            ride_minutes,
        }
    }

    pub fn with_wait(mut self, wait_minutes: u32) -> Self {
        self.wait_minutes = wait_minutes;
        self
    }

    #[inline]
    fn duration_minutes(&self) -> u32 {
        self.wait_minutes + self.ride_minutes
    }
}

/// A fixed itinerary shape with constant aggregate metrics.
///
/// Leg times are derived from the planning time: the first leg departs
/// `start_offset_minutes` after it, and every later leg departs when the
/// previous one arrives.
#[derive(Clone, Debug, PartialEq)]
pub struct ItineraryTemplate {
    pub id: String,
    pub start_offset_minutes: u32,
    pub legs: Vec<LegTemplate>,
    pub total_distance_km: f32,
    pub price_units: f32,
    pub co2_saved_kg: f32,
}

impl ItineraryTemplate {
    /// Reject templates whose legs could not form a connected trip.
    pub fn validate(&self) -> PlannerResult<()> {
        if self.legs.is_empty() {
            return Err(PlannerError::EmptyTemplate { id: self.id.clone() });
        }
        for (index, leg) in self.legs.iter().enumerate() {
            if leg.mode.is_transit() && leg.line.is_none() {
                return Err(PlannerError::MissingLine { id: self.id.clone(), index });
            }
        }
        for (i, pair) in self.legs.windows(2).enumerate() {
            if !pair[0].to.connects_to(&pair[1].from) {
                return Err(PlannerError::DisconnectedLegs {
                    id:           self.id.clone(),
                    index:        i + 1,
                    start:        pair[1].from.label().to_owned(),
                    previous_end: pair[0].to.label().to_owned(),
                });
            }
        }
        Ok(())
    }

    /// Sum of wait and ride minutes over all legs.
    pub fn total_duration_minutes(&self) -> u32 {
        self.legs.iter().map(LegTemplate::duration_minutes).sum()
    }

    /// Build the concrete itinerary for a trip planned at `now`.
    pub fn instantiate(&self, origin: &Endpoint, destination: &Endpoint, now: ClockTime) -> ItineraryOption {
        let departure = now.add_minutes(self.start_offset_minutes as i64);

        let mut clock = departure;
        let legs: Vec<Leg> = self
            .legs
            .iter()
            .enumerate()
            .map(|(i, t)| {
                let duration_minutes = t.duration_minutes();
                let arrival = clock.add_minutes(duration_minutes as i64);
                let leg = Leg {
                    id:   format!("{}-leg-{}", self.id, i + 1),
                    mode: t.mode,
                    name: t.name.clone(),
                    line: t.line.clone(),
                    from: t.from.resolve(origin, destination),
                    to:   t.to.resolve(origin, destination),
                    departure: clock,
                    arrival,
                    duration_minutes,
                    wait_minutes: t.wait_minutes,
                };
                clock = arrival;
                leg
            })
            .collect();

        ItineraryOption {
            id:                     self.id.clone(),
            total_duration_minutes: self.total_duration_minutes(),
            total_distance_km:      self.total_distance_km,
            departure,
            arrival:                clock,
            price_units:            self.price_units,
            transfer_count:         legs.len().saturating_sub(1) as u32,
            co2_saved_kg:           self.co2_saved_kg,
            legs,
        }
    }
}

/// The three options offered for every trip.
///
/// 1. Two city lines with a transfer at the city center.
/// 2. One direct city line.
/// 3. A short walk to the main station, then the express bus.
pub fn default_templates() -> Vec<ItineraryTemplate> {
    vec![
        ItineraryTemplate {
            id: "option-1".into(),
            start_offset_minutes: 0,
            legs: vec![
                LegTemplate::transit(
                    "City Bus Line 1",
                    LineLabel::new("1", "#10B981"),
                    Waypoint::Origin,
                    Waypoint::transfer("City Center"),
                    15,
                ),
                LegTemplate::transit(
                    "City Bus Line 3",
                    LineLabel::new("3", "#3B82F6"),
                    Waypoint::transfer("City Center"),
                    Waypoint::Destination,
                    25,
                )
                .with_wait(5),
            ],
            total_distance_km: 12.0,
            price_units: 2.0,
            co2_saved_kg: 2.4,
        },
        ItineraryTemplate {
            id: "option-2".into(),
            start_offset_minutes: 0,
            legs: vec![LegTemplate::transit(
                "City Bus Line 2",
                LineLabel::new("2", "#EC4899"),
                Waypoint::Origin,
                Waypoint::Destination,
                55,
            )],
            total_distance_km: 10.0,
            price_units: 1.5,
            co2_saved_kg: 2.0,
        },
        ItineraryTemplate {
            id: "option-3".into(),
            start_offset_minutes: 10,
            legs: vec![
                LegTemplate::walk(Waypoint::Origin, Waypoint::transfer("Main Station"), 5),
                LegTemplate::transit(
                    "Express Bus",
                    LineLabel::new("E1", "#F59E0B"),
                    Waypoint::transfer("Main Station"),
                    Waypoint::Destination,
                    30,
                )
                .with_wait(5),
            ],
            total_distance_km: 15.0,
            price_units: 3.0,
            co2_saved_kg: 3.0,
        },
    ]
}
