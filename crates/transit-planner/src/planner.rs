//! The `TripPlanner` trait and the template-driven implementation.

use transit_core::ClockTime;

use crate::template::default_templates;
use crate::{Endpoint, ItineraryOption, ItineraryTemplate, PlannerError, PlannerResult};

/// Pluggable trip-planning strategy.
///
/// Implementations take the planning time as an argument rather than reading
/// a clock, so the same inputs always give the same options.
///
/// # Example
///
/// ```rust,ignore
/// struct WalkOnly;
///
/// impl TripPlanner for WalkOnly {
///     fn plan(&self, origin: &Endpoint, destination: &Endpoint, now: ClockTime) -> Vec<ItineraryOption> {
///         let minutes = (origin.coordinates.distance_m(destination.coordinates) / 80.0) as u32;
///         vec![single_walk(origin, destination, now, minutes)]
///     }
/// }
/// ```
pub trait TripPlanner: Send + Sync {
    /// Itinerary options from `origin` to `destination` leaving at or after
    /// `now`.  An empty `Vec` means no option was found.
    fn plan(&self, origin: &Endpoint, destination: &Endpoint, now: ClockTime) -> Vec<ItineraryOption>;
}

/// Offers the same fixed itinerary shapes for every trip, timed from `now`.
///
/// Endpoint names and coordinates are copied into the legs; they are not
/// checked against any catalog, and empty names are accepted.
#[derive(Clone, Debug)]
pub struct TemplatePlanner {
    templates: Vec<ItineraryTemplate>,
}

impl TemplatePlanner {
    /// Validate `templates` and build a planner that offers them in order.
    pub fn new(templates: Vec<ItineraryTemplate>) -> PlannerResult<Self> {
        for (i, template) in templates.iter().enumerate() {
            template.validate()?;
            if templates[..i].iter().any(|t| t.id == template.id) {
                return Err(PlannerError::DuplicateTemplate(template.id.clone()));
            }
        }
        Ok(Self { templates })
    }

    pub fn templates(&self) -> &[ItineraryTemplate] {
        &self.templates
    }
}

impl Default for TemplatePlanner {
    /// The three built-in options.
    fn default() -> Self {
        Self { templates: default_templates() }
    }
}

impl TripPlanner for TemplatePlanner {
    fn plan(&self, origin: &Endpoint, destination: &Endpoint, now: ClockTime) -> Vec<ItineraryOption> {
        log::debug!(
            "planning {:?} -> {:?} at {now} from {} template(s)",
            origin.name,
            destination.name,
            self.templates.len()
        );
        self.templates
            .iter()
            .map(|t| t.instantiate(origin, destination, now))
            .collect()
    }
}

/// Plan with the built-in templates.
pub fn plan_trip(origin: &Endpoint, destination: &Endpoint, now: ClockTime) -> Vec<ItineraryOption> {
    TemplatePlanner::default().plan(origin, destination, now)
}
