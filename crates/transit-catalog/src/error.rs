use thiserror::Error;

use transit_core::{CoreError, RouteId};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("route id must not be empty")]
    EmptyRouteId,

    #[error("route {0} is defined more than once")]
    DuplicateRoute(RouteId),

    #[error("route {route} has {count} stop(s); at least 2 are required")]
    TooFewStops { route: RouteId, count: usize },

    #[error("route {route}: first stop offset is {offset} min, expected 0")]
    FirstOffsetNotZero { route: RouteId, offset: u32 },

    #[error("route {route}: stop {index} offset decreases ({prev} -> {offset} min)")]
    NonMonotonicOffsets { route: RouteId, index: usize, prev: u32, offset: u32 },

    #[error("route {route}: last stop offset {last_offset} min does not match duration {duration} min")]
    DurationMismatch { route: RouteId, last_offset: u32, duration: u32 },

    #[error("route {0} has zero duration")]
    ZeroDuration(RouteId),

    #[error("route {0} has zero vehicle capacity")]
    ZeroCapacity(RouteId),

    #[error("route {0} has no schedule entries")]
    EmptySchedule(RouteId),

    #[error("{what} references unknown route {route}")]
    UnknownRoute { route: RouteId, what: &'static str },

    #[error("catalog parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
