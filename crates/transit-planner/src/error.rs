use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("itinerary template {id:?} has no legs")]
    EmptyTemplate { id: String },

    #[error("itinerary template {id:?}: leg {index} starts at {start} but the previous leg ends at {previous_end}")]
    DisconnectedLegs {
        id:           String,
        index:        usize,
        start:        String,
        previous_end: String,
    },

    #[error("itinerary template {id:?}: transit leg {index} has no line label")]
    MissingLine { id: String, index: usize },

    #[error("duplicate itinerary template id {0:?}")]
    DuplicateTemplate(String),
}

pub type PlannerResult<T> = Result<T, PlannerError>;
