use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("feed configuration error: {0}")]
    Config(String),

    #[error("route catalog is empty")]
    EmptyCatalog,
}

pub type SimResult<T> = Result<T, SimError>;
