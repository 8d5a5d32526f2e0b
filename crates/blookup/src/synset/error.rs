use thiserror::Error;

#[derive(Error, Debug)]
pub enum KbError {
    #[error("Synset not found: {0}")]
    NotFound(String),

    #[error("Knowledge base error: {0}")]
    Backend(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Data error: {0}")]
    Data(#[from] serde_json::Error),
}

pub type KbResult<T> = Result<T, KbError>;
