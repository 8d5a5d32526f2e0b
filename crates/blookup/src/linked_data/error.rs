use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinkedDataError {
    #[error("SPARQL request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed SPARQL response: {0}")]
    Malformed(String),
}

pub type LinkedDataResult<T> = Result<T, LinkedDataError>;
