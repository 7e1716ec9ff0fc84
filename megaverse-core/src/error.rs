use thiserror::Error;

#[derive(Debug, Error)]
pub enum MegaverseError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed goal map: {0}")]
    MalformedGrid(String),

    #[error("Invalid soloon color: {0}")]
    InvalidColor(String),

    #[error("Invalid cometh direction: {0}")]
    InvalidDirection(String),

    #[error("Unknown celestial body type: {0}")]
    UnknownLabel(String),
}
