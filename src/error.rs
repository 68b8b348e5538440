use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("height {height_cm}cm is out of valid range (50-250cm)")]
    InvalidHeight { height_cm: f32 },

    #[error("expected {expected} pose landmarks, found {found}")]
    InsufficientLandmarks { expected: usize, found: usize },

    #[error(
        "could not detect body in photo; stand 6-8 feet from the camera \
         with the full body visible"
    )]
    NoBodyDetected,

    #[error("pose detector error: {0}")]
    Detector(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("landmark deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
