use thiserror::Error;

#[derive(Debug, Error)]
pub enum CharterError {
    #[error("Unsupported audio format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid song duration: {0}")]
    InvalidDuration(f64),

    #[error("Invalid tempo: {0} BPM")]
    InvalidBpm(f64),

    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("Unknown chart format: {0}")]
    UnknownFormat(String),

    #[error("Failed to read WAV file: {0}")]
    Wav(#[from] hound::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CharterError>;
