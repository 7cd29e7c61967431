use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("Rarity must be between 1 and 10, got {0}")]
    InvalidRarity(i32),

    #[error("Invalid start height {0:?}. Expected 'number' or 'number to number'")]
    InvalidStartHeight(String),

    #[error("Unknown terrain adaptation {0:?}")]
    InvalidTerrainAdaptation(String),

    #[error("Invalid integer input: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Substituted template is not valid JSON: {0}")]
    MalformedTemplate(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GenError>;
