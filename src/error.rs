use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetSide {
    Base,
    Live,
}

impl fmt::Display for DatasetSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSide::Base => f.write_str("base"),
            DatasetSide::Live => f.write_str("live"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No primary key selected.")]
    MissingPrimaryKey,

    #[error("Primary key column \"{column}\" not found in {side} dataset.")]
    KeyColumnNotFound { column: String, side: DatasetSide },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, CompareError>;
