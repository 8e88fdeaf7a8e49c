use core_types::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PresentError {
    /// A ranking field is present but not numeric.
    #[error("Invalid signal: {0}")]
    Signal(#[from] CoreError),

    /// None of the retained signals carries a displayed column.
    #[error("No retained signal has the '{0}' column")]
    MissingField(&'static str),

    #[error("Failed to serialize signals for the debug dump: {0}")]
    Serialization(#[from] serde_json::Error),
}
