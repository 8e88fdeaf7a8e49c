use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Field '{field}' of signal '{name}' is not numeric: {value}")]
    Coercion {
        name: String,
        field: &'static str,
        value: String,
    },
}
