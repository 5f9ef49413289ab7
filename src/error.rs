use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("line {line}: card line outside any section")]
    CardOutsideSection { line: usize },

    #[error("line {line}: expected at least quantity, type and series number in {text:?}")]
    TooFewTokens { line: usize, text: String },

    #[error("line {line}: invalid quantity {token:?}")]
    InvalidQuantity { line: usize, token: String },

    #[error("line {line}: invalid stated total {value:?}")]
    InvalidStatedTotal { line: usize, value: String },

    #[error("Invalid exception mapping: {0}")]
    ExceptionConfig(String),

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, DeckError>;
