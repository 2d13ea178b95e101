//! Error types for the engine and its configuration.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("engine has not been initialized")]
    Uninitialized,

    #[error("cell ({row}, {col}) is outside a {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("pattern {name} ({height}x{width}) does not fit in a {rows}x{cols} grid")]
    PatternTooLarge {
        name: &'static str,
        height: usize,
        width: usize,
        rows: usize,
        cols: usize,
    },

    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
