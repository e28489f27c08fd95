use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoreErrorCode {
    CorruptImage,
    UnsupportedVariant,
    OutOfRange,
    InvalidLength,
    Io,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No candidate slot validated, or the slot counters contradict each other.
    #[error("corrupt image: {0}")]
    CorruptImage(String),

    #[error("unsupported variant: {0}")]
    UnsupportedVariant(String),

    #[error("{what} index {index} out of range (capacity {capacity})")]
    OutOfRange {
        what: &'static str,
        index: usize,
        capacity: usize,
    },

    #[error("invalid length for {what}: expected {expected} bytes, got {actual}")]
    InvalidLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("I/O error: {0}")]
    Io(String),
}

impl CoreError {
    pub fn code(&self) -> CoreErrorCode {
        match self {
            Self::CorruptImage(_) => CoreErrorCode::CorruptImage,
            Self::UnsupportedVariant(_) => CoreErrorCode::UnsupportedVariant,
            Self::OutOfRange { .. } => CoreErrorCode::OutOfRange,
            Self::InvalidLength { .. } => CoreErrorCode::InvalidLength,
            Self::Io(_) => CoreErrorCode::Io,
        }
    }

    pub fn corrupt(msg: impl Into<String>) -> Self {
        Self::CorruptImage(msg.into())
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::UnsupportedVariant(msg.into())
    }

    pub fn out_of_range(what: &'static str, index: usize, capacity: usize) -> Self {
        Self::OutOfRange {
            what,
            index,
            capacity,
        }
    }

    /// Fails with `OutOfRange` unless `index < capacity`.
    pub fn check_index(what: &'static str, index: usize, capacity: usize) -> Result<(), Self> {
        if index < capacity {
            Ok(())
        } else {
            Err(Self::out_of_range(what, index, capacity))
        }
    }
}

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
