//! Strategy Errors

use thiserror::Error;

/// Errors that can occur while building, editing or reading a strategy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StrategyError {
    /// A constructor or computation received an argument outside its domain.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the argument.
        message: String,
    },

    /// Leg index outside `[0, len)`.
    #[error("Leg index {index} out of range for portfolio of {len} legs")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of legs in the portfolio.
        len: usize,
    },

    /// A stored record could not be turned into a leg.
    #[error("Malformed record at line {line}: {message}")]
    MalformedRecord {
        /// 1-based source line, 0 when the record was not read from text.
        line: usize,
        /// Details about the offending field.
        message: String,
    },
}

impl StrategyError {
    /// Shorthand for [`StrategyError::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Shorthand for [`StrategyError::MalformedRecord`].
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            message: message.into(),
        }
    }

    /// Attach a source line to a record error that was raised without one.
    #[must_use]
    pub fn at_line(self, line: usize) -> Self {
        match self {
            Self::MalformedRecord { message, .. } => Self::MalformedRecord { line, message },
            other => other,
        }
    }
}
