//! Crate-level error types.

use std::fmt;

/// Errors produced by the arcam crate.
///
/// The controller's input operations are total and never fail; these
/// errors only come from configuration, trace loading, and platform glue.
#[derive(Debug)]
pub enum ArcamError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Options parsed fine but violate an orbit invariant.
    InvalidOptions(String),
    /// A recorded input trace line could not be decoded.
    TraceParse {
        /// 1-based line number in the trace file.
        line: usize,
        /// Decoder message.
        message: String,
    },
    /// Browser binding failure (missing window, listener registration).
    Web(String),
}

impl fmt::Display for ArcamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOptions(msg) => {
                write!(f, "invalid options: {msg}")
            }
            Self::TraceParse { line, message } => {
                write!(f, "trace parse error on line {line}: {message}")
            }
            Self::Web(msg) => write!(f, "web binding error: {msg}"),
        }
    }
}

impl std::error::Error for ArcamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ArcamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
