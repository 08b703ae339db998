use thiserror::Error as ThisError;

use crate::grid::Point;

/// Everything that can go wrong outside the search itself.
///
/// An unreachable leg is not an error: it is reported as an infeasible
/// outcome by the search engine.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("{count} points given, at most {max} are supported")]
    TooManyPoints { count: usize, max: usize },
    #[error("expected {expected} points, found {found}")]
    MissingPoints { expected: usize, found: usize },
    #[error("point {index} at {point} lies outside the supported coordinate range")]
    OutOfRange { index: usize, point: Point },
    #[error("logger init failed: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
