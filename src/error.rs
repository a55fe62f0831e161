use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while loading or rendering a comparison.
///
/// Every variant is fatal for the binary; nothing is retried.
#[derive(Error, Debug)]
pub enum CompareError {
    #[error("failed to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read input: {0}")]
    Read(#[from] std::io::Error),

    #[error("line {line}: expected at least {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: cannot parse {token:?} as a number")]
    MalformedNumber { line: usize, token: String },

    #[error("line {line}: quaternion is zero or not finite")]
    InvalidQuaternion { line: usize },

    #[error("time span must be finite and positive, got {0}")]
    InvalidTimeSpan(f64),

    #[error("ground truth contains no pose records")]
    EmptyGroundTruth,

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("viewer error: {0}")]
    Viewer(#[from] rerun::RecordingStreamError),
}

pub type Result<T> = std::result::Result<T, CompareError>;

/// Parses one whitespace-separated token, tagging failures with the 1-based line number.
pub(crate) fn parse_f64(token: &str, line: usize) -> Result<f64> {
    token.parse::<f64>().map_err(|_| CompareError::MalformedNumber {
        line,
        token: token.to_string(),
    })
}
