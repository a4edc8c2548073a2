//! Error types for the divergence checker

use std::path::PathBuf;

/// Errors raised while loading a move database or checking its positions
#[derive(thiserror::Error, Debug)]
pub enum CheckError {
    /// Database file is missing, unreadable, or not UTF-8
    #[error("failed to read move database {}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content is not a JSON array of `{fen, moves}` objects
    #[error("failed to parse move database {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The oracle rejected a FEN string
    #[error("invalid position (fen {fen}): {reason}")]
    Position { fen: String, reason: String },

    /// Report output could not be written
    #[error("failed to write report")]
    Output(#[from] std::io::Error),
}

impl CheckError {
    pub fn position(fen: &str, reason: impl ToString) -> Self {
        Self::Position {
            fen: fen.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for checker operations
pub type CheckResult<T> = Result<T, CheckError>;
