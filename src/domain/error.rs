//! Error types for the ingestion edge.
//!
//! The engine core never fails: malformed payloads coerce to empty or
//! zero values. Errors only arise when loading datasets from disk.

/// Top-level error type for orderdesk.
#[derive(Debug, thiserror::Error)]
pub enum OrderdeskError {
    #[error("failed to read {path}: {reason}")]
    DataRead { path: String, reason: String },

    #[error("invalid dataset JSON in {path}: {reason}")]
    DataParse { path: String, reason: String },

    #[error("CSV parse error in {path}: {reason}")]
    CsvParse { path: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&OrderdeskError> for std::process::ExitCode {
    fn from(err: &OrderdeskError) -> Self {
        let code: u8 = match err {
            OrderdeskError::Io(_) => 1,
            OrderdeskError::DataRead { .. } => 3,
            OrderdeskError::DataParse { .. } | OrderdeskError::CsvParse { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
