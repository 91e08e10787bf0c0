//! Unified error type for the conversion pipeline.

use thiserror::Error;

/// Errors produced while converting an uploaded document to PDF.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The uploaded file's extension is not in the supported set.
    #[error("Unsupported file type: {extension}")]
    UnsupportedType {
        /// The lower-cased extension that was rejected (may be empty).
        extension: String,
    },

    /// The multipart upload was malformed or incomplete.
    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    /// The engine exited with a non-zero code.
    #[error("Conversion failed with exit code {code}: {stderr}")]
    EngineFailed {
        /// The exit code.
        code: i32,
        /// Captured standard error output, truncated.
        stderr: String,
    },

    /// The engine exceeded the wall-clock timeout and was killed.
    #[error("Conversion timed out after {0} seconds")]
    Timeout(u64),

    /// The engine exited zero but produced no output file.
    #[error("Conversion failed: no output file was produced")]
    OutputMissing,

    /// The conversion slot semaphore was closed.
    #[error("Conversion queue is shut down")]
    QueueClosed,

    /// IO error during staging or readback.
    #[error("IO error during conversion: {0}")]
    Io(#[from] std::io::Error),
}
