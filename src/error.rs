use std::path::PathBuf;
use thiserror::Error;

/// Failure modes of a credits run.
///
/// Only `OutputWriteFailure` and `Config` end a run; the rest are recorded
/// against a single input or reference and the run continues.
#[derive(Debug, Error)]
pub enum CreditsError {
    #[error("cannot read input {}: {source}", path.display())]
    UnreadableInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid GitHub URL: {0}")]
    MalformedReference(String),

    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    NotFound { url: String, status: u16 },

    #[error("no license file found for {0}")]
    AllCandidatesExhausted(String),

    #[error("cannot write output {}: {source}", path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}
