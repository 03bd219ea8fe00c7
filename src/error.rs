//! Error types.

use std::path::PathBuf;

/// Error returned when building the vocabulary or frequency table fails.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    /// A file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A frequency record whose count is not an integer.
    #[error("{}:{line}: invalid frequency {value:?} for {word:?}", path.display())]
    InvalidFrequency {
        path: PathBuf,
        line: usize,
        word: String,
        value: String,
    },
    /// The word automaton could not be built.
    #[error("failed to build vocabulary automaton: {0}")]
    Automaton(#[from] aho_corasick::BuildError),
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Error returned by [`crate::client::Client`].
#[cfg(feature = "client")]
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// The request could not be sent or the body could not be decoded.
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("{url} answered {status}: {body}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },
}
