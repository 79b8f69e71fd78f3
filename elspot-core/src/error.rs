use thiserror::Error;

/// Unified error type for the elspot workspace.
///
/// This covers page-source failures, hard data-format violations, cache store
/// problems, and failures of the remote reads protected by the cache
/// middleware. Recoverable conditions (malformed cells, empty pages, inverted
/// ranges, offline cache misses) are deliberately *not* errors; they degrade
/// to fallback or empty values and are reported through diagnostics instead.
#[derive(Debug, Error)]
pub enum ElspotError {
    /// The page-rendering session failed (navigation, rendering, teardown).
    #[error("page source failed: {msg}")]
    Source {
        /// Human-readable failure message.
        msg: String,
    },

    /// Issues with returned data that break a hard format assumption
    /// (e.g. a day header that does not parse as `dd-MM-yyyy`).
    #[error("data issue: {0}")]
    Data(String),

    /// The cache store could not read or write an entry.
    #[error("cache store failed: {0}")]
    Cache(String),

    /// A remote read protected by the cache middleware failed.
    #[error("{resource} fetch failed: {msg}")]
    Remote {
        /// Name of the remote resource that failed.
        resource: String,
        /// Human-readable error message.
        msg: String,
    },
}

impl ElspotError {
    /// Helper: build a `Source` error with the given message.
    pub fn source_failed(msg: impl Into<String>) -> Self {
        Self::Source { msg: msg.into() }
    }

    /// Helper: build a `Remote` error with the resource name and message.
    pub fn remote(resource: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Remote {
            resource: resource.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `Cache` error with the given message.
    pub fn cache(msg: impl Into<String>) -> Self {
        Self::Cache(msg.into())
    }
}

impl From<chrono::ParseError> for ElspotError {
    fn from(e: chrono::ParseError) -> Self {
        Self::Data(e.to_string())
    }
}

impl From<serde_json::Error> for ElspotError {
    fn from(e: serde_json::Error) -> Self {
        Self::Cache(e.to_string())
    }
}

impl From<std::io::Error> for ElspotError {
    fn from(e: std::io::Error) -> Self {
        Self::Cache(e.to_string())
    }
}
