use thiserror::Error;

/// Reasons an order fetch can fail. The data store reduces all of them to a
/// single error flag; the detail only reaches the logs.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("order source answered with HTTP {status}")]
    Status { status: u16 },
    #[error("malformed order payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("failed to read orders from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
