use thiserror::Error;

#[derive(Debug, Error)]
pub enum StationSourceError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse station JSON from {url}")]
    JsonParse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
