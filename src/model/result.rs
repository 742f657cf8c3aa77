use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("request to `{url}` failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("`{url}` answered with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("malformed payload from `{url}`")]
    Payload {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed page from `{path}`: {detail}")]
    PageShape { path: String, detail: String },

    #[error("{record} record has no '{field}' field")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to render report: {0}")]
    Report(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
