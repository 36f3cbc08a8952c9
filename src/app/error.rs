use thiserror::Error;

/// Everything that can go wrong between reading the user's input and
/// holding a decoded schedule.
#[derive(Error, Debug)]
pub enum FetchError {
    /// City or country was blank after trimming
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// Offset pushes the target date outside the representable calendar
    #[error("date offset of {0} days is out of range")]
    DateOutOfRange(i64),

    /// The request did not complete within the client timeout
    #[error("request timed out")]
    Timeout,

    /// Connection refused, DNS failure, broken body stream...
    #[error("network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status
    #[error("HTTP status {0}")]
    HttpError(u16),

    /// Body was not the JSON we expect
    #[error("failed to parse response: {0}")]
    ParseError(String),

    /// Envelope `code` was not 200; carries the API's status text
    #[error("{0}")]
    ApiError(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::ParseError(e.to_string())
    }
}
