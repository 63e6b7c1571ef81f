use thiserror::Error;

pub type Result<T> = std::result::Result<T, DispatchError>;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Invalid URI {uri}: {message}")]
    InvalidUri { uri: String, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("No tokio runtime available to drive the request")]
    NoRuntime,

    #[error("Call aborted")]
    Aborted,
}

impl DispatchError {
    /// Status code reported for this failure. Zero when no response arrived.
    pub fn status(&self) -> u16 {
        match self {
            DispatchError::Api { status, .. } => *status,
            _ => 0,
        }
    }
}

impl From<reqwest::Error> for DispatchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DispatchError::Timeout
        } else {
            DispatchError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for DispatchError {
    fn from(err: serde_json::Error) -> Self {
        DispatchError::Parse(err.to_string())
    }
}
