use thiserror::Error;

pub type Result<T> = std::result::Result<T, XpyError>;

#[derive(Error, Debug)]
pub enum XpyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Telemetry error: {0}")]
    Telemetry(String),
}
