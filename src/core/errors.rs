use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Network error: {0}")]
    Network(reqwest::Error),

    #[error("Request timeout after {}ms", .limit.as_millis())]
    Timeout { limit: Duration },

    #[error("Invalid element pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Fixture file not found: {}", .0.display())]
    FixtureMissing(PathBuf),

    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CheckResult<T> = Result<T, CheckError>;
