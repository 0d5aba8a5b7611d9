use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::time::Duration;

/// Result of a single page fetch. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct PageResponse {
    pub status: u16,
    pub status_message: String,
    /// Wall-clock time from request start until the full body was received.
    pub response_time: Duration,
    pub body: String,
    pub headers: HashMap<String, String>,
    pub timestamp: DateTime<Utc>,
}
