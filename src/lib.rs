pub mod core;
pub mod fetch;
pub mod report;
pub mod validate;

pub use self::core::{CheckConfig, CheckError, CheckResult};
pub use fetch::{Fetcher, HttpFetcher, PageResponse};
pub use report::{report, report_offline, ConsoleSink, MemorySink, ReportSink};
pub use validate::{validate, ValidationResult};
