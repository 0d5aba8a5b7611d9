mod config;
mod errors;

pub use config::CheckConfig;
pub use errors::{CheckError, CheckResult};
