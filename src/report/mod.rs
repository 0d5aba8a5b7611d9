mod sink;


pub use sink::{ConsoleSink, MemorySink, ReportSink};

use owo_colors::OwoColorize;
use std::path::Path;

use crate::core::CheckConfig;
use crate::fetch::PageResponse;
use crate::validate::ValidationResult;

const BANNER_WIDTH: usize = 70;

/// Formats the full live-check report and derives the process exit code:
/// 1 when any content error was recorded or the status was not 200, else 0.
/// Slow responses only warn and never affect the exit code.
pub fn report(
    response: &PageResponse,
    validation: &ValidationResult,
    config: &CheckConfig,
    sink: &mut dyn ReportSink,
) -> i32 {
    sink.line("");
    sink.line(&"=".repeat(BANNER_WIDTH));
    sink.line(&"Webpage Validation Report".blue().to_string());
    sink.line(&"=".repeat(BANNER_WIDTH));
    sink.line(&format!("URL: {}", config.url).dimmed().to_string());
    sink.line(
        &format!("Timestamp: {}", response.timestamp.to_rfc3339())
            .dimmed()
            .to_string(),
    );
    sink.line("");

    sink.line(&"► HTTP Status".blue().to_string());
    let status_marker = if response.status == 200 {
        "✓".green().to_string()
    } else {
        "✗".red().to_string()
    };
    sink.line(&format!(
        "  {} Status: {} {}",
        status_marker, response.status, response.status_message
    ));

    sink.line("");
    sink.line(&"► Response Time".blue().to_string());
    let elapsed_ms = response.response_time.as_millis();
    if response.response_time < config.max_response_time {
        sink.line(&format!("  {} Response time: {}ms", "✓".green(), elapsed_ms));
    } else {
        sink.line(&format!(
            "  {} Response time: {}ms (threshold: {}ms)",
            "⚠".yellow(),
            elapsed_ms,
            config.max_response_time.as_millis()
        ));
    }

    sink.line("");
    sink.line(&"► Content Validation".blue().to_string());
    sink.line("  Headings:");
    write_headings(validation, "    ", sink);
    sink.line("  Elements:");
    write_elements(validation, "    ", sink);

    sink.line("");
    sink.line(&"► Summary".blue().to_string());
    let has_errors = validation.has_errors() || response.status != 200;
    let has_warnings = response.response_time >= config.max_response_time;
    write_summary(validation, has_errors, sink);

    if has_warnings {
        sink.line(&format!(
            "  {} - Slow response time detected",
            "⚠ WARNING".yellow()
        ));
    }

    sink.line(&format!("{}\n", "=".repeat(BANNER_WIDTH)));

    if has_errors {
        1
    } else {
        0
    }
}

/// Offline-harness report: same shape minus the HTTP status and timing
/// sections. Exit code 1 iff any content error was recorded.
pub fn report_offline(
    validation: &ValidationResult,
    fixture: &Path,
    sink: &mut dyn ReportSink,
) -> i32 {
    sink.line(&"=".repeat(BANNER_WIDTH));
    sink.line(&"Local Fixture Validation Results".blue().to_string());
    sink.line(&"=".repeat(BANNER_WIDTH));
    sink.line(&format!("File: {}", fixture.display()).dimmed().to_string());
    sink.line("");

    sink.line(&"► Required Headings".blue().to_string());
    write_headings(validation, "  ", sink);

    sink.line("");
    sink.line(&"► Required Elements".blue().to_string());
    write_elements(validation, "  ", sink);

    sink.line("");
    sink.line(&"► Test Result".blue().to_string());
    write_summary(validation, validation.has_errors(), sink);
    sink.line(&format!("{}\n", "=".repeat(BANNER_WIDTH)));

    if validation.has_errors() {
        1
    } else {
        0
    }
}

fn write_headings(validation: &ValidationResult, indent: &str, sink: &mut dyn ReportSink) {
    for (heading, found) in &validation.headings {
        if *found {
            sink.line(&format!("{indent}{} \"{heading}\"", "✓".green()));
        } else {
            sink.line(&format!(
                "{indent}{} \"{heading}\" {}",
                "✗".red(),
                "(MISSING)".red()
            ));
        }
    }
}

fn write_elements(validation: &ValidationResult, indent: &str, sink: &mut dyn ReportSink) {
    for (pattern, count) in &validation.elements {
        if *count > 0 {
            sink.line(&format!(
                "{indent}{} Found {count} instance(s) of {pattern}",
                "✓".green()
            ));
        } else {
            sink.line(&format!(
                "{indent}{} Missing required element: {pattern}",
                "✗".red()
            ));
        }
    }
}

fn write_summary(validation: &ValidationResult, has_errors: bool, sink: &mut dyn ReportSink) {
    if has_errors {
        sink.line(&format!(
            "  {} - {} error(s) found",
            "✗ FAILED".red(),
            validation.errors.len()
        ));
        for error in &validation.errors {
            sink.line(&format!("    {} {error}", "•".red()));
        }
    } else {
        sink.line(&format!(
            "  {} - All validations successful",
            "✓ PASSED".green()
        ));
    }
}
