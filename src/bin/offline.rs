use std::io::ErrorKind;
use std::path::Path;
use std::process::ExitCode;

use owo_colors::OwoColorize;

use pagecheck::{report_offline, validate, CheckConfig, CheckError, CheckResult, ConsoleSink};

const FIXTURE_PATH: &str = "fixtures/example-response.html";

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .init();

    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("{} {e}\n", "✗ ERROR:".red());
            ExitCode::from(1)
        }
    }
}

fn run() -> CheckResult<i32> {
    println!(
        "{}\n",
        "Testing validation against the local fixture...".dimmed()
    );

    let fixture = Path::new(env!("CARGO_MANIFEST_DIR")).join(FIXTURE_PATH);
    let html = read_fixture(&fixture)?;

    let config = CheckConfig::playwright_dev();
    let validation = validate(
        &html,
        &config.required_headings,
        &config.required_elements,
    )?;

    Ok(report_offline(&validation, &fixture, &mut ConsoleSink))
}

fn read_fixture(path: &Path) -> CheckResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            CheckError::FixtureMissing(path.to_path_buf())
        } else {
            CheckError::Io(e)
        }
    })
}
