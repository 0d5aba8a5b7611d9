use std::env;
use std::process::ExitCode;

use owo_colors::OwoColorize;
use url::Url;

use pagecheck::{report, validate, CheckConfig, CheckResult, ConsoleSink, Fetcher, HttpFetcher};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .init();

    // Ambient environment is read here only; everything downstream takes the
    // config as an explicit parameter.
    let config = match env::var("TARGET_URL") {
        Ok(url) => CheckConfig::playwright_dev().with_url(url),
        Err(_) => CheckConfig::playwright_dev(),
    };

    match run(&config).await {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("\n{} {e}\n", "✗ ERROR:".red());
            ExitCode::from(1)
        }
    }
}

async fn run(config: &CheckConfig) -> CheckResult<i32> {
    println!("{}", "Starting webpage validation...".dimmed());

    let url = Url::parse(&config.url)?;
    let fetcher = HttpFetcher::new(config.timeout)?;

    let response = fetcher.fetch(&url).await?;
    let validation = validate(
        &response.body,
        &config.required_headings,
        &config.required_elements,
    )?;

    Ok(report(&response, &validation, config, &mut ConsoleSink))
}
