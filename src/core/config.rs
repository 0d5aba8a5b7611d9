use std::time::Duration;

pub const DEFAULT_TARGET: &str = "https://playwright.dev/";

/// Per-run check settings. Built once in `main` and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub url: String,
    pub timeout: Duration,
    /// Responses slower than this produce a warning, not an error.
    pub max_response_time: Duration,
    pub required_headings: Vec<String>,
    /// Regex sources matched against the raw HTML.
    pub required_elements: Vec<String>,
}

impl CheckConfig {
    /// Stock configuration for the playwright.dev landing page.
    pub fn playwright_dev() -> Self {
        Self {
            url: DEFAULT_TARGET.to_string(),
            timeout: Duration::from_secs(10),
            max_response_time: Duration::from_secs(3),
            required_headings: vec![
                "Chosen by companies and open source projects".to_string(),
            ],
            required_elements: vec![
                "class=getStarted_Sjon".to_string(),
                r#"class="navbar__item navbar__link""#.to_string(),
            ],
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}
