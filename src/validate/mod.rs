mod result;

#[cfg(test)]
mod tests;

pub use result::ValidationResult;

use regex::Regex;

use crate::core::CheckResult;

/// Regex-escapes a required heading, then widens straight quotes so the
/// heading also matches its common HTML-entity encodings.
fn entity_tolerant(heading: &str) -> String {
    regex::escape(heading)
        .replace('\'', "(?:'|&#x27;|&#39;)")
        .replace('"', r#"(?:"|&quot;)"#)
}

/// Checks an HTML body against required headings and element patterns.
///
/// Headings match any `<h1>`..`<h6>` tag whose trimmed text content equals
/// the required string, case-insensitively. Element entries are regex sources
/// counted globally against the raw HTML. Pure: same inputs, same result.
pub fn validate(
    html: &str,
    required_headings: &[String],
    required_elements: &[String],
) -> CheckResult<ValidationResult> {
    let mut results = ValidationResult::default();

    for heading in required_headings {
        let pattern = format!(
            r"(?i)<h[1-6][^>]*>\s*{}\s*</h[1-6]>",
            entity_tolerant(heading)
        );
        let found = Regex::new(&pattern)?.is_match(html);
        results.headings.push((heading.clone(), found));

        if !found {
            results.errors.push(format!("Missing heading: \"{heading}\""));
        }
    }

    for element in required_elements {
        let count = Regex::new(element)?.find_iter(html).count();
        results.elements.push((element.clone(), count));

        if count == 0 {
            results
                .errors
                .push(format!("Missing required element: {element}"));
        }
    }

    Ok(results)
}
