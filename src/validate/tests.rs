use super::*;
use crate::core::CheckError;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

const PAGE: &str = r#"
<html>
<body>
  <h1 class="hero">  Welcome to the docs  </h1>
  <h2>Chosen by companies and open source projects</h2>
  <a class="navbar__item navbar__link" href="/docs">Docs</a>
  <a class="navbar__item navbar__link" href="/api">API</a>
  <a class="navbar__item navbar__link" href="/community">Community</a>
</body>
</html>
"#;

#[test]
fn test_heading_present() {
    let result = validate(PAGE, &strings(&["Welcome to the docs"]), &[]).unwrap();

    assert_eq!(result.heading_found("Welcome to the docs"), Some(true));
    assert!(result.errors.is_empty());
}

#[test]
fn test_heading_match_is_case_insensitive() {
    let result = validate(PAGE, &strings(&["WELCOME TO THE DOCS"]), &[]).unwrap();
    assert_eq!(result.heading_found("WELCOME TO THE DOCS"), Some(true));
}

#[test]
fn test_heading_missing_records_error() {
    let result = validate(PAGE, &strings(&["Pricing"]), &[]).unwrap();

    assert_eq!(result.heading_found("Pricing"), Some(false));
    assert_eq!(result.errors, vec!["Missing heading: \"Pricing\"".to_string()]);
}

#[test]
fn test_heading_text_outside_heading_tag_does_not_count() {
    let html = "<p>Welcome to the docs</p>";
    let result = validate(html, &strings(&["Welcome to the docs"]), &[]).unwrap();
    assert_eq!(result.heading_found("Welcome to the docs"), Some(false));
}

#[test]
fn test_heading_metacharacters_match_literally() {
    let html = "<h2>Q+A (live)</h2>";
    let result = validate(html, &strings(&["Q+A (live)"]), &[]).unwrap();
    assert_eq!(result.heading_found("Q+A (live)"), Some(true));
}

#[test]
fn test_apostrophe_matches_entity_encodings() {
    let required = strings(&["Don't panic"]);

    for html in [
        "<h3>Don't panic</h3>",
        "<h3>Don&#x27;t panic</h3>",
        "<h3>Don&#39;t panic</h3>",
    ] {
        let result = validate(html, &required, &[]).unwrap();
        assert_eq!(result.heading_found("Don't panic"), Some(true), "html: {html}");
    }
}

#[test]
fn test_double_quote_matches_entity_encoding() {
    let required = strings(&[r#"The "fast" path"#]);

    for html in [
        r#"<h2>The "fast" path</h2>"#,
        "<h2>The &quot;fast&quot; path</h2>",
    ] {
        let result = validate(html, &required, &[]).unwrap();
        assert_eq!(result.heading_found(r#"The "fast" path"#), Some(true), "html: {html}");
    }
}

#[test]
fn test_element_counts_non_overlapping_matches() {
    let result = validate(PAGE, &[], &strings(&[r#"class="navbar__item navbar__link""#])).unwrap();

    assert_eq!(
        result.element_count(r#"class="navbar__item navbar__link""#),
        Some(3)
    );
    assert!(result.errors.is_empty());
}

#[test]
fn test_element_zero_matches_records_error() {
    let result = validate(PAGE, &[], &strings(&["class=getStarted_Sjon"])).unwrap();

    assert_eq!(result.element_count("class=getStarted_Sjon"), Some(0));
    assert_eq!(
        result.errors,
        vec!["Missing required element: class=getStarted_Sjon".to_string()]
    );
}

#[test]
fn test_element_entries_are_regex_sources() {
    let result = validate(PAGE, &[], &strings(&[r"navbar__\w+"])).unwrap();
    // Two word-runs per anchor: navbar__item and navbar__link.
    assert_eq!(result.element_count(r"navbar__\w+"), Some(6));
}

#[test]
fn test_malformed_element_pattern_propagates() {
    let err = validate(PAGE, &[], &strings(&["(unclosed"])).unwrap_err();
    assert!(matches!(err, CheckError::Pattern(_)));
}

#[test]
fn test_empty_inputs_yield_empty_results() {
    let result = validate(PAGE, &[], &[]).unwrap();

    assert!(result.headings.is_empty());
    assert!(result.elements.is_empty());
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_results_preserve_input_order() {
    let headings = strings(&["Zeta", "Alpha", "Welcome to the docs"]);
    let elements = strings(&["zzz", "aaa", "navbar__item"]);
    let result = validate(PAGE, &headings, &elements).unwrap();

    let heading_order: Vec<&str> = result.headings.iter().map(|(h, _)| h.as_str()).collect();
    let element_order: Vec<&str> = result.elements.iter().map(|(p, _)| p.as_str()).collect();

    assert_eq!(heading_order, vec!["Zeta", "Alpha", "Welcome to the docs"]);
    assert_eq!(element_order, vec!["zzz", "aaa", "navbar__item"]);
}

#[test]
fn test_validate_is_idempotent() {
    let headings = strings(&["Welcome to the docs", "Pricing"]);
    let elements = strings(&["navbar__item", "class=getStarted_Sjon"]);

    let first = validate(PAGE, &headings, &elements).unwrap();
    let second = validate(PAGE, &headings, &elements).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_fixture_snapshot_matches_expected_shape() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures/example-response.html");
    let html = std::fs::read_to_string(path).unwrap();

    let result = validate(
        &html,
        &strings(&["Chosen by companies and open source projects"]),
        &strings(&[
            "class=getStarted_Sjon",
            r#"class="navbar__item navbar__link""#,
        ]),
    )
    .unwrap();

    assert_eq!(
        result.heading_found("Chosen by companies and open source projects"),
        Some(true)
    );
    assert_eq!(
        result.element_count(r#"class="navbar__item navbar__link""#),
        Some(3)
    );
    assert_eq!(result.element_count("class=getStarted_Sjon"), Some(0));
    assert_eq!(
        result.errors,
        vec!["Missing required element: class=getStarted_Sjon".to_string()]
    );
}
