/// Outcome of a content check. Pair vectors keep the configured order so
/// reports are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub headings: Vec<(String, bool)>,
    pub elements: Vec<(String, usize)>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn heading_found(&self, heading: &str) -> Option<bool> {
        self.headings
            .iter()
            .find(|(h, _)| h == heading)
            .map(|(_, found)| *found)
    }

    pub fn element_count(&self, pattern: &str) -> Option<usize> {
        self.elements
            .iter()
            .find(|(p, _)| p == pattern)
            .map(|(_, count)| *count)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
