/// Destination for report lines, injected so formatting logic can be tested
/// without capturing the real terminal.
pub trait ReportSink {
    fn line(&mut self, text: &str);
}

/// Writes report lines to stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn line(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Collects report lines in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }
}

impl ReportSink for MemorySink {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}
