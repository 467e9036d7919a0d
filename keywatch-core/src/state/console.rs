use crate::classify::ConsoleCategory;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsoleEntry {
    pub line: String,
    pub category: ConsoleCategory,
}

/// Raw diagnostic console. Every line lands here, whatever the extraction outcome.
#[derive(Debug, Clone, Default)]
pub struct ConsoleLog {
    entries: Vec<ConsoleEntry>,
}

impl ConsoleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>, category: ConsoleCategory) {
        self.entries.push(ConsoleEntry {
            line: line.into(),
            category,
        });
    }

    pub fn entries(&self) -> &[ConsoleEntry] {
        &self.entries
    }

    pub fn tail(&self, n: usize) -> &[ConsoleEntry] {
        &self.entries[self.entries.len().saturating_sub(n)..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
