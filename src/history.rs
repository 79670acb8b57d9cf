//! Bounded, most-recent-first record of completed runs.
//!
//! The driver owns one of these per session; nothing here persists.

use std::collections::VecDeque;
use std::time::Duration;

/// Longest input rendering kept in a record before truncation.
const SUMMARY_LEN: usize = 20;

/// Which solver produced a run record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKind {
    Dp,
    Patience,
}

impl AlgorithmKind {
    /// Display label for history entries and run output.
    pub fn label(self) -> &'static str {
        match self {
            AlgorithmKind::Dp => "O(n²)",
            AlgorithmKind::Patience => "O(n log n)",
        }
    }
}

/// One completed run, as shown in the history listing.
#[derive(Debug, Clone)]
pub struct RunRecord {
    pub algorithm: AlgorithmKind,
    pub input_summary: String,
    pub result_summary: String,
    pub elapsed: Duration,
}

impl RunRecord {
    /// Builds a record, truncating a long input rendering for display.
    pub fn new(algorithm: AlgorithmKind, input: &str, result: &str, elapsed: Duration) -> Self {
        Self {
            algorithm,
            input_summary: truncate_summary(input),
            result_summary: result.to_string(),
            elapsed,
        }
    }
}

fn truncate_summary(input: &str) -> String {
    if input.chars().count() > SUMMARY_LEN {
        let head: String = input.chars().take(SUMMARY_LEN).collect();
        format!("{head}...")
    } else {
        input.to_string()
    }
}

/// Keeps the last few runs, newest first.
#[derive(Debug)]
pub struct RunHistory {
    entries: VecDeque<RunRecord>,
    capacity: usize,
}

impl RunHistory {
    /// Creates a history keeping at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Adds a record at the front, dropping the oldest entry once the
    /// capacity is exceeded.
    pub fn record(&mut self, record: RunRecord) {
        self.entries.push_front(record);
        self.entries.truncate(self.capacity);
    }

    /// Iterates newest first.
    pub fn iter(&self) -> impl Iterator<Item = &RunRecord> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RunHistory {
    /// A history of five entries, the size the interactive listing shows.
    fn default() -> Self {
        Self::new(5)
    }
}
