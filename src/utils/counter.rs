//! Run-wide tally of file outcomes, printed as the last line of a run.
use crate::types::ScriptResult;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Outcome counts shared by every command. Updated through `&self` so it can
/// live in a global.
#[derive(Debug, Default)]
pub struct Counter {
    updated: AtomicUsize,
    unchanged: AtomicUsize,
    errors: AtomicUsize,
    warnings: AtomicUsize,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of one processed file.
    pub fn record(&self, result: ScriptResult) {
        let slot = match result {
            ScriptResult::Ok => &self.updated,
            ScriptResult::Ignored => &self.unchanged,
        };
        slot.fetch_add(1, Ordering::Relaxed);
    }

    pub fn error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Missing inputs and skipped conflicting keys.
    pub fn warning(&self) {
        self.warnings.fetch_add(1, Ordering::Relaxed);
    }

    pub fn errors(&self) -> usize {
        self.errors.load(Ordering::Relaxed)
    }
}

impl std::fmt::Display for Counter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Updated: {}, Unchanged: {}",
            self.updated.load(Ordering::Relaxed),
            self.unchanged.load(Ordering::Relaxed),
        )?;
        let errors = self.errors();
        if errors > 0 {
            write!(f, ", Error: {}", errors)?;
        }
        let warnings = self.warnings.load(Ordering::Relaxed);
        if warnings > 0 {
            write!(f, ", Warning: {}", warnings)?;
        }
        Ok(())
    }
}

#[test]
fn test_summary_line() {
    let counter = Counter::new();
    assert_eq!(counter.to_string(), "Updated: 0, Unchanged: 0");
    counter.record(ScriptResult::Ok);
    counter.record(ScriptResult::Ok);
    counter.record(ScriptResult::Ignored);
    counter.warning();
    assert_eq!(counter.to_string(), "Updated: 2, Unchanged: 1, Warning: 1");
    counter.error();
    assert_eq!(counter.errors(), 1);
    assert_eq!(
        counter.to_string(),
        "Updated: 2, Unchanged: 1, Error: 1, Warning: 1"
    );
}
