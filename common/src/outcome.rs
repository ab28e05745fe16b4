//! Per-port results and per-category verdicts.

use std::collections::BTreeMap;
use std::iter::Sum;

/// Pass/fail contribution of one check category to the exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryResult {
    Passed,
    Failed,
}

impl CategoryResult {
    pub fn code(self) -> u8 {
        match self {
            CategoryResult::Passed => 0,
            CategoryResult::Failed => 1,
        }
    }

    pub fn is_failed(self) -> bool {
        self == CategoryResult::Failed
    }
}

/// Number of failed categories in a run; this is the process exit status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FailureCount(pub u8);

impl Sum<CategoryResult> for FailureCount {
    fn sum<I: Iterator<Item = CategoryResult>>(iter: I) -> Self {
        FailureCount(iter.map(CategoryResult::code).sum())
    }
}

/// Outcome of every probed port of a category, keyed by port.
#[derive(Debug, Clone, Default)]
pub struct PortResults {
    tested: BTreeMap<u16, bool>,
}

impl PortResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, port: u16, passed: bool) {
        self.tested.insert(port, passed);
    }

    pub fn failures(&self) -> impl Iterator<Item = u16> + '_ {
        self.tested
            .iter()
            .filter(|(_, passed)| !**passed)
            .map(|(port, _)| *port)
    }

    pub fn len(&self) -> usize {
        self.tested.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tested.is_empty()
    }

    pub fn verdict(&self) -> CategoryResult {
        if self.failures().next().is_some() {
            CategoryResult::Failed
        } else {
            CategoryResult::Passed
        }
    }
}
