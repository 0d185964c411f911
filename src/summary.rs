use std::path::PathBuf;

use crate::transcript::{Outcome, Transcript};

/// Aggregate result of one batch run.
///
/// Invariant: `attempted == succeeded + failures.len()`. The invariant holds by
/// construction because the only way counts change is [`RunSummary::record`].
///
/// `failures` preserves processing order, so callers presenting results to a human can
/// list `(path, reason)` pairs in the order inputs were attempted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub attempted: usize,
    pub succeeded: usize,
    pub failures: Vec<(PathBuf, String)>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one finished transcript into the counts.
    pub fn record(&mut self, transcript: &Transcript) {
        self.attempted += 1;
        match &transcript.outcome {
            Outcome::Succeeded => self.succeeded += 1,
            Outcome::Failed(reason) => self
                .failures
                .push((transcript.source_path.clone(), reason.clone())),
        }
    }

    /// Whether every attempted input transcribed successfully.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
