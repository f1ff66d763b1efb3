//! Per-file outcome counters.
//!
//! Counters are reporting-only: they never influence classification, but the
//! drop-vs-preserve asymmetry makes it easy to misread a diff of the output,
//! so the summary distinguishes the two skip kinds instead of lumping them
//! into one number.

use crate::engine::Outcome;

/// Aggregated dispositions for one processed file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FileSummary {
    /// Total blocks the extractor yielded.
    pub blocks: usize,
    /// Blocks rewritten with an injected `tags` field.
    pub added: usize,
    /// Blocks without a `cost` field, omitted from the output entirely.
    pub dropped_missing_cost: usize,
    /// Blocks without an `allowed_archetypes` list, passed through unmodified.
    pub preserved_missing_archetypes: usize,
}

impl FileSummary {
    /// Total skipped blocks, either kind.
    pub fn skipped(&self) -> usize {
        self.dropped_missing_cost + self.preserved_missing_archetypes
    }

    /// Record one block's outcome.
    pub(crate) fn record(&mut self, outcome: &Outcome) {
        self.blocks += 1;
        match outcome {
            Outcome::Added { .. } => self.added += 1,
            Outcome::Dropped => self.dropped_missing_cost += 1,
            Outcome::Preserved => self.preserved_missing_archetypes += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TagSet;

    #[test]
    fn record_tallies_each_outcome_kind() {
        let mut summary = FileSummary::default();
        summary.record(&Outcome::Added { text: String::new(), tags: TagSet::new() });
        summary.record(&Outcome::Dropped);
        summary.record(&Outcome::Preserved);
        summary.record(&Outcome::Dropped);

        assert_eq!(summary.blocks, 4);
        assert_eq!(summary.added, 1);
        assert_eq!(summary.dropped_missing_cost, 2);
        assert_eq!(summary.preserved_missing_archetypes, 1);
        assert_eq!(summary.skipped(), 3);
    }
}
