/*!
Reports on the canonicalisation of a proof.
*/

use crate::{procedures::canonicalize::LineOutcome, structures::step::StepKind};

/// Counts of the lines read while canonicalising a proof.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProofReport {
    /// Additions justified by unit propagation.
    pub propagation_steps: usize,

    /// Additions justified by resolution on a pivot.
    pub resolution_steps: usize,

    /// Deletions, each of which was dropped.
    pub deletions: usize,

    /// Malformed lines which were skipped.
    pub skipped: usize,
}

impl ProofReport {
    /// Notes the outcome of canonicalising a line.
    pub fn note(&mut self, outcome: &LineOutcome) {
        match outcome {
            LineOutcome::Dropped => self.deletions += 1,
            LineOutcome::Emitted(StepKind::Propagation, _) => self.propagation_steps += 1,
            LineOutcome::Emitted(StepKind::Resolution, _) => self.resolution_steps += 1,
        }
    }

    /// The count of lines written.
    pub fn emitted(&self) -> usize {
        self.propagation_steps + self.resolution_steps
    }

    /// The count of lines read.
    pub fn lines(&self) -> usize {
        self.emitted() + self.deletions + self.skipped
    }
}

impl std::fmt::Display for ProofReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "c lines read:        {}", self.lines())?;
        writeln!(f, "c steps written:     {}", self.emitted())?;
        writeln!(f, "c   propagation:     {}", self.propagation_steps)?;
        writeln!(f, "c   resolution:      {}", self.resolution_steps)?;
        writeln!(f, "c deletions dropped: {}", self.deletions)?;
        write!(f, "c lines skipped:     {}", self.skipped)
    }
}
