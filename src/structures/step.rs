//! Steps of an LRAT proof.
//!
//! A [Step] is the parse of a single addition line, and lives only as long as the line it was parsed from.
//! The literals of a step are parsed, as these are sorted.
//! The identifier, pivot, and hints are kept as (borrowed) tokens of the line, so they are written back exactly as they were read.
//!
//! Deletion lines are never parsed to a step.

use crate::structures::literal::{IntLiteral, Literal};

/// The identifier of a step, as written in a proof.
pub type StepId = u64;

/// A hint, the identifier of some earlier clause, negated when resolution against that clause is required.
pub type Hint = i64;

/// The token which terminates the literals of a step, and the hints of a step.
pub const TERMINATOR: &str = "0";

/// The token which marks a step as a deletion.
pub const DELETION_MARKER: &str = "d";

/// The kind of justification given for an addition step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepKind {
    /// The clause follows by unit propagation over the hints, and every literal may be reordered.
    Propagation,

    /// The clause follows by resolution on some pivot, which is written as the first literal of the step.
    Resolution,
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Propagation => write!(f, "Propagation"),
            Self::Resolution => write!(f, "Resolution"),
        }
    }
}

/// The hint chain of a hint region, i.e. the hints without a closing terminator.
///
/// ```rust
/// # use otter_lrat::structures::step::chain;
/// assert_eq!(chain(&["3", "-2", "0"]), &["3", "-2"]);
/// assert!(chain(&["0"]).is_empty());
/// ```
pub fn chain<'h, 'line>(hints: &'h [&'line str]) -> &'h [&'line str] {
    match hints.split_last() {
        Some((&TERMINATOR, chain)) => chain,
        _ => hints,
    }
}

/// The parse of an addition line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step<'line> {
    /// The identifier of the step, as read.
    pub id: &'line str,

    /// How the step is justified.
    pub kind: StepKind,

    /// The pivot of a resolution step, as read.
    ///
    /// Always `None` for a propagation step, and `None` for a resolution step only if the step adds the empty clause.
    pub pivot: Option<&'line str>,

    /// The literals of the step, excluding the pivot.
    pub literals: Vec<IntLiteral>,

    /// The tokens following the literal terminator, including the terminator of the hints (if present).
    pub hints: Vec<&'line str>,
}

impl Step<'_> {
    /// Sorts the literals of the step by atom.
    ///
    /// The sort is stable, so a literal and its negation keep the order in which they were read.
    /// The pivot and hints are untouched.
    pub fn canonicalize(&mut self) {
        self.literals.sort_by_key(|literal| literal.atom());
    }

    /// Whether the literals of the step are sorted by atom.
    pub fn is_canonical(&self) -> bool {
        self.literals
            .windows(2)
            .all(|pair| pair[0].atom() <= pair[1].atom())
    }
}

impl std::fmt::Display for Step<'_> {
    /// Writes the step as a line of an LRAT proof, without a newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)?;

        if let Some(pivot) = self.pivot {
            write!(f, " {pivot}")?;
        }

        for literal in &self.literals {
            write!(f, " {literal}")?;
        }

        write!(f, " {TERMINATOR}")?;

        for hint in &self.hints {
            write!(f, " {hint}")?;
        }

        Ok(())
    }
}
