/*!
Canonicalisation of a single line of an LRAT proof.

# Overview

A line is first checked for the [deletion marker](DELETION_MARKER).
Deletions have no canonical form, and are [dropped](LineOutcome::Dropped).

Otherwise, the line is split into:
- An identifier, the first token.
- A literal region, from the identifier up to the first [terminator](TERMINATOR).
- A hint region, every token after the terminator.

The step is then classified:
- If the hint chain (the hint region without its closing terminator) is empty, or contains a negative hint, the step is a [resolution](StepKind::Resolution) step, and the first literal is the pivot.
- Otherwise the step is a [propagation](StepKind::Propagation) step.

Classification of a step with an empty chain as resolution is inherited from the tooling the canonical form was first written for, and is kept as-is.

Finally, literals (excluding the pivot) are sorted by atom and the step is written back.
The identifier, pivot, and hints are written as read, while sorted literals are written as parsed (so `+3` is written `3`).

```rust
# use otter_lrat::procedures::canonicalize::{canonicalize_line, LineOutcome};
# use otter_lrat::structures::step::StepKind;
assert_eq!(
    canonicalize_line("2 8 -1 0 0"),
    Ok(LineOutcome::Emitted(StepKind::Resolution, "2 8 -1 0 0".to_string()))
);
```
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        literal::IntLiteral,
        step::{chain, Hint, Step, StepId, StepKind, DELETION_MARKER, TERMINATOR},
    },
    types::err::{self},
};

/// The result of canonicalising a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line was a deletion, and nothing is written.
    Dropped,

    /// The canonical form of an addition, without a newline.
    Emitted(StepKind, String),
}

/// Whether `line` contains the deletion marker as a token.
pub fn is_deletion(line: &str) -> bool {
    line.split_whitespace().any(|token| token == DELETION_MARKER)
}

/// Parses `line` to a step, or `None` if the line is a deletion.
///
/// The literals of the step are as read, and so not (necessarily) canonical.
pub fn parse_step(line: &str) -> Result<Option<Step<'_>>, err::FormatError> {
    let tokens = line.split_whitespace().collect::<Vec<_>>();

    if tokens.iter().any(|token| *token == DELETION_MARKER) {
        return Ok(None);
    }

    let Some((id_token, rest)) = tokens.split_first() else {
        return Err(err::FormatError::Empty);
    };

    if id_token.parse::<StepId>().is_err() {
        return Err(err::FormatError::Id(line.to_string()));
    }

    let Some(terminator) = rest.iter().position(|token| *token == TERMINATOR) else {
        return Err(err::FormatError::MissingTerminator(line.to_string()));
    };

    let literal_region = &rest[..terminator];
    let hints = rest[terminator + 1..].to_vec();

    let mut literals = Vec::with_capacity(literal_region.len());
    for token in literal_region {
        match token.parse::<IntLiteral>() {
            Ok(literal) => literals.push(literal),
            Err(_) => {
                return Err(err::FormatError::Literal {
                    token: token.to_string(),
                    line: line.to_string(),
                })
            }
        }
    }

    let kind = classify(&hints, line)?;

    // The pivot is written as read.
    let pivot = match (kind, literal_region.first()) {
        (StepKind::Resolution, Some(pivot)) => {
            literals.remove(0);
            Some(*pivot)
        }
        _ => None,
    };

    let step = Step {
        id: *id_token,
        kind,
        pivot,
        literals,
        hints,
    };

    log::trace!(target: targets::CANONICAL, "Step {} read as {}", step.id, step.kind);

    Ok(Some(step))
}

/// Classifies a step from the tokens of its hint region.
///
/// Every token is parsed, including a closing terminator, though only the chain before the terminator is considered when checking for emptiness.
pub fn classify(hints: &[&str], line: &str) -> Result<StepKind, err::FormatError> {
    let mut kind = match chain(hints).is_empty() {
        true => StepKind::Resolution,
        false => StepKind::Propagation,
    };

    for token in hints {
        match token.parse::<Hint>() {
            Ok(hint) if hint < 0 => kind = StepKind::Resolution,
            Ok(_) => {}
            Err(_) => {
                return Err(err::FormatError::Hint {
                    token: token.to_string(),
                    line: line.to_string(),
                })
            }
        }
    }

    Ok(kind)
}

/// Canonicalises `line`.
///
/// ```rust
/// # use otter_lrat::procedures::canonicalize::{canonicalize_line, LineOutcome};
/// # use otter_lrat::types::err::FormatError;
/// assert_eq!(canonicalize_line("4 d 1 2 0"), Ok(LineOutcome::Dropped));
/// assert_eq!(canonicalize_line(""), Err(FormatError::Empty));
/// ```
pub fn canonicalize_line(line: &str) -> Result<LineOutcome, err::FormatError> {
    match parse_step(line)? {
        None => {
            log::trace!(target: targets::CANONICAL, "Dropped: {line}");
            Ok(LineOutcome::Dropped)
        }

        Some(mut step) => {
            step.canonicalize();
            Ok(LineOutcome::Emitted(step.kind, step.to_string()))
        }
    }
}

/// Canonicalises each of `lines`, lazily and in order.
///
/// ```rust
/// # use otter_lrat::procedures::canonicalize::{canonical_lines, LineOutcome};
/// let proof = ["3 2 -1 0 1 2 0", "3 d 1 0"];
/// let mut outcomes = canonical_lines(proof);
///
/// assert!(matches!(outcomes.next(), Some(Ok(LineOutcome::Emitted(_, _)))));
/// assert_eq!(outcomes.next(), Some(Ok(LineOutcome::Dropped)));
/// assert_eq!(outcomes.next(), None);
/// ```
pub fn canonical_lines<I>(lines: I) -> impl Iterator<Item = Result<LineOutcome, err::FormatError>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| canonicalize_line(line.as_ref()))
}
