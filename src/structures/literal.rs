//! Literals are atoms paired with a (boolean) polarity.
//!
//! Within an LRAT proof literals are written as non-zero integers, with the sign of the integer indicating polarity, and so the canonical representation of a literal is an [IntLiteral].
//! Zero is reserved as a [terminator](crate::structures::step::TERMINATOR).
//!
//! Literals are sorted by atom alone, so a literal and its negation compare equal.
//!
//! ```rust
//! # use otter_lrat::structures::literal::{IntLiteral, Literal};
//! let literal: IntLiteral = -79;
//!
//! assert_eq!(literal.atom(), 79);
//! assert_eq!(literal.atom(), (79 as IntLiteral).atom());
//! ```

/// An atom, the 'variable' of a literal.
pub type Atom = u64;

/// The representation of a literal as a signed integer.
pub type IntLiteral = i64;

/// Something which has an atom.
pub trait Literal {
    /// The atom of the literal.
    fn atom(&self) -> Atom;
}

impl Literal for IntLiteral {
    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }
}
