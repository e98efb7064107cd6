/*!
Abstract elements of an LRAT proof, and their representation.

- [Literals](literal) are integers, with the sign of the integer indicating polarity.
- [Steps](step) are the (transient) parse of a single addition line of a proof.
*/

pub mod literal;
pub mod step;
