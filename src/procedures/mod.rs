/*!
Procedures for canonicalising lines and proofs.

- [canonicalize] holds the transformation of a single line, on which everything else is built.
- [proof] applies the transformation to each line read from a reader, in sequence.
- [parallel] applies the transformation to each line read from a reader, across a pool of threads.

In either case, lines are written in the order they were read.
*/

pub mod canonicalize;
pub mod parallel;
pub mod proof;
