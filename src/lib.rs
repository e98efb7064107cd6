//! A library for placing the steps of an LRAT proof into a canonical form.
//!
//! An LRAT proof is a sequence of steps, one per line.
//! Each step is either:
//! - An *addition*, of the form `id literals 0 hints 0`, introducing a clause with identifier `id` justified by a chain of hints (identifiers of earlier clauses).
//! - A *deletion*, of the form `id d ids 0`, retiring some earlier clauses.
//!
//! Canonicalisation drops every deletion, and re-writes each addition with literals sorted by (ascending) atom.
//! Some additions are justified by resolution against a RAT pivot, rather than by unit propagation alone.
//! For these the pivot is the first literal of the step, and is held fixed in the first literal slot while the remaining literals are sorted.
//! Hints are never touched.
//!
//! Useful starting points may be:
//! - [canonicalize_line](crate::procedures::canonicalize::canonicalize_line) for the transformation of a single line.
//! - [canonicalize_proof](crate::procedures::proof::canonicalize_proof) for the transformation of a proof, from a reader to a writer.
//! - The [configuration](crate::config) to see what may be varied.
//!
//! # Examples
//!
//! + Canonicalise a few lines.
//!
//! ```rust
//! # use otter_lrat::procedures::canonicalize::{canonicalize_line, LineOutcome};
//! # use otter_lrat::structures::step::StepKind;
//! // All hints are positive, so the step is justified by unit propagation and every literal is sorted.
//! assert_eq!(
//!     canonicalize_line("5 -3 1 -2 0 2 4 0"),
//!     Ok(LineOutcome::Emitted(StepKind::Propagation, "5 1 -2 -3 0 2 4 0".to_string()))
//! );
//!
//! // A negative hint marks a RAT step, and so -9 stays put.
//! assert_eq!(
//!     canonicalize_line("7 -9 4 -2 0 -3 5 0"),
//!     Ok(LineOutcome::Emitted(StepKind::Resolution, "7 -9 -2 4 0 -3 5 0".to_string()))
//! );
//!
//! // Deletions vanish.
//! assert_eq!(canonicalize_line("4 d 1 2 0"), Ok(LineOutcome::Dropped));
//! ```
//!
//! + Canonicalise a proof.
//!
//! ```rust
//! # use otter_lrat::config::Config;
//! # use otter_lrat::procedures::proof::canonicalize_proof;
//! let proof = b"5 -3 1 -2 0 2 4 0\n4 d 1 2 0\n2 8 -1 0 0\n";
//! let mut canonical = Vec::default();
//!
//! let report = canonicalize_proof(proof.as_slice(), &mut canonical, &Config::default()).unwrap();
//!
//! assert_eq!(canonical, b"5 1 -2 -3 0 2 4 0\n2 8 -1 0 0\n");
//! assert_eq!(report.deletions, 1);
//! assert_eq!(report.emitted(), 2);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made with a handful of targets, listed in [misc::log].
//! No logger is provided by the library.
//! The cli initialises [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `logger` feature, in which case, for example:
//! - Logs of skipped lines can be found with `RUST_LOG=proof=warn …`
//! - Logs of each classification can be found with `RUST_LOG=canonical=trace …`
//!
//! Note, logs are only built for debug builds.

pub mod config;
pub mod io;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
