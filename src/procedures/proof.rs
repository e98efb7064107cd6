/*!
Canonicalisation of a proof, line by line.

Lines are read from a reader, [canonicalised](crate::procedures::canonicalize::canonicalize_line), and written to a writer, one at a time.

On reading a malformed line the [error policy](crate::config::ErrorPolicy) of the configuration is followed:
- On abort, the writer is flushed and an error noting the line is returned.
  So, any lines written before the malformed line remain written, though the proof written is incomplete.
- On skip, the line is noted in the report and canonicalisation continues.
*/

use std::io::{BufRead, Write};

use crate::{
    config::{Config, ErrorPolicy},
    misc::log::targets::{self},
    procedures::canonicalize::{canonicalize_line, LineOutcome},
    reports::ProofReport,
    types::err::{self},
};

/// Canonicalises the proof read from `reader`, writing each canonical line to `writer`.
///
/// ```rust
/// # use otter_lrat::config::Config;
/// # use otter_lrat::procedures::proof::canonicalize_proof;
/// let proof = b"7 -9 4 -2 0 -3 5 0\n";
/// let mut canonical = Vec::default();
///
/// let report = canonicalize_proof(proof.as_slice(), &mut canonical, &Config::default());
///
/// assert!(report.is_ok_and(|report| report.resolution_steps == 1));
/// assert_eq!(canonical, b"7 -9 -2 4 0 -3 5 0\n");
/// ```
pub fn canonicalize_proof(
    mut reader: impl BufRead,
    mut writer: impl Write,
    config: &Config,
) -> Result<ProofReport, err::ErrorKind> {
    let mut report = ProofReport::default();
    let mut buffer = String::with_capacity(1024);
    let mut line_counter = 0;

    let result = 'proof_loop: loop {
        buffer.clear();

        match reader.read_line(&mut buffer) {
            Ok(0) => break 'proof_loop Ok(()),
            Ok(_) => line_counter += 1,
            Err(_) => break 'proof_loop Err(err::ErrorKind::from(err::IoError::Read(line_counter + 1))),
        }

        let outcome = canonicalize_line(trim_line_ending(&buffer));

        if let Err(e) = record_outcome(outcome, line_counter, &mut writer, config, &mut report) {
            break 'proof_loop Err(e);
        }
    };

    let flushed = writer.flush();
    result?;

    match flushed {
        Ok(()) => {
            log::info!(target: targets::PROOF, "Canonicalised {} lines", report.lines());
            Ok(report)
        }
        Err(_) => Err(err::ErrorKind::from(err::IoError::Write)),
    }
}

/// `line` without a closing newline (or carriage return and newline).
pub(crate) fn trim_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

/// Writes and notes the outcome of canonicalising line number `line`, following the error policy of `config` on error.
pub(crate) fn record_outcome(
    outcome: Result<LineOutcome, err::FormatError>,
    line: usize,
    writer: &mut impl Write,
    config: &Config,
    report: &mut ProofReport,
) -> Result<(), err::ErrorKind> {
    match outcome {
        Ok(outcome) => {
            if let LineOutcome::Emitted(_, canonical) = &outcome {
                if writeln!(writer, "{canonical}").is_err() {
                    return Err(err::ErrorKind::from(err::IoError::Write));
                }
            }
            report.note(&outcome);
            Ok(())
        }

        Err(error) => match config.error_policy.value {
            ErrorPolicy::Abort => {
                log::error!(target: targets::PROOF, "Line {line}: {error}");
                Err(err::ErrorKind::Format { line, error })
            }

            ErrorPolicy::Skip => {
                log::warn!(target: targets::PROOF, "Skipped line {line}: {error}");
                report.skipped += 1;
                Ok(())
            }
        },
    }
}
