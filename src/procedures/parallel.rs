/*!
Canonicalisation of a proof, across a pool of threads.

Canonicalisation of a line depends on nothing but the line, and so lines may be canonicalised in any order.
Here, three kinds of thread are used:
- A reader, which reads lines in batches and sends each (numbered) batch to a shared channel.
- Some number of workers, which canonicalise batches as they arrive and send the result to a second channel.
- The calling thread, which holds canonical batches until each earlier batch has been written, and so writes lines in the order they were read.

Both channels are bounded, so the reader never gets (much) further ahead of the writer than the number of workers.

The observable result --- lines written, the report, and any error --- is the same as for [canonicalize_proof](crate::procedures::proof::canonicalize_proof).
In particular, on aborting at some malformed line, no later line is written.
The channels disconnect as the calling thread returns, and the reader and workers stop on finding the disconnect.
*/

use std::{
    collections::BTreeMap,
    io::{BufRead, Write},
};

use crossbeam::channel::{bounded, Receiver, Sender};

use crate::{
    config::Config,
    misc::log::targets::{self},
    procedures::{
        canonicalize::{canonicalize_line, LineOutcome},
        proof::{record_outcome, trim_line_ending},
    },
    reports::ProofReport,
    types::err::{self},
};

/// Some consecutive lines of a proof.
struct Batch {
    /// The position of the batch in the sequence of batches.
    index: usize,

    /// The number of the first line of the batch.
    first_line: usize,

    lines: Vec<String>,
}

/// The outcome of canonicalising each line of a batch.
struct CanonicalBatch {
    index: usize,

    first_line: usize,

    outcomes: Vec<Result<LineOutcome, err::FormatError>>,
}

/// Canonicalises the proof read from `reader`, writing each canonical line to `writer`.
///
/// Lines are canonicalised by as many threads as the workers of `config`, in batches of the batch size of `config`.
///
/// ```rust
/// # use otter_lrat::config::Config;
/// # use otter_lrat::procedures::parallel::canonicalize_proof_parallel;
/// let mut config = Config::default();
/// config.workers.value = 4;
/// config.batch_size.value = 1;
///
/// let proof = b"5 -3 1 -2 0 2 4 0\n4 d 1 2 0\n7 -9 4 -2 0 -3 5 0\n";
/// let mut canonical = Vec::default();
///
/// assert!(canonicalize_proof_parallel(proof.as_slice(), &mut canonical, &config).is_ok());
/// assert_eq!(canonical, b"5 1 -2 -3 0 2 4 0\n7 -9 -2 4 0 -3 5 0\n");
/// ```
pub fn canonicalize_proof_parallel<R: BufRead + Send>(
    reader: R,
    mut writer: impl Write,
    config: &Config,
) -> Result<ProofReport, err::ErrorKind> {
    let workers = config.workers.value.max(1);
    let batch_size = config.batch_size.value.max(1);

    let mut report = ProofReport::default();

    let result = std::thread::scope(|scope| {
        let (batch_tx, batch_rx) = bounded::<Batch>(2 * workers);
        let (canonical_tx, canonical_rx) = bounded::<CanonicalBatch>(2 * workers);

        let reader_handle = scope.spawn(move || read_batches(reader, batch_size, batch_tx));

        let worker_handles = (0..workers)
            .map(|worker| {
                let batch_rx = batch_rx.clone();
                let canonical_tx = canonical_tx.clone();
                scope.spawn(move || canonicalize_batches(worker, batch_rx, canonical_tx))
            })
            .collect::<Vec<_>>();

        // Only the threads hold channel ends from here, so a channel disconnects once either side has finished.
        drop(batch_rx);
        drop(canonical_tx);

        let emission = write_in_order(canonical_rx, &mut writer, config, &mut report);

        let read = match reader_handle.join() {
            Ok(read) => read,
            Err(_) => Err(err::ErrorKind::from(err::IoError::Worker)),
        };

        let mut canonicalized = Ok(());
        for handle in worker_handles {
            if handle.join().is_err() {
                canonicalized = Err(err::ErrorKind::from(err::IoError::Worker));
            }
        }

        emission.and(canonicalized).and(read)
    });

    let flushed = writer.flush();
    result?;

    match flushed {
        Ok(()) => {
            log::info!(target: targets::PARALLEL, "Canonicalised {} lines across {workers} workers", report.lines());
            Ok(report)
        }
        Err(_) => Err(err::ErrorKind::from(err::IoError::Write)),
    }
}

/// Reads `reader` to batches of (at most) `batch_size` lines, and sends each batch to `tx`.
///
/// Returns early, without error, if `tx` disconnects.
/// On a read error the lines read so far are sent before the error is returned.
fn read_batches(
    mut reader: impl BufRead,
    batch_size: usize,
    tx: Sender<Batch>,
) -> Result<(), err::ErrorKind> {
    let mut index = 0;
    let mut line_counter = 0;
    let mut batch = Batch {
        index,
        first_line: 1,
        lines: Vec::with_capacity(batch_size),
    };

    loop {
        let mut buffer = String::new();

        match reader.read_line(&mut buffer) {
            Ok(0) => break,

            Ok(_) => {
                line_counter += 1;
                let trimmed_length = trim_line_ending(&buffer).len();
                buffer.truncate(trimmed_length);
                batch.lines.push(buffer);
            }

            Err(_) => {
                if !batch.lines.is_empty() {
                    let _ = tx.send(batch);
                }
                return Err(err::ErrorKind::from(err::IoError::Read(line_counter + 1)));
            }
        }

        if batch.lines.len() == batch_size {
            index += 1;
            let next = Batch {
                index,
                first_line: line_counter + 1,
                lines: Vec::with_capacity(batch_size),
            };

            if tx.send(std::mem::replace(&mut batch, next)).is_err() {
                log::trace!(target: targets::PARALLEL, "Reader stopped at line {line_counter}");
                return Ok(());
            }
        }
    }

    if !batch.lines.is_empty() {
        let _ = tx.send(batch);
    }

    Ok(())
}

/// Canonicalises each batch received from `rx`, and sends the outcomes to `tx`.
fn canonicalize_batches(worker: usize, rx: Receiver<Batch>, tx: Sender<CanonicalBatch>) {
    while let Ok(batch) = rx.recv() {
        log::trace!(target: targets::PARALLEL, "Worker {worker} took batch {}", batch.index);

        let outcomes = batch
            .lines
            .iter()
            .map(|line| canonicalize_line(line))
            .collect();

        let canonical = CanonicalBatch {
            index: batch.index,
            first_line: batch.first_line,
            outcomes,
        };

        if tx.send(canonical).is_err() {
            break;
        }
    }
}

/// Writes the outcomes of each batch received from `rx` to `writer`, in order of batch index.
fn write_in_order(
    rx: Receiver<CanonicalBatch>,
    writer: &mut impl Write,
    config: &Config,
    report: &mut ProofReport,
) -> Result<(), err::ErrorKind> {
    let mut pending = BTreeMap::<usize, CanonicalBatch>::default();
    let mut next_index = 0;

    while let Ok(canonical) = rx.recv() {
        pending.insert(canonical.index, canonical);

        while let Some(canonical) = pending.remove(&next_index) {
            for (offset, outcome) in canonical.outcomes.into_iter().enumerate() {
                record_outcome(outcome, canonical.first_line + offset, writer, config, report)?;
            }
            next_index += 1;
        }
    }

    // Every batch sent is received, unless some worker failed.
    match pending.is_empty() {
        true => Ok(()),
        false => Err(err::ErrorKind::from(err::IoError::Worker)),
    }
}
