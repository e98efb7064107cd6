use otter_lrat::{
    config::{Config, ErrorPolicy},
    procedures::{
        canonicalize::{is_deletion, parse_step},
        parallel::canonicalize_proof_parallel,
        proof::canonicalize_proof,
    },
    reports::ProofReport,
    types::err::{self},
};

/// A proof of `length` lines, mixing propagation, resolution, and deletion steps.
fn generated_proof(length: usize) -> String {
    let mut proof = String::default();

    for id in 1..=length {
        if id % 5 == 0 {
            proof.push_str(&format!("{id} d {} {} 0\n", id - 1, id - 2));
            continue;
        }

        let mut line = format!("{id}");
        for k in 0..(1 + id % 6) {
            let atom = ((id * 7 + k * 13) % 50) + 1;
            match (id + k) % 3 {
                0 => line.push_str(&format!(" -{atom}")),
                _ if id % 8 == 0 => line.push_str(&format!(" +{atom}")),
                _ => line.push_str(&format!(" {atom}")),
            }
        }
        line.push_str(" 0");

        match (id % 4, id % 7) {
            (_, 0) => {}
            (0, _) => line.push_str(&format!(" {} -{} {}", id + 1000, id + 2000, id + 3000)),
            _ => line.push_str(&format!(" {} {}", id + 1000, id + 2000)),
        }
        line.push_str(" 0\n");

        proof.push_str(&line);
    }

    proof
}

fn canonical_string(proof: &str, config: &Config) -> (Result<ProofReport, err::ErrorKind>, String) {
    let mut canonical = Vec::default();
    let report = canonicalize_proof(proof.as_bytes(), &mut canonical, config);
    (report, String::from_utf8(canonical).unwrap())
}

fn parallel_string(proof: &str, config: &Config) -> (Result<ProofReport, err::ErrorKind>, String) {
    let mut canonical = Vec::default();
    let report = canonicalize_proof_parallel(proof.as_bytes(), &mut canonical, config);
    (report, String::from_utf8(canonical).unwrap())
}

fn skip_config() -> Config {
    let mut config = Config::default();
    config.error_policy.value = ErrorPolicy::Skip;
    config
}

mod basic {
    use super::*;

    #[test]
    fn scenarios() {
        let proof = "5 -3 1 -2 0 2 4 0
7 -9 4 -2 0 -3 5 0
2 8 -1 0 0
4 d 1 2 0
";

        let (report, canonical) = canonical_string(proof, &Config::default());

        assert_eq!(
            canonical,
            "5 1 -2 -3 0 2 4 0
7 -9 -2 4 0 -3 5 0
2 8 -1 0 0
"
        );

        let report = report.unwrap();
        assert_eq!(report.propagation_steps, 1);
        assert_eq!(report.resolution_steps, 2);
        assert_eq!(report.deletions, 1);
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn empty_proof() {
        let (report, canonical) = canonical_string("", &Config::default());

        assert_eq!(report, Ok(ProofReport::default()));
        assert!(canonical.is_empty());
    }

    #[test]
    fn no_final_newline() {
        let (_, canonical) = canonical_string("5 -3 1 -2 0 2 4 0", &Config::default());
        assert_eq!(canonical, "5 1 -2 -3 0 2 4 0\n");
    }

    #[test]
    fn crlf() {
        let (_, canonical) = canonical_string("5 -3 1 -2 0 2 4 0\r\n3 d 1 0\r\n", &Config::default());
        assert_eq!(canonical, "5 1 -2 -3 0 2 4 0\n");
    }
}

mod properties {
    use super::*;

    #[test]
    fn deletions_removed() {
        let proof = generated_proof(500);
        let (report, canonical) = canonical_string(&proof, &Config::default());
        let report = report.unwrap();

        let deletions = proof.lines().filter(|line| is_deletion(line)).count();
        assert_eq!(report.deletions, deletions);
        assert_eq!(canonical.lines().count(), proof.lines().count() - deletions);
        assert!(canonical.lines().all(|line| !is_deletion(line)));
    }

    #[test]
    fn order_pivot_and_hints() {
        let proof = generated_proof(500);
        let (_, canonical) = canonical_string(&proof, &Config::default());

        let additions = proof.lines().filter(|line| !is_deletion(line));

        for (read, written) in additions.zip(canonical.lines()) {
            let read_step = parse_step(read).unwrap().unwrap();
            let written_step = parse_step(written).unwrap().unwrap();

            assert_eq!(read_step.id, written_step.id);
            assert_eq!(read_step.kind, written_step.kind);
            assert_eq!(read_step.pivot, written_step.pivot);
            assert_eq!(read_step.hints, written_step.hints);
            assert!(written_step.is_canonical());

            if written_step.pivot.is_some() {
                let read_leading = read.split_whitespace().take(2).collect::<Vec<_>>();
                let written_leading = written.split_whitespace().take(2).collect::<Vec<_>>();
                assert_eq!(read_leading, written_leading);
            }

            let mut read_literals = read_step.literals.clone();
            let mut written_literals = written_step.literals.clone();
            read_literals.sort();
            written_literals.sort();
            assert_eq!(read_literals, written_literals);
        }
    }

    #[test]
    fn idempotent() {
        let proof = generated_proof(500);
        let (_, once) = canonical_string(&proof, &Config::default());
        let (_, twice) = canonical_string(&once, &Config::default());

        assert_eq!(once, twice);
    }
}

mod errors {
    use super::*;

    const MALFORMED: &str = "5 -3 1 -2 0 2 4 0
6 1 2
4 d 1 2 0
7 -9 4 -2 0 -3 5 0
";

    #[test]
    fn abort_keeps_earlier_lines() {
        let (report, canonical) = canonical_string(MALFORMED, &Config::default());

        assert_eq!(
            report,
            Err(err::ErrorKind::Format {
                line: 2,
                error: err::FormatError::MissingTerminator("6 1 2".to_string())
            })
        );
        assert_eq!(canonical, "5 1 -2 -3 0 2 4 0\n");
    }

    #[test]
    fn skip_continues() {
        let (report, canonical) = canonical_string(MALFORMED, &skip_config());

        let report = report.unwrap();
        assert_eq!(report.skipped, 1);
        assert_eq!(report.deletions, 1);
        assert_eq!(report.emitted(), 2);
        assert_eq!(report.lines(), 4);

        assert_eq!(canonical, "5 1 -2 -3 0 2 4 0\n7 -9 -2 4 0 -3 5 0\n");
    }

    #[test]
    fn blank_line() {
        let (report, _) = canonical_string("5 -3 1 -2 0 2 4 0\n\n", &Config::default());

        assert_eq!(
            report,
            Err(err::ErrorKind::Format {
                line: 2,
                error: err::FormatError::Empty
            })
        );
    }

    #[test]
    fn invalid_utf8() {
        let proof = b"5 -3 1 -2 0 2 4 0\n\xff\xfe 0\n";
        let mut canonical = Vec::default();

        let report = canonicalize_proof(proof.as_slice(), &mut canonical, &Config::default());

        assert_eq!(report, Err(err::ErrorKind::Io(err::IoError::Read(2))));
        assert_eq!(canonical, b"5 1 -2 -3 0 2 4 0\n");
    }

    struct FailingWriter;

    impl std::io::Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_write() {
        let report = canonicalize_proof(
            "5 -3 1 -2 0 2 4 0\n".as_bytes(),
            FailingWriter,
            &Config::default(),
        );

        assert_eq!(report, Err(err::ErrorKind::Io(err::IoError::Write)));
    }

    #[test]
    fn deletions_never_fail() {
        let (report, canonical) = canonical_string("4 d 1 2 0\n", &Config::default());

        assert!(report.is_ok());
        assert!(canonical.is_empty());
    }
}

mod parallel {
    use super::*;

    fn parallel_config(workers: usize, batch_size: usize) -> Config {
        let mut config = Config::default();
        config.workers.value = workers;
        config.batch_size.value = batch_size;
        config
    }

    #[test]
    fn matches_sequential() {
        let proof = generated_proof(2000);
        let (sequential_report, sequential) = canonical_string(&proof, &Config::default());

        for (workers, batch_size) in [(1, 1), (2, 3), (4, 64), (8, 4096)] {
            let config = parallel_config(workers, batch_size);
            let (report, canonical) = parallel_string(&proof, &config);

            assert_eq!(report, sequential_report);
            assert_eq!(canonical, sequential);
        }
    }

    #[test]
    fn abort_matches_sequential() {
        let mut proof = generated_proof(300);
        proof.push_str("301 4 x 0 1 0\n");
        proof.push_str(&generated_proof(300));

        let (sequential_report, sequential) = canonical_string(&proof, &Config::default());
        let (report, canonical) = parallel_string(&proof, &parallel_config(4, 7));

        assert!(matches!(
            sequential_report,
            Err(err::ErrorKind::Format { line: 301, .. })
        ));
        assert_eq!(report, sequential_report);
        assert_eq!(canonical, sequential);
    }

    #[test]
    fn skip_matches_sequential() {
        let mut proof = generated_proof(300);
        proof.push_str("301 4 x 0 1 0\n");
        proof.push_str("\n");
        proof.push_str(&generated_proof(300));

        let mut config = parallel_config(3, 16);
        config.error_policy.value = ErrorPolicy::Skip;

        let (sequential_report, sequential) = canonical_string(&proof, &skip_config());
        let (report, canonical) = parallel_string(&proof, &config);

        assert_eq!(sequential_report.as_ref().map(|r| r.skipped), Ok(2));
        assert_eq!(report, sequential_report);
        assert_eq!(canonical, sequential);
    }

    #[test]
    fn invalid_utf8() {
        let mut proof = generated_proof(100).into_bytes();
        proof.extend_from_slice(b"\xff\n");
        proof.extend_from_slice(generated_proof(10).as_bytes());

        let mut sequential = Vec::default();
        let sequential_report =
            canonicalize_proof(proof.as_slice(), &mut sequential, &Config::default());

        let mut canonical = Vec::default();
        let report =
            canonicalize_proof_parallel(proof.as_slice(), &mut canonical, &parallel_config(2, 8));

        assert_eq!(sequential_report, Err(err::ErrorKind::Io(err::IoError::Read(101))));
        assert_eq!(report, sequential_report);
        assert_eq!(canonical, sequential);
    }
}
