#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::{io::BufWriter, path::PathBuf};

use otter_lrat::{
    config::Config,
    io::proof_reader,
    procedures::{parallel::canonicalize_proof_parallel, proof::canonicalize_proof},
    types::err::{self},
};

mod parse_args;

/// Exit code on an invalid request, or a proof which could not be opened.
const EXIT_INPUT: i32 = 1;

/// Exit code on a failure part-way through a proof, in which case the canonical proof written is incomplete.
const EXIT_PROOF: i32 = 2;

#[derive(Default)]
pub struct CliOptions {
    path: PathBuf,
    stats: bool,
}

fn main() {
    #[cfg(feature = "logger")]
    env_logger::init();

    let mut config = Config::default();
    let mut cli_options = CliOptions::default();

    let matches = parse_args::cli().get_matches();
    parse_args::config_from_args(&matches, &mut config, &mut cli_options);

    let reader = match proof_reader(&cli_options.path) {
        Ok(reader) => reader,
        Err(e) => {
            eprintln!("c {e}");
            std::process::exit(EXIT_INPUT);
        }
    };

    let stdout = std::io::stdout();
    let writer = BufWriter::new(stdout.lock());

    let result = match config.workers.value {
        1 => canonicalize_proof(reader, writer, &config),
        _ => canonicalize_proof_parallel(reader, writer, &config),
    };

    match result {
        Ok(report) => {
            if cli_options.stats {
                eprintln!("{report}");
            }
        }

        Err(e) => {
            eprintln!("c {e}");
            match e {
                err::ErrorKind::Io(err::IoError::FileNotFound(_))
                | err::ErrorKind::Io(err::IoError::UnsupportedExtension(_)) => {
                    std::process::exit(EXIT_INPUT)
                }
                _ => std::process::exit(EXIT_PROOF),
            }
        }
    }
}
