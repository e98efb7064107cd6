use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use otter_lrat::{
    config::{Config, ErrorPolicy},
    misc::log::targets::{self},
};

use crate::CliOptions;

pub fn cli() -> Command {
    Command::new("otter_lrat")
        .about("Writes an LRAT proof in canonical form: deletions are dropped and literals are sorted by atom, with any RAT pivot held in place")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("path")
            .required(true)
            .value_parser(value_parser!(PathBuf))
            .help("The LRAT proof to canonicalise."))

        .arg(Arg::new("on_error")
            .long("on-error")
            .value_parser(value_parser!(String))
            .required(false)
            .num_args(1)
            .help(format!("What to do on reading a malformed line, either 'abort' or 'skip'.
Default: {}

On abort, lines written before the malformed line remain written, and the exit code is non-zero.", ErrorPolicy::Abort)))

        .arg(Arg::new("workers")
            .long("workers")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("The number of threads used to canonicalise lines.
Default: {}

With more than one worker lines are read, canonicalised, and written on different threads.
Lines are always written in the order they were read.", Config::default().workers.value)))

        .arg(Arg::new("batch_size")
            .long("batch-size")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("The number of lines sent to a worker at a time.
Default: {}", Config::default().batch_size.value)))

        .arg(Arg::new("stats")
            .long("stats")
            .action(ArgAction::SetTrue)
            .required(false)
            .help("Write counts of the lines read to stderr."))
}

/// Updates `config` and `cli_options` from `matches`.
///
/// If an invalid option is found a message is sent and the process is terminated.
pub fn config_from_args(matches: &ArgMatches, config: &mut Config, cli_options: &mut CliOptions) {
    if let Some(path) = matches.get_one::<PathBuf>("path") {
        cli_options.path = path.clone();
    }

    cli_options.stats = matches.get_flag("stats");

    if let Some(request) = matches.get_one::<String>("on_error") {
        let (min, max) = config.error_policy.min_max();

        match request.parse::<ErrorPolicy>() {
            Ok(policy) if config.error_policy.set(policy) => {
                log::info!(target: targets::CONFIG, "{} set to: {policy}",
                    config.error_policy.name);
            }
            _ => {
                eprintln!("c on-error requires a value between {min} and {max}");
                std::process::exit(1);
            }
        }
    }

    if let Some(request) = matches.get_one::<usize>("workers") {
        let (min, max) = config.workers.min_max();

        if !config.workers.set(*request) {
            eprintln!("c workers requires a value between {min} and {max}");
            std::process::exit(1);
        }
    }

    if let Some(request) = matches.get_one::<usize>("batch_size") {
        let (min, max) = config.batch_size.min_max();

        if !config.batch_size.set(*request) {
            eprintln!("c batch-size requires a value between {min} and {max}");
            std::process::exit(1);
        }
    }
}
