//! Command-line front end for the Monkey analysis backends.
//!
//! Usage:
//!   monkey `<path>` --mode `<mode>` [--config `<file>`]  - Submit a sample to a backend
//!   monkey - --mode `<mode>`                             - Read the sample from stdin
//!   monkey --list-modes                                  - List recognized modes

use clap::{Arg, ArgAction, Command};
use monkey_client::{
    OutputSink, ProcessingMode, SubmissionOutcome, SubmissionPipeline, SubmissionSession,
};
use monkey_config::Loader;
use std::io::Read;

/// The CLI's single writable output surface.
struct StdoutSink;

impl OutputSink for StdoutSink {
    fn set_output(&self, text: &str) {
        println!("{}", text);
    }
}

#[tokio::main]
async fn main() {
    let matches = Command::new("monkey")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Submit Monkey source samples to the analysis backends")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the source sample ('-' reads from stdin)")
                .required_unless_present("list-modes")
                .index(1),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .short('m')
                .help("Processing mode (e.g., 'lexer', 'pratt', 'evaluator')")
                .required_unless_present("list-modes"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML configuration layered over the built-in defaults"),
        )
        .arg(
            Arg::new("list-modes")
                .long("list-modes")
                .help("List recognized processing modes")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-modes") {
        handle_list_modes_command();
        return;
    }

    let path = matches
        .get_one::<String>("path")
        .expect("path is required unless listing modes");
    let mode = matches
        .get_one::<String>("mode")
        .expect("mode is required unless listing modes");

    let mut loader = Loader::new();
    if let Some(config_path) = matches.get_one::<String>("config") {
        loader = loader.with_file(config_path);
    }
    let config = loader.build().unwrap_or_else(|err| {
        eprintln!("Configuration error: {}", err);
        std::process::exit(1);
    });
    let registry = config.registry().unwrap_or_else(|err| {
        eprintln!("Configuration error: {}", err);
        std::process::exit(1);
    });

    let raw_input = read_sample(path);
    let session = SubmissionSession::new(SubmissionPipeline::new(registry));
    let outcome = session.submit_and_render(&raw_input, mode, &StdoutSink).await;

    if let SubmissionOutcome::Failure(_) = outcome {
        std::process::exit(1);
    }
}

/// Read the source sample from a file, or stdin when the path is `-`.
fn read_sample(path: &str) -> String {
    if path == "-" {
        let mut buffer = String::new();
        if let Err(err) = std::io::stdin().read_to_string(&mut buffer) {
            eprintln!("Failed to read stdin: {}", err);
            std::process::exit(1);
        }
        buffer
    } else {
        std::fs::read_to_string(path).unwrap_or_else(|err| {
            eprintln!("Failed to read '{}': {}", path, err);
            std::process::exit(1);
        })
    }
}

/// Handle the list-modes command
fn handle_list_modes_command() {
    println!("Recognized processing modes:\n");
    for mode in ProcessingMode::ALL {
        println!("  {}", mode);
    }
}
