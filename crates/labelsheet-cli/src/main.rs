// this_file: crates/labelsheet-cli/src/main.rs

//! Labelsheet CLI: lays a list of names out on sheets of adhesive labels.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;

fn main() -> ExitCode {
    let args = Cli::parse();
    init_logger(args.verbose);

    match commands::generate::run(&args) {
        Ok(summary) => {
            if args.summary_json {
                match serde_json::to_string_pretty(&summary) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("Error: {e}");
                        return ExitCode::FAILURE;
                    },
                }
            } else if !args.quiet {
                println!("{summary}");
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        },
    }
}

/// Initialize logging based on verbosity flag.
///
/// `RUST_LOG` still applies when `--verbose` is not given.
fn init_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_filter);
    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}
