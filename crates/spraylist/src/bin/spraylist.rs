//! Entry point for the `spraylist` binary.
//!
//! Reads names or strings from a file, optionally expands them into username
//! candidates, ranks them by complexity, and prints one entry per line.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use spraylist::SprayListSettings;
use spraylist::cli::{Cli, CliError, domain_note, execute, render, write_output};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            write_stderr(&err.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let settings = SprayListSettings::from_environment()?;
    init_tracing(settings.json_logs);

    let options = cli.pipeline_options(&settings)?;
    if let Some(note) = domain_note(&options) {
        write_stderr(note);
    }

    let wordlist = execute(cli, &options)?;
    let rendered = render(&wordlist);
    match cli.output() {
        Some(path) => write_output(path, &rendered),
        None => io::stdout()
            .lock()
            .write_all(rendered.as_bytes())
            .map_err(|err| CliError::Stdout {
                message: err.to_string(),
            }),
    }
}

/// Logs go to stderr so stdout carries only the wordlist.
fn init_tracing(json_logs: bool) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr);
    let installed = if json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = installed {
        warn!(error = %e, "tracing init failed");
    }
}

fn write_stderr(message: &str) {
    if let Err(err) = writeln!(io::stderr().lock(), "{message}") {
        drop(err);
    }
}
