mod cli;

use anyhow::Error;
use clap::Parser;
use std::io;
use std::io::BufRead;
use std::io::Write;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use sumlen::clipboard;

/// The greeting shown before reading lengths interactively.
const PROMPT_INTERACTIVE: &str =
    "Enter lengths (e.g., 2 1/2\", 5.535\", 9mm, or 5' 3 1/2\"). Empty line to finish.";

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {}", error);
            ExitCode::FAILURE
        }
    }
}

/// Sets up logging to stderr. `RUST_LOG` overrides the verbosity flag.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

/// Sums the lengths given on the command line, or typed in if there are none.
fn run(cli: &Cli) -> Result<(), Error> {
    let inputs = if cli.lengths.is_empty() {
        info!("No arguments; reading lengths interactively");

        read_interactive(io::stdin().lock(), &mut io::stdout())?
    }
    else {
        cli.lengths.clone()
    };

    let report = sumlen::evaluate(&inputs, &cli.format_options())?;

    sumlen::emit(&report, &mut io::stdout().lock(), |text| {
        if !cli.no_copy {
            clipboard::copy_best_effort(text);
        }
    })?;

    Ok(())
}

/// Reads lengths one per line until a blank line or the end of input.
fn read_interactive(input: impl BufRead, prompt: &mut impl Write)
-> Result<Vec<String>, Error> {
    writeln!(prompt, "{}", PROMPT_INTERACTIVE)?;

    let mut lines = input.lines();
    let mut lengths = vec![];

    loop {
        write!(prompt, "> ")?;
        prompt.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        let line = line.trim();

        if line.is_empty() {
            break;
        }

        lengths.push(line.to_string());
    }

    Ok(lengths)
}
