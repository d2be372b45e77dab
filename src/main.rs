//! pdf-email-csv - Convert a PDF mailbox export into a CSV of emails
//!
//! Paths not given on the command line are prompted for.

use anyhow::Result;
use clap::{ArgAction, Parser};
use pdf_email_csv::{ConvertConfig, ConvertError, clean_path, convert, ensure_file};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Reconstruct emails from a PDF export and write them as CSV.
#[derive(Parser, Debug)]
#[command(name = "pdf-email-csv")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the PDF file (prompted for when omitted)
    input: Option<String>,

    /// Path for the output CSV file (prompted for when omitted)
    output: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    println!("PDF to CSV Converter for Outlook Emails");
    println!("=======================================");

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let input = match args.input {
        Some(raw) => raw,
        None => prompt("Enter path to PDF file: ")?,
    };
    // Fail before asking for the destination
    ensure_file(&clean_path(&input))?;

    let output = match args.output {
        Some(raw) => raw,
        None => prompt("Enter path for output CSV file: ")?,
    };

    let config = ConvertConfig::from_raw(&input, &output);
    let count = convert(&config)?;

    println!(
        "Successfully converted to {} ({count} emails)",
        config.output_path.display()
    );
    Ok(())
}

fn prompt(message: &str) -> Result<String, ConvertError> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{message}").map_err(ConvertError::Prompt)?;
    stdout.flush().map_err(ConvertError::Prompt)?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(ConvertError::Prompt)?;
    Ok(line)
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
