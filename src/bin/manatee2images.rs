use clap::Parser;
use std::io::{self, Write};
use std::process;

use imgdiff::cli::ExtractArgs;
use imgdiff::{extract_images, logging, Formatter, JsonArrayFormatter};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = ExtractArgs::parse();
    logging::init_cli_logger(args.verbose);

    tracing::debug!("reading table dump from stdin");
    let images = extract_images(io::stdin().lock())?;

    // Render fully before writing so a failure leaves stdout untouched
    let output = JsonArrayFormatter::new().format(&images)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
