use clap::Parser;
use std::io::{self, Write};
use std::process;

use imgdiff::cli::DiffableArgs;
use imgdiff::{format_diffable, load_json_file, load_json_stdin, logging, LoadConfig};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = DiffableArgs::parse();
    logging::init_cli_logger(args.verbose);

    let config = LoadConfig::new(args.max_file_size);
    let document = match &args.file {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading images");
            load_json_file(path, &config)?
        }
        None => {
            tracing::debug!("loading images from stdin");
            load_json_stdin(&config)?
        }
    };

    let output = format_diffable(document)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
