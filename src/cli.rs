use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for manatee2images
#[derive(Parser, Debug)]
#[command(name = "manatee2images")]
#[command(about = "Read an imgapi_images table dump on stdin and emit a JSON array of images")]
#[command(
    after_help = "Example:\n    gzcat imgapi_images-2014-11-15-00-01-56.gz | manatee2images > images.json"
)]
pub struct ExtractArgs {
    /// Log progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Command-line arguments for imgdiffable
#[derive(Parser, Debug)]
#[command(name = "imgdiffable")]
#[command(about = "Render a JSON array of images with every line prefixed by its uuid")]
pub struct DiffableArgs {
    /// JSON file holding an array of images (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Refuse inputs larger than this many bytes (no limit by default)
    #[arg(long)]
    pub max_file_size: Option<u64>,
}
