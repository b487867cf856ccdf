//! Thin CLI wrapper around the docstract library.
//!
//! Parses one .docx file and writes the structural projection as JSON to
//! stdout or to `--output`. All diagnostics go to stderr; the process
//! exits 1 on any failure.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use docstract::parse_document;

#[derive(Parser)]
#[command(
    name = "docstract",
    version,
    about = "Extract the section structure of a .docx file as JSON"
)]
struct Cli {
    /// Path to the .docx file
    input: PathBuf,

    /// Output JSON file path (default: print to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(error) = run(&cli) {
        eprintln!("ERROR: {error:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let document = parse_document(&cli.input)?;

    let json = serde_json::to_string_pretty(&document).context("serializing document")?;

    match &cli.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }
            std::fs::write(path, json)
                .with_context(|| format!("writing {}", path.display()))?;
            eprintln!("Written to: {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
