//! Guardar CLI
//!
//! Inspection entry point for guardar archives.
//!
//! # Usage
//!
//! ```bash
//! # List entries, markers, and metadata
//! guardar inspect model.zip
//!
//! # Fully load an archive and report whether it restores cleanly
//! guardar validate model.zip
//! ```

use clap::{Parser, Subcommand};
use guardar::value::{ArrayRef, Value};
use guardar::{load_document, load_structure};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "guardar", version, about = "Inspect array-splitting document archives")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List archive metadata and array entries without loading array data
    Inspect {
        /// Archive file path
        archive: PathBuf,
    },

    /// Fully load an archive and report whether it restores cleanly
    Validate {
        /// Archive file path
        archive: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Inspect { archive } => run_inspect(&archive, cli.quiet),
        Command::Validate { archive } => run_validate(&archive, cli.quiet),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_inspect(path: &PathBuf, quiet: bool) -> guardar::Result<()> {
    let doc = load_structure(path)?;

    if quiet {
        return Ok(());
    }

    println!("Document: {} (v{})", doc.metadata.name, doc.metadata.version);
    println!("Created:  {}", doc.metadata.created_at);
    for (key, value) in &doc.metadata.custom {
        println!("  {key}: {value}");
    }

    let markers = collect_markers(&doc.root);
    println!("Arrays:   {}", markers.len());
    for marker in markers {
        println!(
            "  {}  {} {:?}",
            marker.entry, marker.dtype, marker.shape
        );
    }

    Ok(())
}

fn run_validate(path: &PathBuf, quiet: bool) -> guardar::Result<()> {
    let doc = load_document(path)?;

    if !quiet {
        println!(
            "OK: {} restored with {} array(s)",
            doc.metadata.name,
            doc.root.array_count()
        );
    }

    Ok(())
}

fn collect_markers(value: &Value) -> Vec<&ArrayRef> {
    match value {
        Value::ArrayRef(marker) => vec![marker],
        Value::List(items) => items.iter().flat_map(collect_markers).collect(),
        Value::Map(entries) => entries.values().flat_map(collect_markers).collect(),
        _ => Vec::new(),
    }
}
