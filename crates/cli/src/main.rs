//! `repdoc` — command-line front end for the report document model.
//!
//! The graphical editor is a separate surface; this binary covers the bulk
//! JSON workflows: creating a fresh document, checking a document file for
//! problems, and normalizing a file (defaults filled in, unknown keys
//! dropped).

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use repdoc_interchange::{export_document, import_document, parse_json, ImportWarning};
use repdoc_model::Document;

#[derive(Parser)]
#[command(name = "repdoc")]
#[command(about = "Report document model CLI")]
struct Cli {
    /// Print JSON on a single line instead of pretty-printed
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a fresh default document
    New,
    /// Import a document file and report anything that was skipped
    Check {
        /// Path to a JSON document file
        file: PathBuf,
    },
    /// Import a document file and print it back normalized
    Normalize {
        /// Path to a JSON document file
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("repdoc=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::New) => {
            let doc = Document::new();
            let value = export_document(&doc)?;
            println!("{}", render(&value, cli.compact)?);
        }
        Some(Commands::Check { file }) => {
            let (doc, warnings) = load_document(&file)?;
            for warning in &warnings {
                eprintln!("warning: {warning}");
            }
            println!(
                "{}: {} sections, {} competencies, {} warnings",
                file.display(),
                doc.sections.len(),
                doc.competencies.len(),
                warnings.len()
            );
        }
        Some(Commands::Normalize { file }) => {
            let (doc, warnings) = load_document(&file)?;
            for warning in &warnings {
                eprintln!("warning: {warning}");
            }
            let value = export_document(&doc)?;
            println!("{}", render(&value, cli.compact)?);
        }
        None => {
            println!("Use 'repdoc --help' for commands");
        }
    }

    Ok(())
}

/// Read, parse and import one document file.
///
/// An unreadable file and JSON syntax errors are fatal; shape problems below
/// the document root come back as warnings alongside the imported document.
fn load_document(path: &Path) -> anyhow::Result<(Document, Vec<ImportWarning>)> {
    let text = std::fs::read_to_string(path)
        .map_err(|err| anyhow::anyhow!("failed to read {}: {err}", path.display()))?;
    let json = parse_json(&text)?;

    let mut doc = Document::new();
    let warnings = import_document(&mut doc, &json)?;
    tracing::debug!(
        "loaded {}: {} sections, {} warnings",
        path.display(),
        doc.sections.len(),
        warnings.len()
    );
    Ok((doc, warnings))
}

fn render(value: &serde_json::Value, compact: bool) -> anyhow::Result<String> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(rendered)
}
