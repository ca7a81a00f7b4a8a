//! docflat CLI - flattens parsed .doc paragraph dumps to markup text

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use docflat::{serialize_with_options, Document, MarkupOptions};

#[derive(Parser)]
#[command(name = "docflat")]
#[command(version)]
#[command(about = "Flatten parsed .doc paragraph dumps to markup text", long_about = None)]
struct Cli {
    /// Input paragraph dump (JSON)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a paragraph dump to markup text
    Convert {
        /// Input paragraph dump (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (defaults to <input>.txt)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Abort on the first failed table cell instead of emitting
        /// the error sentinel
        #[arg(long)]
        strict_cells: bool,
    },

    /// Show structure counts for a paragraph dump
    Info {
        /// Input paragraph dump (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Check whether a file is a legacy OLE .doc container
    Check {
        /// File to inspect
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            strict_cells,
        }) => cmd_convert(&input, output.as_deref(), strict_cells),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Check { input }) => cmd_check(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref(), false)
            } else {
                println!("{}", "Usage: docflat <FILE> [OUTPUT]".yellow());
                println!("       docflat --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_document(input: &Path) -> Result<Document, Box<dyn std::error::Error>> {
    let data = fs::read_to_string(input)?;
    Ok(Document::from_json(&data)?)
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    strict_cells: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;
    log::debug!("loaded {} paragraphs from {}", doc.len(), input.display());

    let mut options = MarkupOptions::new();
    if strict_cells {
        options = options.strict_cells();
    }

    let text = serialize_with_options(&doc, &options)?;

    let path = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| input.with_extension("txt"));
    fs::write(&path, &text)?;
    println!("{} {}", "Saved to".green(), path.display());

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Paragraphs".bold(), doc.len());
    println!("{}: {}", "Table cells".bold(), doc.table_paragraph_count());
    println!("{}: {}", "List items".bold(), doc.list_item_count());

    Ok(())
}

fn cmd_check(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if docflat::is_legacy_doc(input) {
        println!("{} {}", input.display(), "is a legacy .doc container".green());
    } else {
        println!("{} {}", input.display(), "is not a legacy .doc container".red());
    }
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "docflat".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Legacy document flattening tool");
    println!();
    println!("License: MIT");
}
