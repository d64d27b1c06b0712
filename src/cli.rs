use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfutil")]
#[command(about = "Merge, extract, rotate, and delete pages in PDF files")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge two or more PDFs into one
    Merge {
        /// Input PDF file(s), concatenated in the order given
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output file
        #[arg(short, long, default_value = "output.pdf")]
        output: PathBuf,
    },

    /// Extract one or more pages into a new PDF
    Extract {
        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,

        /// Output file
        #[arg(short, long, default_value = "output.pdf")]
        output: PathBuf,

        /// Page(s) to extract, e.g. "3" or "2-5" (1-based)
        #[arg(short, long, num_args = 1..)]
        pages: Vec<String>,
    },

    /// Rotate one or more pages 90 degrees clockwise
    Rotate {
        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,

        /// Output file
        #[arg(short, long, default_value = "output.pdf")]
        output: PathBuf,

        /// Page(s) to rotate, e.g. "3" or "2-5" (1-based)
        #[arg(short, long, num_args = 1..)]
        pages: Vec<String>,
    },

    /// Delete one or more pages
    Delete {
        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,

        /// Output file
        #[arg(short, long, default_value = "output.pdf")]
        output: PathBuf,

        /// Page(s) to delete, e.g. "3" or "2-5" (1-based)
        #[arg(short, long, num_args = 1..)]
        pages: Vec<String>,
    },
}
