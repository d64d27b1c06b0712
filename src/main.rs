mod cli;
mod commands;
mod error;
mod page_range;
mod pdf;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use commands::delete::DeleteRequest;
use commands::extract::ExtractRequest;
use commands::merge::MergeRequest;
use commands::rotate::RotateRequest;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Merge { input, output } => {
            commands::merge::run(&MergeRequest {
                inputs: input,
                output,
            })?;
        }
        Commands::Extract {
            input,
            output,
            pages,
        } => {
            let pages = page_range::resolve(&pages)?;
            commands::extract::run(&ExtractRequest {
                input,
                output,
                pages,
            })?;
        }
        Commands::Rotate {
            input,
            output,
            pages,
        } => {
            let pages = page_range::resolve(&pages)?;
            commands::rotate::run(&RotateRequest {
                input,
                output,
                pages,
            })?;
        }
        Commands::Delete {
            input,
            output,
            pages,
        } => {
            let pages = page_range::resolve(&pages)?;
            commands::delete::run(&DeleteRequest {
                input,
                output,
                pages,
            })?;
        }
    }

    Ok(())
}
