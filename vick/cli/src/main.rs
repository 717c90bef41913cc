#![warn(clippy::indexing_slicing)]

use clap::Parser;
use config::{Cli, Commands};
use service::{labels_command, names_command, render_command};

mod config;
mod error;
mod logging;
mod service;

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    logging::init_tracing_registry();

    match cli.commands {
        Commands::Render(args) => render_command(args)?,
        Commands::Labels(args) => labels_command(args)?,
        Commands::Names(args) => names_command(args)?,
    }

    Ok(())
}
