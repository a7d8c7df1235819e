use clap::Parser;
use stegolab_core::StegoError;

mod cli;
mod commands;

use crate::cli::{CliArgs, Commands};

pub type CliResult<T> = Result<T, StegoError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    match args.command {
        Commands::Hide(hide) => hide.run(),
        Commands::Unveil(unveil) => unveil.run(),
        Commands::Analyze(analyze) => analyze.run(),
        Commands::Capacity(capacity) => capacity.run(),
    }
}
