//! Propsync CLI entry point.

use clap::Parser;
use propsync::cli::{self, Cli, Commands, Direction, EXIT_ERROR};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Fields(args) => cli::run_sync(&args, Direction::Fields),
        Commands::Properties(args) => cli::run_sync(&args, Direction::Properties),
        Commands::Ids(args) => cli::run_ids(&args),
        Commands::Init(args) => cli::run_init(&args),
    };

    let exit_code = match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}
