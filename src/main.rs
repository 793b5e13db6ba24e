mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;

use cli::{Cli, Commands};
use config::app_config::AppConfig;

fn main() {
    let args = Cli::parse();

    let result = AppConfig::load(args.config.as_deref()).and_then(|config| {
        match &args.command {
            Commands::Diff {
                file_a,
                file_b,
                changed,
            } => cli::commands::diff::execute(file_a, file_b, *changed, &config, args.quiet),
            Commands::Summary { file_a, file_b } => {
                cli::commands::summary::execute(file_a, file_b, args.quiet)
            }
            Commands::Export {
                file_a,
                file_b,
                format,
                output,
                changed,
            } => cli::commands::export::execute(
                file_a,
                file_b,
                format.as_deref(),
                output.as_deref(),
                *changed,
                &config,
                args.quiet,
            ),
        }
    });

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
