mod cli;
mod command;
mod config;
mod error;

use error::WrapErr;

use std::process::ExitCode;

use clap::CommandFactory;
use clap::Parser;
use tracing::Level;

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> error::Result<ExitCode> {
    color_eyre::install()?;

    let command_line = cli::Cli::parse();
    init_tracing(command_line.verbose);

    let cfg = crate::config::Config::load().context("Load configuration error")?;

    if let Some(command) = command_line.command {
        let cmd: Box<dyn command::Command> = match command {
            cli::Commands::Index { corpus_root, rebuild } => {
                Box::new(command::IndexCommand::new(cfg, corpus_root, rebuild))
            }
            cli::Commands::Search { query, field, rebuild } => {
                Box::new(command::SearchCommand::new(cfg, query, field, rebuild))
            }
            cli::Commands::ClearIndex => {
                Box::new(command::ClearIndexCommand::new(cfg))
            }
        };
        if let Err(report) = cmd.execute().await {
            if let Some(e) = error::client_error(&report) {
                eprintln!("{}", e);
                return Ok(ExitCode::from(error::CLIENT_ERROR_EXIT_CODE));
            }
            return Err(report);
        }
    } else {
        cli::Cli::command().print_help()?;
    }

    Ok(ExitCode::SUCCESS)
}
