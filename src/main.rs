use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use fillin::cli::Cli;
use fillin::config::Config;
use fillin::interact::TerminalInteract;
use fillin::session::{RunOutcome, Session};

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref())
        .context("Failed to load configuration")?
        .with_env()
        .with_cli(&cli);

    info!("fillin starting");

    let mut io = TerminalInteract::new()?;
    let session = Session::from_cli(config, &cli);

    match session.run(&mut io)? {
        RunOutcome::Completed => Ok(()),
        RunOutcome::Aborted => {
            println!("{} Aborted, nothing written", "⚠".yellow());
            Ok(())
        }
    }
}
