use std::process::ExitCode;

use anyhow::{bail, Result};

mod utils;

mod cli;
mod config;
mod expense;


use config::Config;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if let Some(error) = error.downcast_ref::<clap::Error>() {
                error.exit();
            }
            if error
                .downcast_ref::<spent::Error>()
                .is_some_and(spent::Error::is_aborted)
            {
                eprintln!("Aborted!");
                return ExitCode::from(1);
            }

            eprintln!("Error: {error:?}");
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<()> {
    let config = Config::try_parse()?;

    env_logger::Builder::new()
        .filter_level(config.log_level_filter())
        .init();

    match config.command() {
        Some(command) => expense::run(&config, command),
        None => bail!("No command provided"),
    }
}
