//! Main entry point for the msgcat command line tool.

use anyhow::Context;
use clap::Parser;
use msgcat_cli::{report_failure, App, Cli};
use msgcat_common::init_logging;
use msgcat_config::{Config, ConfigLoader};
use msgcat_i18n::WriterRecipient;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            report_failure(&mut std::io::stderr().lock(), &e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let config = load_config(cli)?;
    init_logging(&config.logging).context("Failed to initialize logging")?;

    let app = App::new(&config).context("Failed to load messages")?;
    Ok(app.run(&cli.command, &WriterRecipient::stdout())?)
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::load_config(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => ConfigLoader::load().context("Failed to load configuration")?,
    };
    Ok(config)
}
