mod cli;
mod config;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::Settings;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::from_env()?;
    person::logging::init(settings.log_profile);
    tracing::debug!(?settings, "loaded settings");

    let output = cli::execute(cli, &settings)?;
    println!("{output}");

    Ok(())
}
