use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use mealwise::{Cli, Config};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealwise::observability::init_observability(
        "mealwise",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let envelope = mealwise::execute(cli, &config).await;
    println!("{}", serde_json::to_string_pretty(&envelope)?);

    Ok(if envelope.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
