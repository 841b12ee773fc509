#![allow(dead_code)]

use clap::Parser;
use mealwise::{Cli, Config};
use serde_json::Value;
use temp_dir::TempDir;

/// Config pointing at a fresh snapshot inside `dir`.
pub fn test_config(dir: &TempDir) -> anyhow::Result<Config> {
    let path = dir.child("config.toml");
    std::fs::write(
        &path,
        format!(
            "[store]\npath = {:?}\ncreate_if_missing = true\n\n[suggestion]\ndefault_limit = 5\n",
            dir.child("store.json").display().to_string()
        ),
    )?;

    Ok(Config::load(Some(path.display().to_string()))?)
}

/// Parses `args` as a command line and returns the printed envelope.
pub async fn run(config: &Config, args: &[&str]) -> anyhow::Result<Value> {
    let cli = Cli::try_parse_from(std::iter::once("mealwise").chain(args.iter().copied()))?;
    let envelope = mealwise::execute(cli, config).await;

    Ok(serde_json::to_value(envelope)?)
}

/// Like [`run`] but fails unless the command succeeded, returning `data`.
pub async fn data(config: &Config, args: &[&str]) -> anyhow::Result<Value> {
    let envelope = run(config, args).await?;
    anyhow::ensure!(envelope["success"] == true, "command failed: {envelope}");

    Ok(envelope["data"].clone())
}
