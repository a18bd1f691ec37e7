//! Command line parsing for interactive play, plus the config layering shared
//! with the headless runner.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use crate::core::GameConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayArgs {
    pub config: Option<PathBuf>,
    pub seed: Option<u32>,
}

pub fn parse_play_args(args: &[String]) -> Result<PlayArgs> {
    let mut out = PlayArgs::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("args: missing value for --config"))?;
                out.config = Some(PathBuf::from(v));
            }
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("args: missing value for --seed"))?;
                out.seed = Some(parse_seed(v).map_err(|_| anyhow!("args: invalid --seed value: {}", v))?);
            }
            other => return Err(anyhow!("args: unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(out)
}

pub(crate) fn parse_seed(v: &str) -> Result<u32, std::num::ParseIntError> {
    v.trim().parse::<u32>()
}

/// Defaults, then the TOML file, then the environment, then `seed`.
pub fn load_config(path: Option<&Path>, seed: Option<u32>) -> Result<GameConfig> {
    load_config_with(path, seed, |var| std::env::var(var).ok())
}

/// [`load_config`] with the environment replaced by `lookup`.
pub fn load_config_with<F>(path: Option<&Path>, seed: Option<u32>, lookup: F) -> Result<GameConfig>
where
    F: Fn(&'static str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    config.apply_overrides(lookup)?;
    if seed.is_some() {
        config.seed = seed;
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}
