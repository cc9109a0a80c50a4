use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Context;
use log::info;
use serde::Deserialize;
use crate::analyzer::AmountPolicy;

const CONFIG_DIR: &str = "transq";
const CONFIG_FILE: &str = "config.toml";

#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Printed after every amount, e.g. "MDL"
    pub currency: String,
    pub amount_policy: AmountPolicy,
}

impl Config {
    /// `<config dir>/transq/config.toml`, e.g. `~/.config/transq/config.toml` on Linux
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load config from a TOML file. A missing file gives the default config.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Config> {
        if path.exists() && path.is_file() {
            info!("Loading config from {:?}", path);
            let content = fs::read_to_string(path)
                .with_context(|| format!("Unable to read config file {:?}", path))?;
            Config::parse(&content).with_context(|| format!("Invalid config file {:?}", path))
        } else {
            Ok(Config::default())
        }
    }

    pub fn parse(content: &str) -> anyhow::Result<Config> {
        Ok(toml::from_str::<Config>(content)?)
    }
}
