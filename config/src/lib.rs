use anyhow::Error;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RankingConfig {
    pub default_limit: i64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    pub database: DatabaseConfig,
    pub ranking: RankingConfig,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path)?;
        let parsed: Self = toml::from_str(&contents)?;
        Ok(parsed)
    }
}
