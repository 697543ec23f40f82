//! Server configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! `portfolio.{toml,yaml,json}` in the working directory, then `PORTFOLIO_*`
//! environment variables.

use config::{Config, ConfigError, Environment, File};
use portfolio_core::{PortfolioError, Result};
use serde::Deserialize;
use std::path::PathBuf;

pub const ENV_PREFIX: &str = "PORTFOLIO";
const CONFIG_FILE: &str = "portfolio";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8001;
const DEFAULT_DATABASE_PATH: &str = "projects.db";
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub database_path: String,
    pub static_dir: PathBuf,
}

impl Settings {
    /// Load settings from defaults, the optional config file and the process
    /// environment.
    pub fn load() -> Result<Self> {
        Self::load_with(Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with(env: Environment) -> Result<Self> {
        Self::build(env).map_err(|e| PortfolioError::Config(e.to_string()))
    }

    fn build(env: Environment) -> std::result::Result<Self, ConfigError> {
        Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("database_path", DEFAULT_DATABASE_PATH)?
            .set_default("static_dir", DEFAULT_STATIC_DIR)?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// `host:port`, suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
