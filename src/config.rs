//! Runtime configuration: defaults, optional `config/config.toml`, then
//! `MERGINGTON__*` environment variables.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub static_dir: PathBuf,
    pub log_level: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default(
                "database.path",
                default_db_path().to_string_lossy().into_owned(),
            )?
            .set_default("static_dir", "./static")?
            .set_default("log_level", "info")?
            .add_source(File::with_name("config/config").required(false))
            // e.g. MERGINGTON__SERVER__PORT=9000
            .add_source(Environment::with_prefix("MERGINGTON").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn default_db_path() -> PathBuf {
    match dirs::data_dir() {
        Some(base) => base.join("mergington-activities").join("data.db"),
        None => PathBuf::from("data.db"),
    }
}
