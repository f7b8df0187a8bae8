use std::{env, env::VarError, path::PathBuf};

use crate::{errors::AppError, utils::parse_flag};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Directory holding `users.json`, `categories.json` and `products.json`.
    /// The bundled collections are used when unset.
    pub data_dir: Option<PathBuf>,
    /// Refuse to start when a category's owner does not resolve.
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            data_dir: None,
            strict: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key))
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let read = |key: &str| -> Result<Option<String>, AppError> {
            match lookup(key) {
                Ok(value) => Ok(Some(value)),
                Err(VarError::NotPresent) => Ok(None),
                Err(e) => Err(AppError::EnvVarError(e)),
            }
        };

        let mut config = Config::default();

        if let Some(host) = read("CATALOG_HOST")? {
            config.host = host;
        }
        if let Some(port) = read("CATALOG_PORT")? {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| AppError::ConfigError(format!("invalid CATALOG_PORT: {port}")))?;
        }
        config.data_dir = read("CATALOG_DATA_DIR")?
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);
        if let Some(strict) = read("CATALOG_STRICT")? {
            config.strict = parse_flag(&strict)
                .ok_or_else(|| AppError::ConfigError(format!("invalid CATALOG_STRICT: {strict}")))?;
        }

        Ok(config)
    }
}
