//! TOML-based configuration for sqlvend.
//!
//! Supports a config file (`sqlvend.toml`) with environment variable expansion
//! in connection arguments.
//!
//! Example configuration:
//! ```toml
//! [connections.warehouse]
//! vendor = "Greenplum"
//!
//! [connections.warehouse.arguments]
//! hostname = "${GP_HOST}"
//! port = "5432"
//! database = "sales"
//!
//! [connections.orders]
//! vendor = "MySQL"
//! arguments = { hostname = "orders-db", database = "orders" }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::connection::{ConnectionArguments, ConnectionError};
use crate::registry::{DialectRegistry, RegistryError};

/// Failure loading settings or turning them into a URL.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Connection not found: {0}")]
    ConnectionNotFound(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Connection(#[from] ConnectionError),
}

/// Contents of a settings file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub connections: HashMap<String, ConnectionSettings>,
}

/// One named connection: a vendor id plus its URL template arguments.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConnectionSettings {
    /// Vendor id, matched exactly against the registry.
    pub vendor: String,

    /// URL template arguments (values support `${ENV_VAR}` expansion).
    #[serde(default)]
    pub arguments: HashMap<String, String>,
}

impl ConnectionSettings {
    /// Arguments with environment variables expanded.
    pub fn resolved_arguments(&self) -> Result<ConnectionArguments, SettingsError> {
        self.arguments
            .iter()
            .map(|(name, value)| Ok((name.clone(), expand_env_vars(value)?)))
            .collect()
    }

    /// Resolve the vendor in `registry` and build the connection URL.
    pub fn build_url(&self, registry: &DialectRegistry) -> Result<String, SettingsError> {
        let adapter = registry.resolve_name(&self.vendor)?;
        let arguments = self.resolved_arguments()?;
        Ok(adapter.build_connection_url(&arguments)?)
    }
}

impl Settings {
    /// Environment variable naming an explicit settings file.
    pub const CONFIG_ENV: &'static str = "SQLVEND_CONFIG";

    /// Read and parse a settings file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SettingsError::FileNotFound(path.to_path_buf()),
            _ => SettingsError::ReadError(e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Load from the first settings file found, or empty settings if none.
    ///
    /// `$SQLVEND_CONFIG` wins outright and must exist. Otherwise
    /// `./sqlvend.toml` then `<config dir>/sqlvend/config.toml` are tried.
    pub fn load() -> Result<Self, SettingsError> {
        if let Some(path) = env::var_os(Self::CONFIG_ENV) {
            return Self::from_file(PathBuf::from(path));
        }

        let candidates = [
            Some(PathBuf::from("sqlvend.toml")),
            dirs::config_dir().map(|dir| dir.join("sqlvend").join("config.toml")),
        ];
        match candidates.into_iter().flatten().find(|p| p.is_file()) {
            Some(path) => {
                debug!(path = %path.display(), "loading settings");
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn get_connection(&self, name: &str) -> Result<&ConnectionSettings, SettingsError> {
        self.connections
            .get(name)
            .ok_or_else(|| SettingsError::ConnectionNotFound(name.to_string()))
    }
}

/// Expand environment variables in a string.
///
/// Supports `${VAR}` and `$VAR` syntax. A lone `$` is kept.
pub fn expand_env_vars(s: &str) -> Result<String, SettingsError> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            result.push(c);
            continue;
        }

        let var_name: String = if chars.next_if_eq(&'{').is_some() {
            let name: String = std::iter::from_fn(|| chars.next_if(|&ch| ch != '}')).collect();
            chars.next_if_eq(&'}');
            name
        } else {
            std::iter::from_fn(|| chars.next_if(|&ch| ch.is_alphanumeric() || ch == '_'))
                .collect()
        };

        if var_name.is_empty() {
            result.push('$');
            continue;
        }

        let value = env::var(&var_name).map_err(|_| SettingsError::MissingEnvVar(var_name))?;
        result.push_str(&value);
    }

    Ok(result)
}
