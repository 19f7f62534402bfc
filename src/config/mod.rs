//! Configuration module for sqlvend.
//!
//! Handles connection URL templates, named connection settings and
//! environment variable expansion.

mod connection;
mod settings;

pub use connection::{
    build_connection_url, ConnectionArguments, ConnectionError, ParameterKind, UrlParameter,
    UrlTemplate,
};
pub use settings::{expand_env_vars, ConnectionSettings, Settings, SettingsError};
