//! Connection URL templates.
//!
//! A [`UrlTemplate`] is an ordered schema of named parameters. Building a
//! URL walks the parameters in declaration order and appends each present
//! value after its separator:
//!
//! ```text
//! jdbc:postgresql://  [hostname]  :{port}  /{database}
//!   prefix            required    optional optional
//! ```
//!
//! Arguments the template does not declare are ignored.

use std::collections::HashMap;

use tracing::warn;

/// Caller-supplied values keyed by parameter name.
pub type ConnectionArguments = HashMap<String, String>;

/// Error type for connection URL building.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectionError {
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error("Duplicate template parameter: {0}")]
    DuplicateParameter(String),
}

/// How a parameter value is validated before it is embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    /// Embedded as given.
    Text,
    /// Must parse as an integer; embedded as its absolute value.
    Port,
}

/// One named slot of a [`UrlTemplate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParameter {
    pub name: String,
    pub required: bool,
    pub kind: ParameterKind,
    /// Text emitted before the value (e.g. `:` before a port).
    pub separator: String,
}

impl UrlParameter {
    /// A required text parameter.
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
            kind: ParameterKind::Text,
            separator: String::new(),
        }
    }

    /// An optional text parameter.
    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            required: false,
            ..Self::required(name)
        }
    }

    /// An optional port parameter preceded by `:`.
    pub fn port() -> Self {
        Self::optional("port").kind(ParameterKind::Port).separator(":")
    }

    pub fn kind(mut self, kind: ParameterKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// An optional port left blank is dropped rather than rejected.
    fn empty_means_absent(&self) -> bool {
        !self.required && self.kind == ParameterKind::Port
    }

    /// Validate and format `value` for embedding.
    fn format_value(&self, value: &str) -> Result<String, ConnectionError> {
        match self.kind {
            ParameterKind::Text => Ok(value.to_string()),
            ParameterKind::Port => {
                let port: i32 = value.parse().map_err(|_| {
                    ConnectionError::InvalidArgument {
                        name: self.name.clone(),
                        reason: format!("'{}' is not a valid port number", value),
                    }
                })?;
                if port < 0 {
                    warn!(
                        parameter = %self.name,
                        port,
                        "negative port value, using its absolute value"
                    );
                }
                Ok(port.unsigned_abs().to_string())
            }
        }
    }
}

/// Ordered, named-parameter schema for a vendor's connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate {
    vendor_id: String,
    prefix: String,
    parameters: Vec<UrlParameter>,
}

impl UrlTemplate {
    /// Create an empty template for `vendor_id` whose URLs start with `prefix`.
    pub fn new(vendor_id: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            vendor_id: vendor_id.into(),
            prefix: prefix.into(),
            parameters: Vec::new(),
        }
    }

    /// Template of the common `prefix[hostname]:{port}<db_separator>{database}` shape.
    pub fn host_port_database(
        vendor_id: impl Into<String>,
        prefix: impl Into<String>,
        database_separator: &str,
    ) -> Self {
        Self {
            vendor_id: vendor_id.into(),
            prefix: prefix.into(),
            parameters: vec![
                UrlParameter::required("hostname"),
                UrlParameter::port(),
                UrlParameter::optional("database").separator(database_separator),
            ],
        }
    }

    /// Append a parameter; names must be unique within the template.
    pub fn add(&mut self, parameter: UrlParameter) -> Result<(), ConnectionError> {
        if self.parameter(&parameter.name).is_some() {
            return Err(ConnectionError::DuplicateParameter(parameter.name));
        }
        self.parameters.push(parameter);
        Ok(())
    }

    /// Builder-style [`add`](Self::add).
    pub fn with_parameter(mut self, parameter: UrlParameter) -> Result<Self, ConnectionError> {
        self.add(parameter)?;
        Ok(self)
    }

    pub fn vendor_id(&self) -> &str {
        &self.vendor_id
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn parameters(&self) -> &[UrlParameter] {
        &self.parameters
    }

    pub fn parameter(&self, name: &str) -> Option<&UrlParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Human-readable form: required slots in `[]`, optional in `{}`.
    ///
    /// e.g. `jdbc:postgresql://[hostname]:{port}/{database}`
    pub fn pattern(&self) -> String {
        let mut out = self.prefix.clone();
        for p in &self.parameters {
            out.push_str(&p.separator);
            if p.required {
                out.push_str(&format!("[{}]", p.name));
            } else {
                out.push_str(&format!("{{{}}}", p.name));
            }
        }
        out
    }

    /// Build a connection URL from `arguments`.
    ///
    /// An empty optional port is treated as absent; other empty values are
    /// embedded as given.
    pub fn build(&self, arguments: &ConnectionArguments) -> Result<String, ConnectionError> {
        let mut url = self.prefix.clone();

        for p in &self.parameters {
            let value = match arguments.get(&p.name) {
                Some(v) if v.is_empty() && p.empty_means_absent() => continue,
                Some(v) => v,
                None if p.required => {
                    return Err(ConnectionError::MissingArgument(p.name.clone()))
                }
                None => continue,
            };
            url.push_str(&p.separator);
            url.push_str(&p.format_value(value)?);
        }

        Ok(url)
    }
}

/// Build a driver-ready connection string from `template` and `arguments`.
pub fn build_connection_url(
    template: &UrlTemplate,
    arguments: &ConnectionArguments,
) -> Result<String, ConnectionError> {
    template.build(arguments)
}
