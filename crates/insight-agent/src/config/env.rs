//! Config loading from environment variables

use super::constants::{DEFAULT_HOST, DEFAULT_PORT, PORT_ENV_VAR};
use crate::errors::ApiError;

/// API Server Configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// Bind host (e.g. "0.0.0.0")
  pub host: String,
  /// Listening port
  pub port: u16,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      host: DEFAULT_HOST.to_string(),
      port: DEFAULT_PORT,
    }
  }
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if `PORT` is set but is not a valid port number
  pub fn from_env() -> crate::errors::Result<Self> {
    let port = std::env::var(PORT_ENV_VAR).ok();
    Self::from_port_var(port.as_deref())
  }

  /// Builds configuration from the raw value of `PORT`
  ///
  /// `None` falls back to [`DEFAULT_PORT`].
  ///
  /// # Errors
  /// Returns an error if the value is not a valid port number
  pub fn from_port_var(port: Option<&str>) -> crate::errors::Result<Self> {
    let port = match port {
      Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
        ApiError::config(format!("Invalid {PORT_ENV_VAR} value {raw:?}: {e}"))
      })?,
      None => DEFAULT_PORT,
    };

    Ok(Self {
      host: DEFAULT_HOST.to_string(),
      port,
    })
  }

  /// Address to bind the listener to (e.g. "0.0.0.0:8080")
  #[must_use]
  pub fn bind_addr(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}
