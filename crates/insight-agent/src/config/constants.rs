//! API configuration constants

/// Name reported by the health endpoint
pub const SERVICE_NAME: &str = "insight-agent";

/// Environment variable selecting the listening port
pub const PORT_ENV_VAR: &str = "PORT";

/// Default listening port
///
/// Used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 8080;

/// Default bind host
///
/// Listens on all interfaces so the service is reachable from outside a container.
pub const DEFAULT_HOST: &str = "0.0.0.0";
