//! Config module

mod constants;
mod env;

pub use constants::{DEFAULT_HOST, DEFAULT_PORT, PORT_ENV_VAR, SERVICE_NAME};
pub use env::Config;
