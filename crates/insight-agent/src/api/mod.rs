//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{health_check, post_analyze};
pub use routes::{create_router, run_server, shutdown_signal};
pub use state::AppState;
