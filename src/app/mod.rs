pub mod config;
pub mod error;
pub mod router;
pub mod state;

pub use config::Config;
pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
