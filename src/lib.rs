pub mod app;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

pub use app::{build_router, AppState, Config};
