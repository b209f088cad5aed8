pub mod health;
pub mod oauth;
pub mod sales;
pub mod webhook;

pub use health::health_handler;
pub use oauth::hotmart_callback;
pub use sales::{list_local_sales, list_hotmart_sales};
pub use webhook::hotmart_webhook;
