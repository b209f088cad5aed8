pub mod hotmart_client;
pub mod json_file;
pub mod normalizer;
pub mod sale_log;
pub mod token_store;

pub use hotmart_client::{HotmartClient, HotmartError};
pub use json_file::StoreError;
pub use normalizer::{normalize_sale, NormalizeError};
pub use sale_log::SaleLog;
pub use token_store::TokenStore;
