use crate::app::config::Config;
use crate::services::{HotmartClient, HotmartError, SaleLog, TokenStore};
use std::sync::Arc;

/// Estado compartilhado entre os handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub token_store: Arc<TokenStore>,
    pub sale_log: Arc<SaleLog>,
    pub hotmart: Arc<HotmartClient>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, HotmartError> {
        let hotmart = HotmartClient::new(&config)?;
        Ok(Self {
            token_store: Arc::new(TokenStore::new(config.token_file.clone())),
            sale_log: Arc::new(SaleLog::new(config.sales_file.clone())),
            hotmart: Arc::new(hotmart),
            config: Arc::new(config),
        })
    }
}
