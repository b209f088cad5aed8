use axum::{extract::State, response::Json};
use serde_json::Value;
use tracing::{info, warn};

use crate::app::{ApiError, AppState};

/// Lista as vendas direto da API da Hotmart usando o token salvo.
pub async fn list_hotmart_sales(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let bundle = state.token_store.load().await?;
    let access_token = match bundle.as_ref().and_then(|b| b.access_token()) {
        Some(token) => token,
        None => return Err(ApiError::NotConnected),
    };

    match state.hotmart.list_sales(access_token).await {
        Ok(body) => Ok(Json(body)),
        Err(e) => {
            warn!("Erro ao buscar vendas na Hotmart: {}", e);
            Err(e.into())
        }
    }
}

/// Vendas recebidas por webhook, na ordem de chegada.
pub async fn list_local_sales(
    State(state): State<AppState>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let vendas = state.sale_log.list().await?;
    info!("Listing {} stored sales", vendas.len());
    Ok(Json(vendas))
}
