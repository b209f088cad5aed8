use axum::{
    body::Bytes,
    extract::State,
    http::HeaderMap,
    response::Json,
};
use serde_json::{json, Value};
use tracing::{error, info, warn, Instrument};
use uuid::Uuid;

use crate::app::{ApiError, AppState};
use crate::services::normalize_sale;
use crate::utils::{money::format_currency, secret::token_matches};

pub const WEBHOOK_TOKEN_HEADER: &str = "x-hotmart-token";

/// Recebe a notificação de venda da Hotmart.
pub async fn hotmart_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let delivery_id = Uuid::new_v4();
    process_delivery(state, headers, body)
        .instrument(tracing::info_span!("hotmart_webhook", %delivery_id))
        .await
}

// The shared secret is checked before the body is parsed.
async fn process_delivery(
    state: AppState,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let received = headers
        .get(WEBHOOK_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok());
    if !token_matches(state.config.webhook_token.as_deref(), received) {
        warn!("Webhook rejected: invalid {} header", WEBHOOK_TOKEN_HEADER);
        return Err(ApiError::InvalidWebhookToken);
    }

    let payload: Value = serde_json::from_slice(&body).map_err(|e| {
        error!("Webhook body is not JSON: {}", e);
        ApiError::InvalidSale(e.to_string())
    })?;

    let venda = normalize_sale(&payload).map_err(|e| {
        error!("Erro ao normalizar venda: {}", e);
        ApiError::from(e)
    })?;

    let stored = state.sale_log.append(venda).await?;
    info!(
        produto = %stored.produto,
        valor = %format_currency(stored.valor),
        status = ?stored.status,
        "Venda normalizada salva: {}",
        serde_json::to_string(&stored).unwrap_or_default()
    );

    Ok(Json(json!({ "status": "ok" })))
}
