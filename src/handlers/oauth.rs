use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::{error, info};

use crate::app::{ApiError, AppState};

pub const MSG_CONNECTED: &str = "✅ Hotmart conectada com sucesso! Pode voltar ao app.";

#[derive(Deserialize)]
pub struct CallbackQuery {
    code: Option<String>,
}

/// Redirect da Hotmart após o usuário autorizar o app.
pub async fn hotmart_callback(
    State(state): State<AppState>,
    Query(query): Query<CallbackQuery>,
) -> Result<&'static str, ApiError> {
    let code = match query.code.filter(|c| !c.is_empty()) {
        Some(code) => code,
        None => return Err(ApiError::MissingCode),
    };

    let bundle = match state.hotmart.exchange_code(&code).await {
        Ok(bundle) => bundle,
        Err(e) => {
            error!("OAuth exchange failed: {}", e);
            return Err(ApiError::ExchangeFailed(e));
        }
    };

    state.token_store.save(&bundle).await?;
    info!("Token OAuth salvo em {}", state.token_store.path().display());

    Ok(MSG_CONNECTED)
}
