use crate::services::{HotmartError, NormalizeError, StoreError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{debug, error};

pub const MSG_MISSING_CODE: &str = "❌ Código OAuth não recebido";
pub const MSG_EXCHANGE_FAILED: &str = "❌ Falha ao obter token";
pub const MSG_INVALID_TOKEN: &str = "Token inválido";
pub const MSG_INVALID_SALE: &str = "Erro ao processar venda";
pub const MSG_NOT_CONNECTED: &str = "Hotmart não conectada";
pub const MSG_SALES_FETCH: &str = "Erro ao buscar vendas";
pub const MSG_INTERNAL: &str = "Erro interno";

/// Falhas visíveis ao cliente HTTP. Cada variante tem status e corpo fixos.
#[derive(Debug)]
pub enum ApiError {
    MissingCode,
    ExchangeFailed(HotmartError),
    InvalidWebhookToken,
    InvalidSale(String),
    NotConnected,
    Upstream { status: StatusCode, detail: String },
    Storage(StoreError),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        ApiError::Storage(e)
    }
}

impl From<NormalizeError> for ApiError {
    fn from(e: NormalizeError) -> Self {
        ApiError::InvalidSale(e.to_string())
    }
}

impl From<HotmartError> for ApiError {
    fn from(e: HotmartError) -> Self {
        match e {
            HotmartError::SalesListingFailed { status, body } => ApiError::Upstream {
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                detail: body,
            },
            other => ApiError::Upstream {
                status: StatusCode::BAD_GATEWAY,
                detail: other.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingCode => (StatusCode::BAD_REQUEST, MSG_MISSING_CODE).into_response(),
            ApiError::ExchangeFailed(e) => {
                debug!("Exchange failure returned to caller: {}", e);
                (StatusCode::BAD_REQUEST, MSG_EXCHANGE_FAILED).into_response()
            }
            ApiError::InvalidWebhookToken => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "erro": MSG_INVALID_TOKEN })),
            )
                .into_response(),
            ApiError::InvalidSale(reason) => {
                debug!("Sale discarded: {}", reason);
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "erro": MSG_INVALID_SALE })),
                )
                    .into_response()
            }
            ApiError::NotConnected => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "erro": MSG_NOT_CONNECTED })),
            )
                .into_response(),
            ApiError::Upstream { status, detail } => (
                status,
                Json(json!({ "erro": MSG_SALES_FETCH, "detalhe": detail })),
            )
                .into_response(),
            ApiError::Storage(e) => {
                error!("Storage failure: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "erro": MSG_INTERNAL })),
                )
                    .into_response()
            }
        }
    }
}
