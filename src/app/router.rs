use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::app::state::AppState;
use crate::handlers::*;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_handler))
        .route("/hotmart/callback", get(hotmart_callback))
        .route("/hotmart", post(hotmart_webhook))
        .route("/hotmart/vendas", get(list_hotmart_sales))
        .route("/vendas", get(list_local_sales))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
