use crate::app::config::Config;
use crate::models::TokenBundle;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info, warn};
use url::Url;

const AUTHORIZATION_CODE_GRANT: &str = "authorization_code";

#[derive(Debug, Error)]
pub enum HotmartError {
    #[error("token exchange failed with status {status}: {message}")]
    TokenExchangeFailed { status: u16, message: String },
    #[error("sales listing failed with status {status}")]
    SalesListingFailed { status: u16, body: String },
    #[error("unexpected response body: {0}")]
    InvalidBody(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Corpo form-encoded enviado ao endpoint de token.
#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    grant_type: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
    redirect_uri: &'a str,
    code: &'a str,
}

/// Cliente das duas chamadas feitas à Hotmart: troca do code OAuth e
/// listagem de vendas.
pub struct HotmartClient {
    client: Client,
    token_url: Url,
    sales_url: Url,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
}

impl HotmartClient {
    pub fn new(config: &Config) -> Result<Self, HotmartError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        if config.client_secret.is_none() {
            warn!("CLIENT_SECRET not set; OAuth exchange will likely be refused");
        }
        if config.redirect_uri.is_none() {
            warn!("REDIRECT_URI not set; OAuth exchange will likely be refused");
        }

        Ok(Self {
            client,
            token_url: config.token_url.clone(),
            sales_url: config.sales_url.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone().unwrap_or_default(),
            redirect_uri: config.redirect_uri.clone().unwrap_or_default(),
        })
    }

    /// Troca o authorization code por um token. Uma única tentativa.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenBundle, HotmartError> {
        let form = TokenRequest {
            grant_type: AUTHORIZATION_CODE_GRANT,
            client_id: &self.client_id,
            client_secret: &self.client_secret,
            redirect_uri: &self.redirect_uri,
            code,
        };

        let response = self
            .client
            .post(self.token_url.clone())
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let message = response.text().await.unwrap_or_default();
            error!("Erro ao trocar code por token ({}): {}", status, message);
            return Err(HotmartError::TokenExchangeFailed {
                status: status.as_u16(),
                message,
            });
        }

        match response.json::<Value>().await? {
            Value::Object(map) => {
                info!("OAuth code exchanged for token bundle");
                Ok(TokenBundle::from(map))
            }
            other => Err(HotmartError::InvalidBody(format!(
                "expected a JSON object from token endpoint, got {}",
                other
            ))),
        }
    }

    /// Busca a lista de vendas com o token salvo e devolve o JSON sem
    /// alterações.
    pub async fn list_sales(&self, access_token: &str) -> Result<Value, HotmartError> {
        let response = self
            .client
            .get(self.sales_url.clone())
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!("Hotmart sales listing returned {}", status);
            return Err(HotmartError::SalesListingFailed {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| HotmartError::InvalidBody(format!("sales listing is not JSON: {}", e)))
    }
}
