use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

/// Identificador fixo do app cadastrado na Hotmart.
pub const DEFAULT_CLIENT_ID: &str = "9134999a-4919-4a96-bc93-60f67c990981";
pub const DEFAULT_TOKEN_URL: &str = "https://api-sec-vlc.hotmart.com/security/oauth/token";
pub const DEFAULT_SALES_URL: &str = "https://developers.hotmart.com/payments/api/v1/sales";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid URL for {field}: {source}")]
    InvalidUrl {
        field: &'static str,
        source: url::ParseError,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub server_port: u16,
    pub client_id: String,
    pub client_secret: Option<String>,
    pub redirect_uri: Option<String>,
    pub webhook_token: Option<String>,
    pub sales_file: PathBuf,
    pub token_file: PathBuf,
    pub token_url: Url,
    pub sales_url: Url,
    pub http_timeout_secs: u64,
}

/// Contents of the optional TOML file. Every key may be omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub redirect_uri: Option<String>,
    pub webhook_token: Option<String>,
    pub sales_file: Option<PathBuf>,
    pub token_file: Option<PathBuf>,
    pub token_url: Option<String>,
    pub sales_url: Option<String>,
    pub http_timeout_secs: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Config {
    /// Process environment on top of `file` and the built-in defaults.
    pub fn with_env(file: FileConfig) -> Result<Self, ConfigError> {
        Self::from_sources(file, |key| env::var(key).ok())
    }

    /// Layers defaults, then `file`, then whatever `lookup` returns for each
    /// environment variable name.
    pub fn from_sources<F>(file: FileConfig, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let string = |key: &str, from_file: Option<String>| {
            lookup(key).filter(|v| !v.is_empty()).or(from_file)
        };

        let token_url = string("HOTMART_TOKEN_URL", file.token_url)
            .unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string());
        let sales_url = string("HOTMART_SALES_URL", file.sales_url)
            .unwrap_or_else(|| DEFAULT_SALES_URL.to_string());

        Ok(Self {
            host: string("HOST", file.host).unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .or(file.port)
                .unwrap_or(5000),
            client_id: string("CLIENT_ID", file.client_id)
                .unwrap_or_else(|| DEFAULT_CLIENT_ID.to_string()),
            client_secret: string("CLIENT_SECRET", file.client_secret),
            redirect_uri: string("REDIRECT_URI", file.redirect_uri),
            webhook_token: string("TOKEN_VALIDACAO", file.webhook_token),
            sales_file: lookup("ARQUIVO_VENDAS")
                .map(PathBuf::from)
                .or(file.sales_file)
                .unwrap_or_else(|| PathBuf::from("vendas_hotmart.json")),
            token_file: lookup("ARQUIVO_TOKEN")
                .map(PathBuf::from)
                .or(file.token_file)
                .unwrap_or_else(|| PathBuf::from("hotmart_token.json")),
            token_url: parse_url("token_url", &token_url)?,
            sales_url: parse_url("sales_url", &sales_url)?,
            http_timeout_secs: lookup("HTTP_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .or(file.http_timeout_secs)
                .unwrap_or(15),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.server_port)
    }
}

fn parse_url(field: &'static str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|source| ConfigError::InvalidUrl { field, source })
}
