use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Resposta do endpoint OAuth da Hotmart, guardada sem interpretação.
/// Só `access_token` é lido pelo serviço.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenBundle(pub Map<String, Value>);

impl TokenBundle {
    pub fn access_token(&self) -> Option<&str> {
        self.0
            .get("access_token")
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
    }
}

impl From<Map<String, Value>> for TokenBundle {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
