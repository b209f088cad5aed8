// Utilitários para manipulação de valores monetários

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PriceError {
    #[error("price is not a number: {0}")]
    NotNumeric(String),
    #[error("price has unsupported type {0}")]
    UnsupportedType(&'static str),
    #[error("price is not finite")]
    NotFinite,
}

/// Coerces the webhook's `price.value` into an `f64`.
///
/// Accepts JSON numbers, numeric strings (surrounding whitespace ignored) and
/// booleans. `null`, arrays, objects and NaN/infinity are rejected.
pub fn coerce_price(value: &Value) -> Result<f64, PriceError> {
    let parsed = match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| PriceError::NotNumeric(n.to_string()))?,
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| PriceError::NotNumeric(s.clone()))?,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Null => return Err(PriceError::UnsupportedType("null")),
        Value::Array(_) => return Err(PriceError::UnsupportedType("array")),
        Value::Object(_) => return Err(PriceError::UnsupportedType("object")),
    };

    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(PriceError::NotFinite)
    }
}

pub fn format_currency(valor: f64) -> String {
    format!("R$ {:.2}", valor)
}
