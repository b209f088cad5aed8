use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Venda normalizada, no formato gravado em `vendas_hotmart.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub produto: String,
    pub valor: f64,
    pub comprador: String,
    /// Nome do evento do webhook (ex.: `PURCHASE_APPROVED`).
    pub status: Option<String>,
    /// `approved_date` como veio da Hotmart, sem validação.
    pub data: Option<Value>,
    /// Preenchido pelo log no momento da gravação.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recebido_em: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_with_log_field_names() {
        let record = SaleRecord {
            produto: "Course A".to_string(),
            valor: 199.9,
            comprador: "Jane".to_string(),
            status: Some("PURCHASE_APPROVED".to_string()),
            data: Some(json!("2024-01-01")),
            recebido_em: Some("2024-01-01T10:00:00.000000".to_string()),
        };

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "produto": "Course A",
                "valor": 199.9,
                "comprador": "Jane",
                "status": "PURCHASE_APPROVED",
                "data": "2024-01-01",
                "recebido_em": "2024-01-01T10:00:00.000000"
            })
        );
    }

    #[test]
    fn test_unstamped_record_omits_timestamp() {
        let record = SaleRecord {
            produto: "X".to_string(),
            valor: 0.0,
            comprador: "Cliente".to_string(),
            status: None,
            data: None,
            recebido_em: None,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("recebido_em").is_none());
        assert_eq!(value["status"], Value::Null);
        assert_eq!(value["data"], Value::Null);
    }
}
