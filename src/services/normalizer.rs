use crate::models::SaleRecord;
use crate::utils::money::{coerce_price, PriceError};
use serde_json::{Map, Value};
use thiserror::Error;

pub const DEFAULT_PRODUCT: &str = "Produto desconhecido";
pub const DEFAULT_BUYER: &str = "Cliente";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizeError {
    #[error("expected `{field}` to be an object, found {found}")]
    NotAnObject { field: &'static str, found: &'static str },
    #[error("expected `{field}` to be a string, found {found}")]
    NotAString { field: &'static str, found: &'static str },
    #[error("invalid `data.purchase.price.value`: {0}")]
    Price(#[from] PriceError),
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Absent keys read as an empty object; present keys must hold an object.
fn nested<'a>(
    parent: &'a Map<String, Value>,
    key: &str,
    field: &'static str,
) -> Result<Option<&'a Map<String, Value>>, NormalizeError> {
    match parent.get(key) {
        None => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(other) => Err(NormalizeError::NotAnObject {
            field,
            found: type_name(other),
        }),
    }
}

fn optional_string(
    parent: Option<&Map<String, Value>>,
    key: &str,
    field: &'static str,
) -> Result<Option<String>, NormalizeError> {
    match parent.and_then(|map| map.get(key)) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(NormalizeError::NotAString {
            field,
            found: type_name(other),
        }),
    }
}

/// Maps the raw webhook payload into a [`SaleRecord`].
///
/// Nothing partial is ever returned: either every field is extracted or the
/// whole payload is rejected. The returned record has no `recebido_em`; the
/// sale log stamps it on append.
pub fn normalize_sale(payload: &Value) -> Result<SaleRecord, NormalizeError> {
    let root = match payload {
        Value::Object(map) => map,
        other => {
            return Err(NormalizeError::NotAnObject {
                field: "payload",
                found: type_name(other),
            })
        }
    };

    let data = nested(root, "data", "data")?;
    let product = match data {
        Some(d) => nested(d, "product", "data.product")?,
        None => None,
    };
    let buyer = match data {
        Some(d) => nested(d, "buyer", "data.buyer")?,
        None => None,
    };
    let purchase = match data {
        Some(d) => nested(d, "purchase", "data.purchase")?,
        None => None,
    };
    let price = match purchase {
        Some(p) => nested(p, "price", "data.purchase.price")?,
        None => None,
    };

    let produto = optional_string(product, "name", "data.product.name")?
        .unwrap_or_else(|| DEFAULT_PRODUCT.to_string());
    let comprador = optional_string(buyer, "name", "data.buyer.name")?
        .unwrap_or_else(|| DEFAULT_BUYER.to_string());
    let valor = match price.and_then(|p| p.get("value")) {
        Some(raw) => coerce_price(raw)?,
        None => 0.0,
    };
    let data_compra = purchase
        .and_then(|p| p.get("approved_date"))
        .filter(|v| !v.is_null())
        .cloned();
    let status = optional_string(Some(root), "event", "event")?;

    Ok(SaleRecord {
        produto,
        valor,
        comprador,
        status,
        data: data_compra,
        recebido_em: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_full_payload() {
        let payload = json!({
            "event": "PURCHASE_APPROVED",
            "data": {
                "product": {"name": "Course A"},
                "buyer": {"name": "Jane"},
                "purchase": {
                    "price": {"value": "199.90"},
                    "approved_date": "2024-01-01"
                }
            }
        });

        let record = normalize_sale(&payload).unwrap();

        assert_eq!(record.produto, "Course A");
        assert_eq!(record.valor, 199.9);
        assert_eq!(record.comprador, "Jane");
        assert_eq!(record.status.as_deref(), Some("PURCHASE_APPROVED"));
        assert_eq!(record.data, Some(json!("2024-01-01")));
        assert!(record.recebido_em.is_none());
    }

    #[test]
    fn test_empty_payload_uses_defaults() {
        let record = normalize_sale(&json!({})).unwrap();

        assert_eq!(record.produto, DEFAULT_PRODUCT);
        assert_eq!(record.comprador, DEFAULT_BUYER);
        assert_eq!(record.valor, 0.0);
        assert!(record.status.is_none());
        assert!(record.data.is_none());
    }

    #[test]
    fn test_missing_names_default_independently() {
        let payload = json!({
            "data": {
                "product": {},
                "buyer": {"email": "jane@example.com"},
                "purchase": {"price": {"value": 10}}
            }
        });

        let record = normalize_sale(&payload).unwrap();

        assert_eq!(record.produto, DEFAULT_PRODUCT);
        assert_eq!(record.comprador, DEFAULT_BUYER);
        assert_eq!(record.valor, 10.0);
    }

    #[test]
    fn test_numeric_approved_date_passes_through() {
        let payload = json!({
            "data": {"purchase": {"approved_date": 1511783346000u64}}
        });

        let record = normalize_sale(&payload).unwrap();
        assert_eq!(record.data, Some(json!(1511783346000u64)));
    }

    #[test]
    fn test_non_object_root_fails() {
        assert_eq!(
            normalize_sale(&json!([1, 2])),
            Err(NormalizeError::NotAnObject {
                field: "payload",
                found: "array"
            })
        );
        assert!(normalize_sale(&Value::Null).is_err());
    }

    #[test]
    fn test_non_object_nesting_fails() {
        let payload = json!({"data": {"product": "Course A"}});
        assert_eq!(
            normalize_sale(&payload),
            Err(NormalizeError::NotAnObject {
                field: "data.product",
                found: "string"
            })
        );

        let payload = json!({"data": {"purchase": {"price": null}}});
        assert!(matches!(
            normalize_sale(&payload),
            Err(NormalizeError::NotAnObject { field: "data.purchase.price", .. })
        ));

        assert!(normalize_sale(&json!({"data": null})).is_err());
    }

    #[test]
    fn test_uncoercible_price_fails() {
        let payload = json!({"data": {"purchase": {"price": {"value": "grátis"}}}});
        assert!(matches!(
            normalize_sale(&payload),
            Err(NormalizeError::Price(PriceError::NotNumeric(_)))
        ));

        let payload = json!({"data": {"purchase": {"price": {"value": null}}}});
        assert!(matches!(
            normalize_sale(&payload),
            Err(NormalizeError::Price(_))
        ));
    }

    #[test]
    fn test_non_string_name_fails() {
        let payload = json!({"data": {"buyer": {"name": 7}}});
        assert_eq!(
            normalize_sale(&payload),
            Err(NormalizeError::NotAString {
                field: "data.buyer.name",
                found: "number"
            })
        );
    }

    #[test]
    fn test_null_name_defaults() {
        let payload = json!({"data": {"product": {"name": null}}});
        assert_eq!(normalize_sale(&payload).unwrap().produto, DEFAULT_PRODUCT);
    }

    proptest! {
        #[test]
        fn prop_valor_is_coerced_price(cents in 0u64..100_000_000) {
            let price = cents as f64 / 100.0;
            let payload = json!({
                "data": {"purchase": {"price": {"value": price.to_string()}}}
            });
            let record = normalize_sale(&payload).unwrap();
            prop_assert_eq!(record.valor, price);
        }

        #[test]
        fn prop_names_are_kept(produto in "\\PC{1,40}", comprador in "\\PC{1,40}") {
            let payload = json!({
                "data": {"product": {"name": produto.clone()}, "buyer": {"name": comprador.clone()}}
            });
            let record = normalize_sale(&payload).unwrap();
            prop_assert_eq!(record.produto, produto);
            prop_assert_eq!(record.comprador, comprador);
        }
    }
}
