use hyperswitch_masking::Secret;
use serde::{Deserialize, Serialize};

/// Payment data accepted by the checkout-session tokenize endpoint. Exactly
/// one variant is populated; the wire object carries a `method` discriminator
/// on encode, but decoding keys off field presence (`number`, then
/// `merchant_transaction_id`, then `id`) so payloads from older servers that
/// omit the tag still decode.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum CardData {
    Card(CardNumberData),
    ClickToPay(ClickToPayData),
    #[serde(rename = "id")]
    StoredMethodId(StoredMethodIdData),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardNumberData {
    /// Full primary account number.
    pub number: Secret<String>,
    /// Card expiry in `MM/YY` form.
    pub expiration_date: Secret<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_code: Option<Secret<String>>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClickToPayData {
    pub merchant_transaction_id: Secret<String>,
    pub src_correlation_id: Secret<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredMethodIdData {
    /// Identifier of a previously stored payment method.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_code: Option<Secret<String>>,
}

impl<'de> Deserialize<'de> for CardData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let object = serde_json::Map::deserialize(deserializer)?;
        // Fixed decode priority: a full card number outranks a Click to Pay
        // correlation, which outranks a stored-method id.
        if object.contains_key("number") {
            serde_json::from_value(serde_json::Value::Object(object))
                .map(Self::Card)
                .map_err(serde::de::Error::custom)
        } else if object.contains_key("merchant_transaction_id") {
            serde_json::from_value(serde_json::Value::Object(object))
                .map(Self::ClickToPay)
                .map_err(serde::de::Error::custom)
        } else if object.contains_key("id") {
            serde_json::from_value(serde_json::Value::Object(object))
                .map(Self::StoredMethodId)
                .map_err(serde::de::Error::custom)
        } else {
            Err(serde::de::Error::custom(
                "payment method matches none of number, merchant_transaction_id or id",
            ))
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenizeRequest {
    pub payment_method: CardData,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn card() -> CardData {
        CardData::Card(CardNumberData {
            number: Secret::new("4111111111111111".to_string()),
            expiration_date: Secret::new("12/29".to_string()),
            security_code: Some(Secret::new("737".to_string())),
        })
    }

    #[test]
    fn card_serializes_with_method_tag() {
        let encoded = serde_json::to_value(card()).unwrap();
        assert_eq!(
            encoded,
            serde_json::json!({
                "method": "card",
                "number": "4111111111111111",
                "expiration_date": "12/29",
                "security_code": "737",
            })
        );
    }

    #[test]
    fn stored_method_serializes_with_id_tag() {
        let encoded = serde_json::to_value(CardData::StoredMethodId(StoredMethodIdData {
            id: "pm_9".to_string(),
            security_code: None,
        }))
        .unwrap();
        assert_eq!(encoded, serde_json::json!({ "method": "id", "id": "pm_9" }));
    }

    #[test]
    fn every_variant_round_trips() {
        let variants = vec![
            card(),
            CardData::ClickToPay(ClickToPayData {
                merchant_transaction_id: Secret::new("mtid_1".to_string()),
                src_correlation_id: Secret::new("corr_1".to_string()),
            }),
            CardData::StoredMethodId(StoredMethodIdData {
                id: "pm_9".to_string(),
                security_code: Some(Secret::new("000".to_string())),
            }),
        ];
        for payment_method in variants {
            let encoded = serde_json::to_value(&payment_method).unwrap();
            let decoded: CardData = serde_json::from_value(encoded).unwrap();
            assert_eq!(decoded, payment_method);
        }
    }

    #[test]
    fn number_outranks_stored_method_id_on_decode() {
        let raw = serde_json::json!({
            "number": "4111111111111111",
            "expiration_date": "12/29",
            "id": "pm_9",
        });
        let decoded: CardData = serde_json::from_value(raw).unwrap();
        assert!(matches!(decoded, CardData::Card(_)));
    }

    #[test]
    fn merchant_transaction_id_outranks_stored_method_id_on_decode() {
        let raw = serde_json::json!({
            "merchant_transaction_id": "mtid_1",
            "src_correlation_id": "corr_1",
            "id": "pm_9",
        });
        let decoded: CardData = serde_json::from_value(raw).unwrap();
        assert!(matches!(decoded, CardData::ClickToPay(_)));
    }

    #[test]
    fn unrecognized_payment_method_is_rejected() {
        let raw = serde_json::json!({ "method": "card" });
        assert!(serde_json::from_value::<CardData>(raw).is_err());
    }

    #[test]
    fn debug_output_masks_card_fields() {
        let rendered = format!("{:?}", card());
        assert!(!rendered.contains("4111111111111111"));
        assert!(!rendered.contains("737"));
    }
}
