use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentOptionsRequest {
    /// Arbitrary merchant metadata echoed into gateway rules.
    pub metadata: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Amount in the smallest currency unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_items: Option<Vec<CartItem>>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    pub name: String,
    pub quantity: i64,
    /// Per-unit price in the smallest currency unit.
    pub unit_amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_url: Option<url::Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<url::Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentOptions {
    pub items: Vec<PaymentOption>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentOption {
    /// Always `payment-option`.
    #[serde(rename = "type")]
    pub record_type: String,
    /// Payment method identifier, e.g. `card` or `paypal`.
    pub method: String,
    pub mode: PaymentMode,
    pub can_store_payment_method: bool,
    pub can_delay_capture: bool,
    /// Display name resolved for the requested locale.
    pub label: Option<String>,
    pub icon_url: Option<url::Url>,
    pub context: Option<PaymentOptionContext>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PaymentMode {
    Card,
    Redirect,
    Applepay,
    Googlepay,
    #[serde(other)]
    Unknown,
}

/// Mode-specific option details. The wire object carries no discriminator;
/// the variant is picked from which fields are present, in a fixed priority:
/// `redirect_requires_popup`, then `gateway`, then `supported_schemes`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum PaymentOptionContext {
    Redirect(RedirectContext),
    Card(CardContext),
    Wallet(WalletContext),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RedirectContext {
    /// Whether the approval URL must open in a popup rather than a redirect.
    pub redirect_requires_popup: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_buyer_id: Option<bool>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardContext {
    pub gateway: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_security_code: Option<bool>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,
    pub supported_schemes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
}

impl<'de> Deserialize<'de> for PaymentOptionContext {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let object = serde_json::Map::deserialize(deserializer)?;
        // Fixed decode priority: a popup flag marks a redirect context even
        // when a gateway is also present, and a gateway marks a card context
        // even when wallet fields are also present.
        if object.contains_key("redirect_requires_popup") {
            serde_json::from_value(serde_json::Value::Object(object))
                .map(Self::Redirect)
                .map_err(serde::de::Error::custom)
        } else if object.contains_key("gateway") {
            serde_json::from_value(serde_json::Value::Object(object))
                .map(Self::Card)
                .map_err(serde::de::Error::custom)
        } else if object.contains_key("supported_schemes") {
            serde_json::from_value(serde_json::Value::Object(object))
                .map(Self::Wallet)
                .map_err(serde::de::Error::custom)
        } else {
            Err(serde::de::Error::custom(
                "payment option context matches none of redirect_requires_popup, gateway or supported_schemes",
            ))
        }
    }
}
