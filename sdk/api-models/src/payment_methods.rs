use hyperswitch_masking::Secret;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::payment_options::PaymentMode;

/// Query payload for listing a buyer's stored payment methods. At least one
/// of `buyer_id` / `buyer_external_identifier` must be set; the server
/// rejects the request otherwise.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuyerPaymentMethodsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_external_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<OrderBy>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SortBy {
    LastUsedAt,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrderBy {
    Asc,
    Desc,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuyerPaymentMethods {
    pub items: Vec<BuyerPaymentMethod>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuyerPaymentMethod {
    /// Always `payment-method`.
    #[serde(rename = "type")]
    pub record_type: String,
    pub id: String,
    pub method: String,
    pub mode: Option<PaymentMode>,
    /// Display text, e.g. the card's last four digits.
    pub label: Option<String>,
    pub scheme: Option<String>,
    /// Card expiry in `MM/YY` form.
    pub expiration_date: Option<Secret<String>>,
    pub icon_url: Option<url::Url>,
    /// Pre-approval URL for redirect-mode methods.
    pub approval_url: Option<url::Url>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_used_at: Option<OffsetDateTime>,
}
