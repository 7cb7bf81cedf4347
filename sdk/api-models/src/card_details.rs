use hyperswitch_masking::Secret;
use serde::{Deserialize, Serialize};

/// Query payload for the card-details lookup. Sent as a query string on a
/// GET request, so every field must flatten to scalar values.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDetailsRequest {
    /// Three-letter ISO 4217 currency the card would be charged in.
    pub currency: String,
    /// Amount in the smallest currency unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Leading six to eight digits of the card number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin: Option<Secret<String>>,
    /// Two-letter ISO 3166 country the transaction originates from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
    /// Stored payment method to resolve details for, instead of a bin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_source: Option<PaymentSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_subsequent_payment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_initiated: Option<bool>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentSource {
    Ecommerce,
    Moto,
    Recurring,
    Installment,
    CardOnFile,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDetails {
    /// Always `card-details`.
    #[serde(rename = "type")]
    pub record_type: String,
    /// The bin the details were resolved from, when one was supplied.
    pub id: Option<String>,
    pub card_type: Option<CardType>,
    /// Lowercase scheme identifier, e.g. `visa`.
    pub scheme: Option<String>,
    pub scheme_icon_url: Option<url::Url>,
    /// Issuing country, when the bin range discloses it.
    pub country: Option<String>,
    pub required_fields: Option<RequiredFields>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    Credit,
    Debit,
    Prepaid,
    #[serde(other)]
    Unknown,
}

/// Buyer fields the issuer requires before this card can be tokenized.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequiredFields {
    pub first_name: Option<bool>,
    pub last_name: Option<bool>,
    pub email_address: Option<bool>,
    pub address: Option<RequiredAddressFields>,
    pub tax_id: Option<bool>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequiredAddressFields {
    pub house_number_or_name: Option<bool>,
    pub line1: Option<bool>,
    pub city: Option<bool>,
    pub state: Option<bool>,
    pub postal_code: Option<bool>,
    pub country: Option<bool>,
}
