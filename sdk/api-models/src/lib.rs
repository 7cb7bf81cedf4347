//! Wire models for the Payorch API.
//!
//! One module per API resource. Rust field names match the snake_case wire
//! keys directly, with `#[serde(rename)]` only where the wire key is not a
//! usable Rust identifier. Values that must never reach logs (card numbers,
//! security codes, directory-server credentials, device blobs) are wrapped
//! in [`hyperswitch_masking::Secret`].

pub use hyperswitch_masking as masking;

pub mod card_details;
pub mod checkout_session;
pub mod payment_methods;
pub mod payment_options;
pub mod three_ds;
pub mod ui_customization;
