//! Per-resource services over the shared HTTP client.
//!
//! Every operation comes in two calling conventions with identical
//! semantics: an `async fn`, and a `*_with_callback` twin that runs the same
//! future on the ambient tokio runtime and hands the result to a completion
//! callback. The callback form exists for hosts that cannot await (FFI
//! bridges, callback-based UI layers).

pub mod buyers;
pub mod card_details;
pub mod checkout_session;
pub mod payment_options;
pub mod three_ds;

pub use self::buyers::BuyersService;
pub use self::card_details::CardDetailsService;
pub use self::checkout_session::CheckoutSessionService;
pub use self::payment_options::PaymentOptionsService;
pub use self::three_ds::ThreeDsService;
