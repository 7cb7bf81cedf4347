//! Client SDK for the Payorch payment-orchestration API.
//!
//! A [`Payorch`] instance wraps one HTTP client and one replaceable
//! [`Setup`] snapshot. Per-resource services hang off it; the 3DS flow is
//! driven through [`Payorch::tokenize`] with a host-supplied
//! [`three_ds::provider::ThreeDsProvider`].
//!
//! ```no_run
//! use std::collections::HashMap;
//!
//! use payorch_sdk::{
//!     api_models::payment_options::PaymentOptionsRequest,
//!     CustomResult, Environment, Payorch, SdkError, Setup,
//! };
//!
//! # async fn list_options() -> CustomResult<(), SdkError> {
//! let client = Payorch::new(Setup::new("acme", "secret-token", Environment::Sandbox))?;
//! let options = client
//!     .payment_options()
//!     .list(&PaymentOptionsRequest {
//!         metadata: HashMap::new(),
//!         country: Some("US".to_string()),
//!         currency: Some("USD".to_string()),
//!         amount: Some(1299),
//!         locale: Some("en-US".to_string()),
//!         cart_items: None,
//!     })
//!     .await?;
//! # let _ = options;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
mod http;
pub mod services;
pub mod three_ds;

use std::sync::Arc;

pub use payorch_api_models as api_models;

pub use crate::{
    config::{Environment, Setup},
    error::{CustomResult, HttpErrorDetails, SdkError, ThreeDsProviderError},
    three_ds::{AuthenticationKind, AuthenticationOutcome, TokenizeResult},
};
use crate::{
    http::ApiClient,
    services::{
        BuyersService, CardDetailsService, CheckoutSessionService, PaymentOptionsService,
        ThreeDsService,
    },
};

/// Entry point for the SDK. Cheap to clone; all clones share the HTTP
/// connection pool and observe setup replacements. Any number of calls may
/// run concurrently against one instance.
#[derive(Clone, Debug)]
pub struct Payorch {
    client: ApiClient,
}

impl Payorch {
    pub fn new(setup: Setup) -> CustomResult<Self, SdkError> {
        Ok(Self {
            client: ApiClient::new(setup)?,
        })
    }

    /// Shorthand for [`Payorch::new`] over [`Setup::from_env`].
    pub fn from_env() -> CustomResult<Self, SdkError> {
        Self::new(Setup::from_env()?)
    }

    pub fn card_details(&self) -> CardDetailsService {
        CardDetailsService::new(self.client.clone())
    }

    pub fn payment_options(&self) -> PaymentOptionsService {
        PaymentOptionsService::new(self.client.clone())
    }

    pub fn buyers(&self) -> BuyersService {
        BuyersService::new(self.client.clone())
    }

    pub fn checkout_session(&self) -> CheckoutSessionService {
        CheckoutSessionService::new(self.client.clone())
    }

    pub fn three_ds(&self) -> ThreeDsService {
        ThreeDsService::new(self.client.clone())
    }

    /// The setup calls are currently using.
    pub fn setup(&self) -> Arc<Setup> {
        self.client.setup_snapshot()
    }

    /// Replaces the setup wholesale. Calls entered after this observe the
    /// new setup; in-flight calls finish on the snapshot they captured.
    pub fn update_setup(&self, setup: Setup) {
        self.client.replace_setup(setup);
    }
}
