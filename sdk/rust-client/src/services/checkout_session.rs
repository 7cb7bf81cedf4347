use payorch_api_models::checkout_session::{CardData, TokenizeRequest};

use crate::{
    error::{CustomResult, SdkError},
    http::ApiClient,
};

/// Writes payment data into a checkout session, vaulting it server-side.
#[derive(Clone, Debug)]
pub struct CheckoutSessionService {
    client: ApiClient,
}

impl CheckoutSessionService {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn tokenize(
        &self,
        checkout_session_id: &str,
        payment_method: &CardData,
    ) -> CustomResult<(), SdkError> {
        let body = TokenizeRequest {
            payment_method: payment_method.clone(),
        };
        self.client
            .put_no_content(
                &["checkout", "sessions", checkout_session_id, "fields"],
                &body,
            )
            .await
    }

    pub fn tokenize_with_callback<F>(
        &self,
        checkout_session_id: String,
        payment_method: CardData,
        callback: F,
    ) where
        F: FnOnce(CustomResult<(), SdkError>) + Send + 'static,
    {
        let service = self.clone();
        tokio::spawn(async move {
            callback(
                service
                    .tokenize(&checkout_session_id, &payment_method)
                    .await,
            );
        });
    }
}
