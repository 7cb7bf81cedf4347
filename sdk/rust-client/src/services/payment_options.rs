use payorch_api_models::payment_options::{PaymentOptions, PaymentOptionsRequest};

use crate::{
    error::{CustomResult, SdkError},
    http::ApiClient,
};

/// Lists the payment options available for a prospective transaction.
#[derive(Clone, Debug)]
pub struct PaymentOptionsService {
    client: ApiClient,
}

impl PaymentOptionsService {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        request: &PaymentOptionsRequest,
    ) -> CustomResult<PaymentOptions, SdkError> {
        self.client.post(&["payment-options"], request).await
    }

    pub fn list_with_callback<F>(&self, request: PaymentOptionsRequest, callback: F)
    where
        F: FnOnce(CustomResult<PaymentOptions, SdkError>) + Send + 'static,
    {
        let service = self.clone();
        tokio::spawn(async move {
            callback(service.list(&request).await);
        });
    }
}
