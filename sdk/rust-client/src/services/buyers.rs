use payorch_api_models::payment_methods::{BuyerPaymentMethods, BuyerPaymentMethodsRequest};

use crate::{
    error::{CustomResult, SdkError},
    http::ApiClient,
};

/// Buyer-scoped reads, currently the stored payment methods listing.
#[derive(Clone, Debug)]
pub struct BuyersService {
    client: ApiClient,
}

impl BuyersService {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn payment_methods(
        &self,
        request: &BuyerPaymentMethodsRequest,
    ) -> CustomResult<BuyerPaymentMethods, SdkError> {
        self.client
            .get(&["buyers", "payment-methods"], Some(request))
            .await
    }

    pub fn payment_methods_with_callback<F>(&self, request: BuyerPaymentMethodsRequest, callback: F)
    where
        F: FnOnce(CustomResult<BuyerPaymentMethods, SdkError>) + Send + 'static,
    {
        let service = self.clone();
        tokio::spawn(async move {
            callback(service.payment_methods(&request).await);
        });
    }
}
