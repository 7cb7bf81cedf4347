use payorch_api_models::card_details::{CardDetails, CardDetailsRequest};

use crate::{
    error::{CustomResult, SdkError},
    http::ApiClient,
};

/// Card metadata lookups: scheme, card type and issuer-required fields for a
/// bin or stored payment method.
#[derive(Clone, Debug)]
pub struct CardDetailsService {
    client: ApiClient,
}

impl CardDetailsService {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, request: &CardDetailsRequest) -> CustomResult<CardDetails, SdkError> {
        self.client.get(&["card-details"], Some(request)).await
    }

    pub fn get_with_callback<F>(&self, request: CardDetailsRequest, callback: F)
    where
        F: FnOnce(CustomResult<CardDetails, SdkError>) + Send + 'static,
    {
        let service = self.clone();
        tokio::spawn(async move {
            callback(service.get(&request).await);
        });
    }
}
