use payorch_api_models::three_ds::{
    ThreeDsTransactionRequest, ThreeDsTransactionResponse, ThreeDsVersioningResponse,
};

use crate::{
    error::{CustomResult, SdkError},
    http::ApiClient,
};

/// The two 3DS endpoints scoped to a checkout session: the directory-server
/// versioning lookup and transaction creation.
#[derive(Clone, Debug)]
pub struct ThreeDsService {
    client: ApiClient,
}

impl ThreeDsService {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn versioning(
        &self,
        checkout_session_id: &str,
    ) -> CustomResult<ThreeDsVersioningResponse, SdkError> {
        self.client
            .get(
                &[
                    "checkout",
                    "sessions",
                    checkout_session_id,
                    "three-d-secure",
                    "versioning",
                ],
                None::<&()>,
            )
            .await
    }

    pub fn versioning_with_callback<F>(&self, checkout_session_id: String, callback: F)
    where
        F: FnOnce(CustomResult<ThreeDsVersioningResponse, SdkError>) + Send + 'static,
    {
        let service = self.clone();
        tokio::spawn(async move {
            callback(service.versioning(&checkout_session_id).await);
        });
    }

    pub async fn create_transaction(
        &self,
        checkout_session_id: &str,
        request: &ThreeDsTransactionRequest,
    ) -> CustomResult<ThreeDsTransactionResponse, SdkError> {
        self.client
            .post(
                &[
                    "checkout",
                    "sessions",
                    checkout_session_id,
                    "three-d-secure",
                    "transactions",
                ],
                request,
            )
            .await
    }

    pub fn create_transaction_with_callback<F>(
        &self,
        checkout_session_id: String,
        request: ThreeDsTransactionRequest,
        callback: F,
    ) where
        F: FnOnce(CustomResult<ThreeDsTransactionResponse, SdkError>) + Send + 'static,
    {
        let service = self.clone();
        tokio::spawn(async move {
            callback(
                service
                    .create_transaction(&checkout_session_id, &request)
                    .await,
            );
        });
    }
}
