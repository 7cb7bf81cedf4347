//! End-to-end "tokenize, then optionally authenticate" orchestration.
//!
//! One sequential pass per call: tokenize, versioning lookup, device runtime
//! initialization, transaction creation, then either accept the frictionless
//! result or present the challenge. No retries, no loops; every call owns its
//! locals and reads one setup snapshot per request, so concurrent calls
//! against one client never interfere.

pub mod provider;
pub mod ui;

use std::sync::Arc;

use error_stack::report;
use payorch_api_models::{
    checkout_session::CardData,
    three_ds::{ThreeDsIndicator, ThreeDsTransactionRequest},
    ui_customization::UiCustomization,
};

use crate::{
    error::{CustomResult, SdkError, ThreeDsProviderError},
    three_ds::provider::{
        ChallengeOutcome, ChallengeRequest, DirectoryServerParams, ThreeDsProvider,
    },
    Payorch,
};

/// Terminal output of [`Payorch::tokenize`]. `tokenized` reflects only the
/// tokenize call: tokenization and authentication are deliberately decoupled
/// upstream, so a stored card with a failed authentication is a valid result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenizeResult {
    pub tokenized: bool,
    /// `None` when the caller did not ask for authentication.
    pub authentication: Option<AuthenticationOutcome>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthenticationOutcome {
    /// `false` means the versioning lookup failed, i.e. the card's directory
    /// server offers no 3DS. Every other field is unset in that case.
    pub attempted: bool,
    pub kind: Option<AuthenticationKind>,
    /// Final transaction status as reported by the server or the device
    /// runtime, e.g. `Y` or `N`.
    pub transaction_status: Option<String>,
    pub has_cancelled: bool,
    pub has_timed_out: bool,
    pub cardholder_info: Option<String>,
}

impl AuthenticationOutcome {
    fn not_attempted() -> Self {
        Self::default()
    }

    fn resolved(
        kind: AuthenticationKind,
        transaction_status: Option<String>,
        cardholder_info: Option<String>,
    ) -> Self {
        Self {
            attempted: true,
            kind: Some(kind),
            transaction_status,
            has_cancelled: false,
            has_timed_out: false,
            cardholder_info,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum AuthenticationKind {
    Frictionless,
    Challenge,
    Error,
}

impl Payorch {
    /// Tokenizes `card_data` into the checkout session and, when
    /// `authenticate` is set, runs the 3DS flow through `provider`.
    ///
    /// A tokenize failure aborts the call before any 3DS traffic. A
    /// versioning failure is the one recovered case: it means the card's
    /// scheme has no 3DS support, and the call succeeds with
    /// `authentication.attempted == false`. Failures in transaction creation
    /// or challenge presentation propagate, as does an indicator the SDK
    /// does not recognize.
    #[allow(clippy::too_many_arguments)]
    pub async fn tokenize<P>(
        &self,
        checkout_session_id: &str,
        card_data: &CardData,
        provider: &P,
        presentation_context: &P::PresentationContext,
        sdk_max_timeout_minutes: u8,
        authenticate: bool,
        ui_customization: Option<&UiCustomization>,
    ) -> CustomResult<TokenizeResult, SdkError>
    where
        P: ThreeDsProvider,
    {
        self.checkout_session()
            .tokenize(checkout_session_id, card_data)
            .await?;
        if !authenticate {
            return Ok(TokenizeResult {
                tokenized: true,
                authentication: None,
            });
        }

        let versioning = match self.three_ds().versioning(checkout_session_id).await {
            Ok(versioning) => versioning,
            Err(error) => {
                // Swallowed on purpose: a failed lookup means this card has
                // no 3DS support, not that authentication failed.
                tracing::debug!(
                    ?error,
                    "versioning lookup failed, reporting authentication as not attempted"
                );
                return Ok(TokenizeResult {
                    tokenized: true,
                    authentication: Some(AuthenticationOutcome::not_attempted()),
                });
            }
        };

        let device = provider
            .create_transaction(DirectoryServerParams {
                directory_server_id: &versioning.directory_server_id,
                message_version: &versioning.message_version,
                api_key: &versioning.api_key_for_directory_server,
            })
            .map_err(provider_error)?;
        for warning in &device.warnings {
            tracing::warn!(%warning, "device 3DS runtime warning");
        }

        let request = ThreeDsTransactionRequest {
            ephemeral_public_key: device.ephemeral_public_key,
            sdk_app_id: device.sdk_app_id,
            sdk_reference_number: device.sdk_reference_number,
            sdk_transaction_id: device.sdk_transaction_id,
            device_data: device.device_data,
            sdk_max_timeout: sdk_max_timeout_minutes,
        };
        let response = self
            .three_ds()
            .create_transaction(checkout_session_id, &request)
            .await?;

        let outcome = match response.indicator {
            ThreeDsIndicator::Finish => AuthenticationOutcome::resolved(
                AuthenticationKind::Frictionless,
                response.transaction_status,
                response.cardholder_info,
            ),
            ThreeDsIndicator::Challenge => {
                let parameters = response
                    .challenge
                    .ok_or_else(|| report!(SdkError::MissingChallengeParameters))?;
                let resolved = provider
                    .present_challenge(
                        presentation_context,
                        ChallengeRequest {
                            parameters: &parameters,
                            ui_customization: ui::map_ui_customization(ui_customization),
                            timeout_minutes: sdk_max_timeout_minutes,
                        },
                    )
                    .await
                    .map_err(provider_error)?;
                match resolved {
                    ChallengeOutcome::Completed {
                        transaction_status,
                        cardholder_info,
                    } => AuthenticationOutcome::resolved(
                        AuthenticationKind::Challenge,
                        transaction_status,
                        cardholder_info,
                    ),
                    ChallengeOutcome::Cancelled => AuthenticationOutcome {
                        attempted: true,
                        kind: Some(AuthenticationKind::Challenge),
                        has_cancelled: true,
                        ..Default::default()
                    },
                    ChallengeOutcome::TimedOut => AuthenticationOutcome {
                        attempted: true,
                        kind: Some(AuthenticationKind::Challenge),
                        has_timed_out: true,
                        ..Default::default()
                    },
                }
            }
            ThreeDsIndicator::Error => AuthenticationOutcome::resolved(
                AuthenticationKind::Error,
                response.transaction_status,
                response.cardholder_info,
            ),
            ThreeDsIndicator::Unknown(raw) => {
                return Err(report!(SdkError::UnexpectedIndicator(raw)));
            }
        };

        Ok(TokenizeResult {
            tokenized: true,
            authentication: Some(outcome),
        })
    }

    /// Completion-callback twin of [`Payorch::tokenize`] for hosts that
    /// cannot await. The provider and presentation context arrive as `Arc`s
    /// because the spawned task outlives the caller's frame.
    #[allow(clippy::too_many_arguments)]
    pub fn tokenize_with_callback<P, F>(
        &self,
        checkout_session_id: String,
        card_data: CardData,
        provider: Arc<P>,
        presentation_context: Arc<P::PresentationContext>,
        sdk_max_timeout_minutes: u8,
        authenticate: bool,
        ui_customization: Option<UiCustomization>,
        callback: F,
    ) where
        P: ThreeDsProvider + 'static,
        P::PresentationContext: 'static,
        F: FnOnce(CustomResult<TokenizeResult, SdkError>) + Send + 'static,
    {
        let client = self.clone();
        tokio::spawn(async move {
            let result = client
                .tokenize(
                    &checkout_session_id,
                    &card_data,
                    provider.as_ref(),
                    presentation_context.as_ref(),
                    sdk_max_timeout_minutes,
                    authenticate,
                    ui_customization.as_ref(),
                )
                .await;
            callback(result);
        });
    }
}

fn provider_error(
    report: error_stack::Report<ThreeDsProviderError>,
) -> error_stack::Report<SdkError> {
    let kind = *report.current_context();
    report.change_context(SdkError::ThreeDsProvider(kind))
}
