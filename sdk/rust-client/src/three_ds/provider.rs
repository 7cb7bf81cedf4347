use std::collections::HashMap;

use async_trait::async_trait;
use hyperswitch_masking::Secret;
use payorch_api_models::three_ds::{ChallengeParameters, EphemeralPublicKey};

use crate::{
    error::{CustomResult, ThreeDsProviderError},
    three_ds::ui::ProviderUiCustomization,
};

/// Bridge to the device 3DS runtime the host application bundles. The SDK
/// drives the network half of the protocol; everything cryptographic or
/// user-facing goes through this trait.
#[async_trait]
pub trait ThreeDsProvider: Send + Sync {
    /// Host surface challenges are presented on: a view-controller handle
    /// behind an FFI shim, `()` on a headless host.
    type PresentationContext: Send + Sync;

    /// Initializes the runtime against the directory server and returns the
    /// device's half of the transaction material.
    fn create_transaction(
        &self,
        params: DirectoryServerParams<'_>,
    ) -> CustomResult<DeviceAuthenticationPayload, ThreeDsProviderError>;

    /// Presents the challenge UI and suspends until the user completes or
    /// cancels it, or the runtime reports a timeout. Cancellation and
    /// timeout are outcomes, not errors.
    async fn present_challenge(
        &self,
        context: &Self::PresentationContext,
        request: ChallengeRequest<'_>,
    ) -> CustomResult<ChallengeOutcome, ThreeDsProviderError>;
}

/// Directory-server coordinates from the versioning lookup.
#[derive(Clone, Copy, Debug)]
pub struct DirectoryServerParams<'a> {
    pub directory_server_id: &'a str,
    pub message_version: &'a str,
    pub api_key: &'a Secret<String>,
}

/// Device-side transaction material produced by the runtime.
#[derive(Clone, Debug)]
pub struct DeviceAuthenticationPayload {
    pub sdk_app_id: String,
    pub sdk_reference_number: String,
    pub sdk_transaction_id: String,
    pub ephemeral_public_key: EphemeralPublicKey,
    /// Encrypted device data blob, opaque to the SDK.
    pub device_data: Secret<String>,
    /// Runtime warnings (rooted device, tampered SDK, ...). Logged, never
    /// fatal.
    pub warnings: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct ChallengeRequest<'a> {
    pub parameters: &'a ChallengeParameters,
    /// Challenge-screen styling keyed by appearance, absent when the caller
    /// supplied none.
    pub ui_customization: Option<HashMap<String, ProviderUiCustomization>>,
    /// Challenge window in minutes.
    pub timeout_minutes: u8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChallengeOutcome {
    Completed {
        transaction_status: Option<String>,
        cardholder_info: Option<String>,
    },
    Cancelled,
    TimedOut,
}
