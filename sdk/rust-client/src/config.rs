use std::time::Duration;

use error_stack::ResultExt;
use hyperswitch_masking::Secret;
use serde::Deserialize;

use crate::error::{CustomResult, SdkError};

/// Connection settings for one Payorch instance. Treated as an immutable
/// snapshot: [`crate::Payorch::update_setup`] replaces the whole value, never
/// individual fields, so concurrent calls each see a consistent setup.
#[derive(Clone, Debug, Deserialize)]
pub struct Setup {
    /// Payorch instance identifier, the `acme` of `api.acme.payorch.app`.
    pub instance_id: String,
    pub auth_token: Secret<String>,
    /// Sent as the `x-payorch-merchant-id` header when present.
    #[serde(default)]
    pub merchant_id: Option<String>,
    pub environment: Environment,
    /// Explicit API base URL. Overrides the host derived from
    /// `instance_id`/`environment`; meant for self-hosted deployments and
    /// tests against a local server.
    #[serde(default)]
    pub api_url: Option<url::Url>,
    /// Per-request timeout. `None` leaves the transport default in place.
    #[serde(
        default,
        rename = "timeout_in_seconds",
        deserialize_with = "deserialize_timeout"
    )]
    pub timeout: Option<Duration>,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, strum::Display, strum::EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Environment {
    Sandbox,
    Production,
}

impl Setup {
    pub fn new(
        instance_id: impl Into<String>,
        auth_token: impl Into<String>,
        environment: Environment,
    ) -> Self {
        Self {
            instance_id: instance_id.into(),
            auth_token: Secret::new(auth_token.into()),
            merchant_id: None,
            environment,
            api_url: None,
            timeout: None,
        }
    }

    /// Builds the setup from `PAYORCH__*` environment variables
    /// (`PAYORCH__INSTANCE_ID`, `PAYORCH__AUTH_TOKEN`, `PAYORCH__ENVIRONMENT`,
    /// optionally `PAYORCH__MERCHANT_ID` and `PAYORCH__TIMEOUT_IN_SECONDS`).
    pub fn from_env() -> CustomResult<Self, SdkError> {
        let loader = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("PAYORCH")
                    .try_parsing(true)
                    .separator("__"),
            )
            .build()
            .change_context(SdkError::Configuration)?;

        let setup: Self = serde_path_to_error::deserialize(loader)
            .change_context(SdkError::Configuration)
            .attach_printable("failed to deserialize setup from environment variables")?;
        Ok(setup)
    }

    pub fn api_host(&self) -> String {
        match self.environment {
            Environment::Production => format!("api.{}.payorch.app", self.instance_id),
            Environment::Sandbox => format!("api.sandbox.{}.payorch.app", self.instance_id),
        }
    }

    pub fn api_base_url(&self) -> String {
        match &self.api_url {
            Some(url) => url.as_str().trim_end_matches('/').to_string(),
            None => format!("https://{}", self.api_host()),
        }
    }
}

fn deserialize_timeout<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<u64>::deserialize(deserializer).map(|seconds| seconds.map(Duration::from_secs))
}
