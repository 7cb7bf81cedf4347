use hyperswitch_masking::Secret;
use serde::{Deserialize, Serialize};

/// Result of the directory-server versioning lookup for a checkout session.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThreeDsVersioningResponse {
    pub directory_server_id: String,
    /// 3DS protocol version negotiated with the directory server, e.g. `2.2.0`.
    pub message_version: String,
    pub api_key_for_directory_server: Secret<String>,
}

/// Ephemeral device public key in JWK form, produced by the device 3DS
/// runtime during transaction setup.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EphemeralPublicKey {
    pub kty: String,
    pub crv: String,
    pub x: Secret<String>,
    pub y: Secret<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThreeDsTransactionRequest {
    pub ephemeral_public_key: EphemeralPublicKey,
    pub sdk_app_id: String,
    pub sdk_reference_number: String,
    pub sdk_transaction_id: String,
    /// Encrypted device data blob, opaque to the SDK.
    pub device_data: Secret<String>,
    /// Challenge window in minutes. The server parses this field
    /// positionally, so it goes on the wire zero-padded to two digits.
    #[serde(with = "two_digit_minutes")]
    pub sdk_max_timeout: u8,
}

/// Serde for the `sdk_max_timeout` wire form: `5` encodes as `"05"` and
/// `"05"` decodes back to `5`.
pub mod two_digit_minutes {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(minutes: &u8, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{:02}", minutes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u8, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<u8>().map_err(de::Error::custom)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThreeDsTransactionResponse {
    pub indicator: ThreeDsIndicator,
    /// Present iff `indicator` is `CHALLENGE`.
    pub challenge: Option<ChallengeParameters>,
    pub transaction_status: Option<String>,
    pub cardholder_info: Option<String>,
}

/// Server-side disposition of a 3DS transaction. `Unknown` preserves an
/// unrecognized wire value so it survives decoding; callers must reject it
/// rather than treat it as any known branch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ThreeDsIndicator {
    Finish,
    Challenge,
    Error,
    Unknown(String),
}

impl ThreeDsIndicator {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Finish => "FINISH",
            Self::Challenge => "CHALLENGE",
            Self::Error => "ERROR",
            Self::Unknown(raw) => raw,
        }
    }
}

impl std::fmt::Display for ThreeDsIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ThreeDsIndicator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ThreeDsIndicator {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "FINISH" => Self::Finish,
            "CHALLENGE" => Self::Challenge,
            "ERROR" => Self::Error,
            _ => Self::Unknown(raw),
        })
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChallengeParameters {
    pub server_transaction_id: String,
    pub acs_transaction_id: String,
    pub acs_reference_number: String,
    /// Signed JWS from the access control server, consumed verbatim by the
    /// device 3DS runtime.
    pub acs_signed_content: Secret<String>,
}
