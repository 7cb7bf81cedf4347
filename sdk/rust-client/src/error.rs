use std::fmt;

pub type CustomResult<T, E> = error_stack::Result<T, E>;

/// Everything a Payorch call can fail with. Transport failures and non-2xx
/// responses are distinct variants so callers can tell "the request never
/// completed" apart from "the server refused it".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SdkError {
    #[error("Failed to send request to the server {0}")]
    RequestNotSent(String),
    #[error("Request timed out before the server responded")]
    RequestTimeout,
    #[error("Server responded with an error: {0}")]
    Http(HttpErrorDetails),
    #[error("Failed to decode response")]
    ResponseDecoding,
    #[error("Request body serialization failed")]
    BodySerialization,
    #[error("Failed to construct url for the request")]
    UrlConstruction,
    #[error("Header map construction failed")]
    HeaderConstruction,
    #[error("Client construction failed")]
    ClientConstruction,
    #[error("Failed to load setup from the environment")]
    Configuration,
    #[error("Server responded with an unrecognized 3DS indicator {0}")]
    UnexpectedIndicator(String),
    #[error("Challenge response carried no challenge parameters")]
    MissingChallengeParameters,
    #[error("3DS provider error: {0}")]
    ThreeDsProvider(ThreeDsProviderError),
}

/// A non-2xx response, with a best-effort message pulled out of the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpErrorDetails {
    pub status_code: u16,
    /// Extracted from a JSON `error` field, then a JSON `message` field,
    /// falling back to the raw body text.
    pub message: Option<String>,
    pub raw_body: Option<String>,
}

impl HttpErrorDetails {
    pub(crate) fn from_body(status_code: u16, body: Option<bytes::Bytes>) -> Self {
        let raw_body = body
            .and_then(|bytes| String::from_utf8(bytes.to_vec()).ok())
            .filter(|raw| !raw.is_empty());
        let message = raw_body
            .as_deref()
            .and_then(extract_message)
            .or_else(|| raw_body.clone());
        Self {
            status_code,
            message,
            raw_body,
        }
    }
}

impl fmt::Display for HttpErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "status {}: {}", self.status_code, message),
            None => write!(f, "status {}", self.status_code),
        }
    }
}

fn extract_message(raw: &str) -> Option<String> {
    let body: serde_json::Value = serde_json::from_str(raw).ok()?;
    body.get("error")
        .and_then(serde_json::Value::as_str)
        .or_else(|| body.get("message").and_then(serde_json::Value::as_str))
        .map(str::to_string)
}

/// Failures reported by the host's device 3DS runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ThreeDsProviderError {
    #[error("Failed to initialize the device 3DS runtime")]
    InitializationFailed,
    #[error("Failed to present the 3DS challenge")]
    ChallengePresentation,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn message_prefers_json_error_field() {
        let body = bytes::Bytes::from(r#"{"error":"card declined","message":"nope"}"#);
        let details = HttpErrorDetails::from_body(402, Some(body));
        assert_eq!(details.message.as_deref(), Some("card declined"));
    }

    #[test]
    fn message_falls_back_to_json_message_field() {
        let body = bytes::Bytes::from(r#"{"message":"session expired"}"#);
        let details = HttpErrorDetails::from_body(410, Some(body));
        assert_eq!(details.message.as_deref(), Some("session expired"));
    }

    #[test]
    fn message_falls_back_to_raw_text() {
        let body = bytes::Bytes::from("upstream exploded");
        let details = HttpErrorDetails::from_body(502, Some(body));
        assert_eq!(details.message.as_deref(), Some("upstream exploded"));
        assert_eq!(details.raw_body.as_deref(), Some("upstream exploded"));
    }

    #[test]
    fn empty_body_yields_no_message() {
        let details = HttpErrorDetails::from_body(500, Some(bytes::Bytes::new()));
        assert_eq!(details.message, None);
        assert_eq!(details.raw_body, None);
        assert_eq!(details.to_string(), "status 500");
    }
}
