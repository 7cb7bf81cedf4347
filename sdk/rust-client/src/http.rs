use std::{
    str::FromStr,
    sync::{Arc, RwLock},
};

use error_stack::{report, ResultExt};
use hyperswitch_masking::ExposeInterface;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::{field::Empty, Instrument};
use url::Url;

use crate::{
    config::Setup,
    error::{CustomResult, HttpErrorDetails, SdkError},
};

pub(crate) mod headers {
    pub(crate) const AUTHORIZATION: &str = "Authorization";
    pub(crate) const CONTENT_TYPE: &str = "Content-Type";
    pub(crate) const USER_AGENT: &str = "User-Agent";
    pub(crate) const X_PAYORCH_MERCHANT_ID: &str = "x-payorch-merchant-id";
    pub(crate) const X_REQUEST_ID: &str = "x-request-id";
}

const USER_AGENT_VALUE: &str = concat!("payorch-sdk/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP layer behind every service. Holds one reqwest client plus the
/// current setup snapshot; clones are cheap and every clone observes setup
/// replacements.
#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    http: reqwest::Client,
    setup: Arc<RwLock<Arc<Setup>>>,
}

impl ApiClient {
    pub(crate) fn new(setup: Setup) -> CustomResult<Self, SdkError> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .change_context(SdkError::ClientConstruction)?;
        Ok(Self {
            http,
            setup: Arc::new(RwLock::new(Arc::new(setup))),
        })
    }

    /// The setup snapshot for a new call. Requests already in flight keep the
    /// snapshot they captured at entry; replacement affects later calls only.
    pub(crate) fn setup_snapshot(&self) -> Arc<Setup> {
        match self.setup.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    pub(crate) fn replace_setup(&self, setup: Setup) {
        let setup = Arc::new(setup);
        match self.setup.write() {
            Ok(mut guard) => *guard = setup,
            Err(poisoned) => *poisoned.into_inner() = setup,
        }
    }

    /// GET with the request encoded as a query string, per the API's
    /// body-as-query convention for reads.
    pub(crate) async fn get<Q, T>(
        &self,
        segments: &[&str],
        query: Option<&Q>,
    ) -> CustomResult<T, SdkError>
    where
        Q: serde::Serialize + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        let setup = self.setup_snapshot();
        let mut url = endpoint(&setup, segments)?;
        if let Some(query) = query {
            let encoded =
                serde_urlencoded::to_string(query).change_context(SdkError::BodySerialization)?;
            if !encoded.is_empty() {
                url.set_query(Some(&encoded));
            }
        }
        let body = self.send(&setup, reqwest::Method::GET, url, None).await?;
        decode(&body)
    }

    pub(crate) async fn post<B, T>(&self, segments: &[&str], body: &B) -> CustomResult<T, SdkError>
    where
        B: serde::Serialize + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        let setup = self.setup_snapshot();
        let url = endpoint(&setup, segments)?;
        let payload = serde_json::to_vec(body).change_context(SdkError::BodySerialization)?;
        let bytes = self
            .send(&setup, reqwest::Method::POST, url, Some(payload))
            .await?;
        decode(&bytes)
    }

    /// PUT whose response body is irrelevant; any 2xx counts as success.
    pub(crate) async fn put_no_content<B>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> CustomResult<(), SdkError>
    where
        B: serde::Serialize + ?Sized,
    {
        let setup = self.setup_snapshot();
        let url = endpoint(&setup, segments)?;
        let payload = serde_json::to_vec(body).change_context(SdkError::BodySerialization)?;
        self.send(&setup, reqwest::Method::PUT, url, Some(payload))
            .await?;
        Ok(())
    }

    async fn send(
        &self,
        setup: &Setup,
        method: reqwest::Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> CustomResult<bytes::Bytes, SdkError> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let header_map = build_headers(setup, &request_id, body.is_some())?;

        let mut request = self.http.request(method.clone(), url.clone()).headers(header_map);
        if let Some(body) = body {
            request = request.body(body);
        }
        if let Some(timeout) = setup.timeout {
            request = request.timeout(timeout);
        }

        // Bodies are never logged: requests carry card data and responses
        // carry directory-server credentials.
        let span = tracing::info_span!(
            "payorch_outgoing_request",
            method = %method,
            url = %url,
            request_id = %request_id,
            status_code = Empty,
            latency = Empty,
        );
        async move {
            let start = tokio::time::Instant::now();
            let response = request.send().await.map_err(|error| {
                let api_error = if error.is_timeout() {
                    SdkError::RequestTimeout
                } else {
                    SdkError::RequestNotSent(error.to_string())
                };
                report!(api_error)
            })?;

            let status_code = response.status().as_u16();
            tracing::Span::current().record("status_code", status_code);
            let result = match status_code {
                200..=299 => response
                    .bytes()
                    .await
                    .change_context(SdkError::ResponseDecoding),
                _ => {
                    let body = response.bytes().await.ok();
                    Err(report!(SdkError::Http(HttpErrorDetails::from_body(
                        status_code,
                        body,
                    ))))
                }
            };
            let elapsed = start.elapsed().as_millis();
            tracing::Span::current().record("latency", elapsed);
            tracing::info!("outgoing request completed");
            result
        }
        .instrument(span)
        .await
    }
}

fn endpoint(setup: &Setup, segments: &[&str]) -> CustomResult<Url, SdkError> {
    let mut url =
        Url::parse(&setup.api_base_url()).change_context(SdkError::UrlConstruction)?;
    url.path_segments_mut()
        .map_err(|()| report!(SdkError::UrlConstruction))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

fn build_headers(
    setup: &Setup,
    request_id: &str,
    has_body: bool,
) -> CustomResult<HeaderMap, SdkError> {
    let mut map = HeaderMap::new();

    let token = format!("Bearer {}", setup.auth_token.clone().expose());
    let mut authorization = header_value(&token)?;
    authorization.set_sensitive(true);
    append(&mut map, headers::AUTHORIZATION, authorization)?;

    append(
        &mut map,
        headers::USER_AGENT,
        HeaderValue::from_static(USER_AGENT_VALUE),
    )?;
    append(&mut map, headers::X_REQUEST_ID, header_value(request_id)?)?;
    if let Some(merchant_id) = setup.merchant_id.as_deref() {
        append(
            &mut map,
            headers::X_PAYORCH_MERCHANT_ID,
            header_value(merchant_id)?,
        )?;
    }
    if has_body {
        append(
            &mut map,
            headers::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )?;
    }
    Ok(map)
}

fn header_value(value: &str) -> CustomResult<HeaderValue, SdkError> {
    HeaderValue::from_str(value).change_context(SdkError::HeaderConstruction)
}

fn append(map: &mut HeaderMap, name: &str, value: HeaderValue) -> CustomResult<(), SdkError> {
    let name = HeaderName::from_str(name).change_context(SdkError::HeaderConstruction)?;
    map.append(name, value);
    Ok(())
}

fn decode<T>(body: &bytes::Bytes) -> CustomResult<T, SdkError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_slice(body).change_context(SdkError::ResponseDecoding)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::Environment;

    #[test]
    fn endpoint_escapes_path_segments() {
        let setup = Setup::new("acme", "token", Environment::Sandbox);
        let url = endpoint(
            &setup,
            &["checkout", "sessions", "weird id/❤", "fields"],
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.sandbox.acme.payorch.app/checkout/sessions/weird%20id%2F%E2%9D%A4/fields"
        );
    }

    #[test]
    fn headers_carry_auth_and_merchant_id() {
        let mut setup = Setup::new("acme", "secret-token", Environment::Production);
        setup.merchant_id = Some("merchant_1".to_string());

        let map = build_headers(&setup, "req-1", true).unwrap();
        assert_eq!(map.get("authorization").unwrap(), "Bearer secret-token");
        assert!(map.get("authorization").unwrap().is_sensitive());
        assert_eq!(map.get("x-payorch-merchant-id").unwrap(), "merchant_1");
        assert_eq!(map.get("x-request-id").unwrap(), "req-1");
        assert_eq!(map.get("content-type").unwrap(), "application/json");
        assert_eq!(
            map.get("user-agent").unwrap(),
            &format!("payorch-sdk/{}", env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn merchant_header_is_absent_without_merchant_id() {
        let setup = Setup::new("acme", "token", Environment::Sandbox);
        let map = build_headers(&setup, "req-2", false).unwrap();
        assert!(map.get("x-payorch-merchant-id").is_none());
        assert!(map.get("content-type").is_none());
    }
}
