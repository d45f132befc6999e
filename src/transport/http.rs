use crate::client::ClientConfig;
use crate::transport::classify;
use crate::{Error, ErrorContext, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use url::Url;

const JSON: &str = "application/json";
const TEXT: &str = "text/plain";

/// Performs single request/response exchanges against the AiMesh service.
///
/// Holds only immutable configuration; the inner `reqwest::Client` pools
/// connections and is shared by clones.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    authorization: Option<HeaderValue>,
    cancel: Option<CancellationToken>,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let trimmed = config.base_url.trim_end_matches('/');
        let base_url = Url::parse(trimmed).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid base URL: {}", e),
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(trimmed.to_string())
                    .with_source("transport"),
            )
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::configuration_with_context(
                "base URL cannot carry a path",
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(trimmed.to_string())
                    .with_source("transport"),
            ));
        }

        let authorization = config
            .api_key
            .as_deref()
            .map(bearer_header)
            .transpose()?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            authorization,
            cancel: None,
        })
    }

    /// A transport sharing this one's connection pool whose calls abort when `token` fires.
    pub(crate) fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            cancel: Some(token),
            ..self.clone()
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL extended by `segments`, each percent-encoded as a single path segment.
    pub fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::configuration("base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send an optional JSON body and decode the JSON response as `T`.
    pub async fn execute_json<B, T>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(segments)?;
        let payload = encode_body(body)?;
        let text = self.execute(method, &url, payload, JSON).await?;
        serde_json::from_str(&text).map_err(|e| {
            warn!(url = %url, error = %e, "aimesh response body could not be decoded");
            classify::decode_error(&e, &text)
        })
    }

    /// Send an optional JSON body; any 2xx is success and the body is ignored.
    pub async fn execute_unit<B>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(segments)?;
        let payload = encode_body(body)?;
        self.execute(method, &url, payload, JSON).await?;
        Ok(())
    }

    /// `GET` returning the raw body text, untouched.
    pub async fn execute_text(&self, segments: &[&str]) -> Result<String> {
        let url = self.url(segments)?;
        self.execute(Method::GET, &url, None, TEXT).await
    }

    async fn execute(
        &self,
        method: Method,
        url: &Url,
        body: Option<Vec<u8>>,
        accept: &str,
    ) -> Result<String> {
        let start = Instant::now();
        debug!(method = %method, url = %url, "aimesh request");

        let mut request = self
            .client
            .request(method.clone(), url.clone())
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, accept);
        if let Some(value) = &self.authorization {
            request = request.header(AUTHORIZATION, value.clone());
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        let exchange = async {
            let response = request
                .send()
                .await
                .map_err(|e| classify::transport_error(url.as_str(), &e))?;
            let status = response.status();
            let headers = response.headers().clone();
            let text = response
                .text()
                .await
                .map_err(|e| classify::transport_error(url.as_str(), &e))?;
            Ok::<(StatusCode, HeaderMap, String), Error>((status, headers, text))
        };

        // Dropping `exchange` on cancellation releases the connection.
        let outcome = match &self.cancel {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => Err(Error::Cancelled { url: url.to_string() }),
                result = exchange => result,
            },
            None => exchange.await,
        };

        let (status, headers, text) = match outcome {
            Ok(parts) => parts,
            Err(err) => {
                info!(
                    error_kind = err.kind().name(),
                    url = %url,
                    duration_ms = start.elapsed().as_millis() as u64,
                    "aimesh request failed"
                );
                return Err(err);
            }
        };

        if !status.is_success() {
            let err = classify::status_error(status.as_u16(), &headers, text);
            info!(
                http_status = status.as_u16(),
                error_kind = err.kind().name(),
                url = %url,
                duration_ms = start.elapsed().as_millis() as u64,
                "aimesh request rejected"
            );
            return Err(err);
        }

        debug!(
            http_status = status.as_u16(),
            url = %url,
            duration_ms = start.elapsed().as_millis() as u64,
            "aimesh response"
        );
        Ok(text)
    }
}

/// The key itself never appears in the error.
fn bearer_header(key: &str) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", key)).map_err(|_| {
        Error::configuration_with_context(
            "API key is not a valid HTTP header value",
            ErrorContext::new()
                .with_field_path("api_key")
                .with_source("transport"),
        )
    })?;
    value.set_sensitive(true);
    Ok(value)
}

fn encode_body<B>(body: Option<&B>) -> Result<Option<Vec<u8>>>
where
    B: Serialize + ?Sized,
{
    body.map(|b| serde_json::to_vec(b).map_err(|e| Error::from_wire("request", e)))
        .transpose()
}
