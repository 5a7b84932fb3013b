use crate::{ClientResult, Normalizer, TransportError, TransportResult};

use cdf_session::SessionManager;

use log::{debug, warn};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Url};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::Value;

/// HTTP client for the CDF REST backend
pub struct Client {
    pub base_url: String,
    session: SessionManager,
    normalizer: Normalizer,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "http://127.0.0.1:8000")
    /// * `session` - Token source for the `Authorization` header
    pub fn new(base_url: &str, session: SessionManager) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            normalizer: Normalizer::new(session.clone()),
            session,
            client: ReqwestClient::new(),
        }
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Build a request carrying the current auth header, if any
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, &url)
            .headers(self.session.auth_header())
    }

    /// Like [`request`](Self::request), appending the filters that are set
    /// as percent-encoded query pairs
    pub(crate) fn request_with_query(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, Option<String>)],
    ) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut url = match Url::parse(&url) {
            Ok(url) => url,
            Err(e) => {
                // send() reports the unusable URL
                debug!("Cannot parse request URL {url}: {e}");
                return self.request(method, path);
            }
        };

        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                if let Some(value) = value {
                    pairs.append_pair(key, value);
                }
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }

        self.client
            .request(method, url)
            .headers(self.session.auth_header())
    }

    /// Send, then unwrap the backend envelope into `T` or a normalised error
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        default_message: &str,
    ) -> ClientResult<T> {
        match self.send(req).await {
            Ok(body) => self.unwrap_envelope(body, default_message),
            Err(e) => {
                warn!("Request failed: {e}");
                Err(self.normalizer.normalize(&e, default_message))
            }
        }
    }

    /// Like [`execute`](Self::execute) for calls whose payload is discarded
    pub(crate) async fn execute_unit(
        &self,
        req: RequestBuilder,
        default_message: &str,
    ) -> ClientResult<()> {
        self.execute::<IgnoredAny>(req, default_message)
            .await
            .map(|_| ())
    }

    async fn send(&self, req: RequestBuilder) -> TransportResult<Value> {
        let response = req.send().await?;
        let status = response.status();

        // The status line decides the outcome; an unreadable body is no body.
        if !status.is_success() {
            let body = match response.bytes().await {
                Ok(bytes) => serde_json::from_slice::<Value>(&bytes).ok(),
                Err(e) => {
                    debug!("Error body for {status} unreadable: {e}");
                    None
                }
            };
            return Err(TransportError::status(status.as_u16(), body));
        }

        let text = response.text().await?;

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// A body tagged `"status": "error"` is a failure even on 2xx. Tagged
    /// success bodies yield `data`; untagged bodies are taken as the payload.
    fn unwrap_envelope<T: DeserializeOwned>(
        &self,
        body: Value,
        default_message: &str,
    ) -> ClientResult<T> {
        if body.get("status").and_then(Value::as_str) == Some("error") {
            debug!("Backend reported error with success status");
            return Err(self.normalizer.normalize_body(&body, default_message));
        }

        let data = match body {
            Value::Object(mut map) if map.contains_key("status") => {
                map.remove("data").unwrap_or(Value::Null)
            }
            other => other,
        };

        serde_json::from_value(data).map_err(|e| {
            warn!("Unexpected payload shape: {e}");
            self.normalizer
                .normalize(&TransportError::from(e), default_message)
        })
    }
}
