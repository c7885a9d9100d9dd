//! HTTP client for the generative language REST API.

use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT},
    Client as ReqwestClient, Response,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Error, Result};

/// HTTP client for the API.
///
/// A pass-through boundary: it serializes the request, carries the
/// credential, and turns transport-level failures into typed errors. It
/// never interprets a successful response body beyond deserializing it.
#[derive(Debug)]
pub struct HttpClient {
    client: ReqwestClient,
    base_url: String,
    api_key: String,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// `timeout` of `None` leaves the request unbounded; a hung remote
    /// call then hangs the awaiting caller.
    pub fn new(base_url: String, api_key: String, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = ReqwestClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url,
            api_key,
        })
    }

    /// POSTs a JSON body and deserializes the JSON reply.
    pub async fn post<T, R>(&self, path: &str, body: &T) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "dispatching request");

        let response = self
            .client
            .post(&url)
            .headers(self.default_headers()?)
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    fn default_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(&self.api_key)
                .map_err(|_| Error::Config("api key contains invalid header characters".to_string()))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("retouch-rust/0.1"));
        Ok(headers)
    }

    async fn handle_response<R>(&self, response: Response) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(parse_error(&body, status.as_u16()));
        }

        serde_json::from_slice(&body).map_err(Error::from)
    }
}

/// Parses the `{"error": {code, message, status}}` error body.
fn parse_error(body: &[u8], http_status: u16) -> Error {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: Option<ErrorDetail>,
    }

    #[derive(serde::Deserialize)]
    struct ErrorDetail {
        #[serde(default)]
        message: String,
        #[serde(default)]
        status: String,
    }

    if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) {
        if let Some(detail) = parsed.error {
            return Error::Api {
                http_status,
                status: detail.status,
                message: detail.message,
            };
        }
    }

    Error::Api {
        http_status,
        status: String::new(),
        message: String::from_utf8_lossy(body).to_string(),
    }
}
