use std::{sync::OnceLock, time::Duration};

use async_trait::async_trait;
use http::Method;
use reqwest::Client;

use crate::error::{Result, TtsError};

/// A single outbound HTTP request as assembled by a provider
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: RequestBody,
}

/// Request body payload
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// Structured value serialized to JSON by the transport
    Json(serde_json::Value),
    /// Raw text sent as-is (e.g. an SSML document)
    Text(String),
}

/// The status/ok/body triple a provider needs to interpret a response
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub ok: bool,
    pub body: Vec<u8>,
}

/// Minimal HTTP capability injected into the providers
///
/// Providers never own a network client; they describe a request and hand
/// it to whatever transport the host supplies. Tests substitute a double
/// returning canned responses.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Common HTTP client to reuse connections across providers
fn http_client() -> Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();

    CLIENT
        .get_or_init(|| {
            let mut headers = http::HeaderMap::new();
            headers.insert(http::header::CONNECTION, http::HeaderValue::from_static("keep-alive"));

            Client::builder()
                .timeout(Duration::from_secs(120))
                .pool_idle_timeout(Some(Duration::from_secs(5)))
                .tcp_nodelay(true)
                .tcp_keepalive(Some(Duration::from_secs(60)))
                .default_headers(headers)
                .build()
                .expect("Failed to build default HTTP client")
        })
        .clone()
}

/// Production transport backed by a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: http_client(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = self.client.request(request.method, &request.url);

        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        builder = match request.body {
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Text(text) => builder.body(text),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| TtsError::Connection(format!("Failed to send TTS request: {e}")))?;

        let status = response.status();

        let body = response
            .bytes()
            .await
            .map_err(|e| TtsError::Connection(format!("Failed to read TTS response body: {e}")))?;

        Ok(HttpResponse {
            status: status.as_u16(),
            ok: status.is_success(),
            body: body.to_vec(),
        })
    }
}
