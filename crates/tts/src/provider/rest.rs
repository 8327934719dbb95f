use std::sync::Arc;

use async_trait::async_trait;
use http::Method;
use lector_config::{NumberOrString, RestTtsConfig};

use crate::{
    error::TtsError,
    transport::{HttpRequest, HttpTransport, RequestBody},
    types::SpeechRequest,
};

use super::TtsProvider;

const DEFAULT_REST_ENDPOINT: &str = "https://tts.wangwangit.com/v1/audio/speech";
const DEFAULT_VOICE: &str = "zh-CN-XiaoxiaoNeural";
const DEFAULT_STYLE: &str = "general";
const DEFAULT_SPEED: f64 = 1.0;
const DEFAULT_PITCH: &str = "0";

/// Generic JSON TTS REST provider
///
/// POSTs `{input, voice, speed, pitch, style}` to a configurable endpoint
/// and returns the response body bytes. The language hint is ignored; the
/// configured voice carries the locale.
pub struct RestProvider {
    transport: Arc<dyn HttpTransport>,
    config: RestTtsConfig,
    name: String,
}

impl RestProvider {
    pub fn new(name: String, config: RestTtsConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            config,
            name,
        }
    }

    /// Trimmed endpoint override when non-empty, else the default.
    /// A whitespace-only override trims to empty and falls back too.
    fn endpoint(&self) -> &str {
        self.config
            .request_path
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .unwrap_or(DEFAULT_REST_ENDPOINT)
    }
}

/// Minimal sanitizer for text embedded in the JSON `input` field: doubles
/// backslashes and collapses CRLF/LF to a single LF. Deliberately NOT a
/// full JSON string encoder; quotes and other control characters are left
/// to the JSON serializer.
fn escape_json_text(text: &str) -> String {
    text.replace('\\', "\\\\").replace("\r\n", "\n")
}

/// Parse the longest leading float out of a string: optional sign, digits,
/// fraction, exponent. Trailing garbage is dropped ("1.5x" reads as 1.5),
/// matching how the upstream payloads coerce string speeds.
fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(&(b'+' | b'-'))) {
        end += 1;
    }

    let mut seen_digit = false;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
        seen_digit = true;
    }
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
            seen_digit = true;
        }
    }
    if !seen_digit {
        return None;
    }

    if matches!(bytes.get(end), Some(&(b'e' | b'E'))) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(&(b'+' | b'-'))) {
            exp_end += 1;
        }
        let mut seen_exp_digit = false;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
            seen_exp_digit = true;
        }
        // A bare "e"/"e-" tail is not part of the number
        if seen_exp_digit {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Coerce `speed` to a finite float, accepting numeric strings
fn resolve_speed(speed: Option<&NumberOrString>) -> f64 {
    let parsed = match speed {
        Some(NumberOrString::Number(n)) => Some(*n),
        Some(NumberOrString::String(s)) => parse_float_prefix(s),
        None => None,
    };

    parsed.filter(|n| n.is_finite()).unwrap_or(DEFAULT_SPEED)
}

/// String form of `pitch` when it is a string or number, else `"0"`
fn resolve_pitch(pitch: Option<&NumberOrString>) -> String {
    match pitch {
        Some(NumberOrString::Number(n)) => n.to_string(),
        Some(NumberOrString::String(s)) => s.clone(),
        None => DEFAULT_PITCH.to_string(),
    }
}

#[async_trait]
impl TtsProvider for RestProvider {
    async fn synthesize(&self, request: SpeechRequest) -> crate::error::Result<Vec<u8>> {
        let endpoint = self.endpoint();
        let voice = self.config.voice.as_deref().unwrap_or(DEFAULT_VOICE);
        let speed = resolve_speed(self.config.speed.as_ref());
        let pitch = resolve_pitch(self.config.pitch.as_ref());
        let style = self.config.style.as_deref().unwrap_or(DEFAULT_STYLE);

        tracing::debug!(
            "REST TTS request: endpoint={endpoint}, voice={voice}, input_len={}",
            request.input.len(),
        );

        let payload = serde_json::json!({
            "input": escape_json_text(&request.input),
            "voice": voice,
            "speed": speed,
            "pitch": pitch,
            "style": style,
        });

        let response = self
            .transport
            .execute(HttpRequest {
                method: Method::POST,
                url: endpoint.to_string(),
                headers: vec![("Content-Type", "application/json".to_string())],
                body: RequestBody::Json(payload),
            })
            .await?;

        if !response.ok {
            // Body text enriches the message when it decodes; decode
            // failures are non-fatal and keep the base message
            let detail = String::from_utf8(response.body).ok();

            match detail.as_deref() {
                Some(text) => tracing::error!("REST TTS error ({}): {text}", response.status),
                None => tracing::error!("REST TTS error ({})", response.status),
            }

            return Err(TtsError::RequestFailed {
                status: response.status,
                detail,
            });
        }

        tracing::debug!("REST TTS synthesis complete, {} bytes", response.body.len());

        Ok(response.body)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
