use std::sync::Arc;

use async_trait::async_trait;
use http::Method;
use lector_config::EdgeTtsConfig;

use crate::{
    error::TtsError,
    transport::{HttpRequest, HttpTransport, RequestBody},
    types::SpeechRequest,
};

use super::TtsProvider;

const EDGE_ENDPOINT: &str = "https://speech.platform.bing.com/consumer/speech/synthesize/readaloud/edge/v1?TrustedClientToken=6A5AA1D4EAFF4E9FB37E23D68491D6F4";
const DEFAULT_VOICE_NAME: &str = "en-US-AriaNeural";
const OUTPUT_FORMAT: &str = "audio-24khz-48kbitrate-mono-mp3";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.0.0";

/// Microsoft Edge read-aloud provider
///
/// POSTs an SSML document with browser-impersonating headers to the fixed
/// read-aloud endpoint (trusted-client token embedded in the URL) and
/// returns the MP3 bytes.
pub struct EdgeProvider {
    transport: Arc<dyn HttpTransport>,
    config: EdgeTtsConfig,
    name: String,
}

impl EdgeProvider {
    pub fn new(name: String, config: EdgeTtsConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            config,
            name,
        }
    }
}

/// XML-escape text for SSML embedding. The ampersand substitution runs
/// first so entities introduced by the later substitutions are not
/// double-escaped.
fn escape_ssml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Map a language hint to an SSML locale.
///
/// An empty hint becomes "en"; otherwise only the FIRST underscore turns
/// into a hyphen ("zh_CN_x" keeps its second underscore). The trailing
/// "en-US" fallback only fires for an empty mapped value, so an empty hint
/// ends at "en". Both quirks are kept on purpose; see DESIGN.md.
fn resolve_locale(hint: &str) -> String {
    let locale = if hint.is_empty() {
        "en".to_string()
    } else {
        hint.replacen('_', "-", 1)
    };

    if locale.is_empty() {
        "en-US".to_string()
    } else {
        locale
    }
}

fn build_ssml(text: &str, voice_name: &str, locale: &str) -> String {
    format!(
        "<?xml version='1.0' encoding='utf-8'?>\
         <speak version='1.0' xml:lang='{locale}'>\
         <voice name='{voice_name}'>{}</voice>\
         </speak>",
        escape_ssml(text)
    )
}

#[async_trait]
impl TtsProvider for EdgeProvider {
    async fn synthesize(&self, request: SpeechRequest) -> crate::error::Result<Vec<u8>> {
        let voice_name = self.config.voice_name.as_deref().unwrap_or(DEFAULT_VOICE_NAME);
        let locale = resolve_locale(&request.language);

        tracing::debug!(
            "Edge TTS request: voice={voice_name}, locale={locale}, input_len={}",
            request.input.len(),
        );

        let ssml = build_ssml(&request.input, voice_name, &locale);

        let response = self
            .transport
            .execute(HttpRequest {
                method: Method::POST,
                url: EDGE_ENDPOINT.to_string(),
                headers: vec![
                    ("Content-Type", "application/ssml+xml".to_string()),
                    ("X-Microsoft-OutputFormat", OUTPUT_FORMAT.to_string()),
                    ("User-Agent", USER_AGENT.to_string()),
                    ("Accept", "*/*".to_string()),
                    ("Origin", "https://edge.microsoft.com".to_string()),
                    ("Referer", "https://edge.microsoft.com/".to_string()),
                ],
                body: RequestBody::Text(ssml),
            })
            .await?;

        if !response.ok {
            let detail = String::from_utf8_lossy(&response.body).into_owned();

            tracing::error!("Edge TTS error ({}): {detail}", response.status);

            return Err(TtsError::RequestFailed {
                status: response.status,
                detail: Some(detail),
            });
        }

        tracing::debug!("Edge TTS synthesis complete, {} bytes", response.body.len());

        Ok(response.body)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
