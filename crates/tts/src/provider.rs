pub mod edge;
pub mod rest;

use async_trait::async_trait;

use crate::types::SpeechRequest;

/// Trait for TTS provider implementations
///
/// Both providers are independent strategies behind the same contract:
/// text plus a language hint in, encoded audio bytes out. The audio format
/// is decided by the remote service (MP3 for both built-in providers) and
/// is not attached to the return value.
#[async_trait]
pub trait TtsProvider: Send + Sync {
    /// Synthesize text to speech, returning the raw audio bytes
    async fn synthesize(&self, request: SpeechRequest) -> crate::error::Result<Vec<u8>>;

    /// Get the provider name
    fn name(&self) -> &str;
}
