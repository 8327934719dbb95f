#![allow(clippy::must_use_candidate)]

mod loader;
pub mod tts;

use serde::Deserialize;

pub use tts::{EdgeTtsConfig, NumberOrString, RestTtsConfig, TtsConfig, TtsProviderConfig};

/// Top-level lector configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// TTS provider configuration
    #[serde(default)]
    pub tts: TtsConfig,
}
