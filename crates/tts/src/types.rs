use serde::Deserialize;

/// A single synthesis request
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechRequest {
    /// Text to synthesize into speech
    pub input: String,
    /// Language hint (e.g. "en", "zh_CN"); may be empty when unknown
    #[serde(default)]
    pub language: String,
}

impl SpeechRequest {
    pub fn new(input: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            language: language.into(),
        }
    }
}
