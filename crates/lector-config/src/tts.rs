use indexmap::IndexMap;
use serde::Deserialize;

/// Top-level TTS configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TtsConfig {
    /// TTS provider configurations keyed by name
    #[serde(default)]
    pub providers: IndexMap<String, TtsProviderConfig>,
}

/// Configuration for a single TTS provider
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TtsProviderConfig {
    /// Generic JSON TTS REST endpoint
    Rest(RestTtsConfig),
    /// Microsoft Edge read-aloud endpoint
    Edge(EdgeTtsConfig),
}

/// Options for the JSON REST provider
///
/// Every field is optional; unset fields fall back to the provider's
/// built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RestTtsConfig {
    /// Endpoint URL override
    #[serde(default)]
    pub request_path: Option<String>,
    /// Voice identifier
    #[serde(default)]
    pub voice: Option<String>,
    /// Speech speed multiplier; accepts a number or a numeric string
    #[serde(default)]
    pub speed: Option<NumberOrString>,
    /// Pitch adjustment; accepts a string or a number
    #[serde(default)]
    pub pitch: Option<NumberOrString>,
    /// Speaking style token
    #[serde(default)]
    pub style: Option<String>,
}

/// Options for the Edge read-aloud provider
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeTtsConfig {
    /// Neural voice name (e.g. "en-US-AriaNeural")
    #[serde(default)]
    pub voice_name: Option<String>,
}

/// A value that deserializes from either a JSON number or a string
///
/// Host configuration frequently carries `speed`/`pitch` as strings; the
/// providers coerce these at request time.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(f64),
    String(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_config_from_json() {
        let config: TtsProviderConfig = serde_json::from_str(
            r#"{"type": "rest", "voice": "zh-CN-XiaoxiaoNeural", "speed": 1.25, "pitch": "2"}"#,
        )
        .unwrap();

        let TtsProviderConfig::Rest(rest) = config else {
            panic!("expected rest provider config");
        };
        assert_eq!(rest.voice.as_deref(), Some("zh-CN-XiaoxiaoNeural"));
        assert!(matches!(rest.speed, Some(NumberOrString::Number(n)) if (n - 1.25).abs() < f64::EPSILON));
        assert!(matches!(rest.pitch, Some(NumberOrString::String(ref s)) if s == "2"));
    }

    #[test]
    fn speed_accepts_numeric_string() {
        let config: RestTtsConfig = serde_json::from_str(r#"{"speed": "1.5"}"#).unwrap();
        assert!(matches!(config.speed, Some(NumberOrString::String(ref s)) if s == "1.5"));
    }

    #[test]
    fn edge_config_defaults_empty() {
        let config: EdgeTtsConfig = serde_json::from_str("{}").unwrap();
        assert!(config.voice_name.is_none());
    }

    #[test]
    fn unknown_field_rejected() {
        let result = serde_json::from_str::<TtsProviderConfig>(r#"{"type": "rest", "volume": 3}"#);
        assert!(result.is_err());
    }
}
