use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, TOML parsing fails,
    /// or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let config: Self = toml::from_str(&raw).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if no TTS provider is configured
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.tts.providers.is_empty() {
            anyhow::bail!("at least one TTS provider must be configured");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_provider_table() {
        let config: Config = toml::from_str(
            r#"
            [tts.providers.primary]
            type = "rest"
            request_path = "https://tts.example.com/v1/audio/speech"
            speed = "1.2"

            [tts.providers.fallback]
            type = "edge"
            voice_name = "en-US-GuyNeural"
            "#,
        )
        .unwrap();

        assert_eq!(config.tts.providers.len(), 2);
        assert!(config.validate().is_ok());

        // IndexMap preserves declaration order, which decides the default provider
        let names: Vec<&str> = config.tts.providers.keys().map(String::as_str).collect();
        assert_eq!(names, ["primary", "fallback"]);
    }

    #[test]
    fn empty_config_fails_validation() {
        let config = Config::default();
        assert!(config.validate().is_err());
    }
}
