use std::sync::Arc;

use lector_config::TtsProviderConfig;

use crate::{
    error::TtsError,
    provider::{TtsProvider, edge::EdgeProvider, rest::RestProvider},
    transport::HttpTransport,
    types::SpeechRequest,
};

/// Registry that routes synthesis requests to a configured provider
pub struct TtsRegistry {
    providers: Vec<Box<dyn TtsProvider>>,
}

impl TtsRegistry {
    /// Synthesize text using the named provider
    ///
    /// An empty name selects the first configured provider.
    pub async fn synthesize(&self, provider_name: &str, request: SpeechRequest) -> crate::error::Result<Vec<u8>> {
        let provider = if provider_name.is_empty() {
            self.providers
                .first()
                .ok_or_else(|| TtsError::ProviderNotFound("No TTS providers configured".to_string()))?
        } else {
            self.providers
                .iter()
                .find(|p| p.name() == provider_name)
                .ok_or_else(|| TtsError::ProviderNotFound(provider_name.to_string()))?
        };

        provider.synthesize(request).await
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }
}

/// Builder for constructing the registry from configuration
pub struct TtsRegistryBuilder<'a> {
    config: &'a lector_config::Config,
    transport: Arc<dyn HttpTransport>,
}

impl<'a> TtsRegistryBuilder<'a> {
    pub fn new(config: &'a lector_config::Config, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    pub fn build(self) -> crate::error::Result<TtsRegistry> {
        let mut providers: Vec<Box<dyn TtsProvider>> = Vec::new();

        for (name, provider_config) in &self.config.tts.providers {
            tracing::debug!("Initializing TTS provider: {name}");

            let provider: Box<dyn TtsProvider> = match provider_config {
                TtsProviderConfig::Rest(rest) => Box::new(RestProvider::new(
                    name.clone(),
                    rest.clone(),
                    Arc::clone(&self.transport),
                )),
                TtsProviderConfig::Edge(edge) => Box::new(EdgeProvider::new(
                    name.clone(),
                    edge.clone(),
                    Arc::clone(&self.transport),
                )),
            };

            providers.push(provider);
        }

        if providers.is_empty() {
            tracing::debug!("No TTS providers configured");
        } else {
            tracing::debug!("TTS registry initialized with {} provider(s)", providers.len());
        }

        Ok(TtsRegistry { providers })
    }
}
