#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod provider;
mod registry;
mod transport;
mod types;

use std::sync::Arc;

pub use error::{Result, TtsError};
pub use provider::{TtsProvider, edge::EdgeProvider, rest::RestProvider};
pub use registry::{TtsRegistry, TtsRegistryBuilder};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, RequestBody};
pub use types::SpeechRequest;

/// Build the TTS registry from configuration with the default transport
pub fn build_registry(config: &lector_config::Config) -> anyhow::Result<TtsRegistry> {
    let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::new());

    TtsRegistryBuilder::new(config, transport)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to initialize TTS registry: {e}"))
}
