//! The `learngap serve` command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use learngap_providers::{create_classifier, load_config_from};
use learngap_server::{serve, AppState};

pub async fn execute(
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    let mut config = load_config_from(config_path.as_deref())?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let state = match &config.classifier {
        Some(classifier_config) => {
            let classifier = create_classifier(classifier_config)?;
            tracing::info!(classifier = classifier.name(), "text classification enabled");
            AppState::with_classifier(Arc::from(classifier))
        }
        None => AppState::default(),
    };

    serve(&config.server.bind_addr(), state).await
}
