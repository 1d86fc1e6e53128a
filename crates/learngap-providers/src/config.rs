//! Configuration loading and classifier factory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use learngap_core::traits::TextClassifier;

use crate::huggingface::HuggingFaceClassifier;

/// Configuration for the optional text classifier.
///
/// Note: Custom Debug impl masks API keys to prevent accidental exposure in logs.
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClassifierConfig {
    HuggingFace {
        #[serde(default)]
        api_key: String,
        #[serde(default)]
        base_url: Option<String>,
        #[serde(default = "default_hf_model")]
        model: String,
        #[serde(default = "default_timeout_secs")]
        timeout_secs: u64,
    },
}

impl std::fmt::Debug for ClassifierConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassifierConfig::HuggingFace {
                api_key: _,
                base_url,
                model,
                timeout_secs,
            } => f
                .debug_struct("HuggingFace")
                .field("api_key", &"***")
                .field("base_url", base_url)
                .field("model", model)
                .field("timeout_secs", timeout_secs)
                .finish(),
        }
    }
}

impl ClassifierConfig {
    fn huggingface_with_key(api_key: String) -> Self {
        ClassifierConfig::HuggingFace {
            api_key,
            base_url: None,
            model: default_hf_model(),
            timeout_secs: default_timeout_secs(),
        }
    }

    fn api_key(&self) -> &str {
        match self {
            ClassifierConfig::HuggingFace { api_key, .. } => api_key,
        }
    }
}

fn default_hf_model() -> String {
    "facebook/bart-large-mnli".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// `host:port`, suitable for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Top-level learngap configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LearngapConfig {
    #[serde(default)]
    pub server: ServerConfig,
    /// Optional text classifier. Absent means local analysis only.
    #[serde(default)]
    pub classifier: Option<ClassifierConfig>,
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str, lookup: &dyn Fn(&str) -> Option<String>) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = lookup(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Resolve env vars in a classifier config.
fn resolve_classifier_config(
    config: &ClassifierConfig,
    lookup: &dyn Fn(&str) -> Option<String>,
) -> ClassifierConfig {
    match config {
        ClassifierConfig::HuggingFace {
            api_key,
            base_url,
            model,
            timeout_secs,
        } => ClassifierConfig::HuggingFace {
            api_key: resolve_env_vars(api_key, lookup),
            base_url: base_url.as_ref().map(|u| resolve_env_vars(u, lookup)),
            model: resolve_env_vars(model, lookup),
            timeout_secs: *timeout_secs,
        },
    }
}

fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `learngap.toml` in the current directory
/// 2. `~/.config/learngap/config.toml`
///
/// Environment variable overrides: `HUGGINGFACE_API_KEY`, `LEARNGAP_HOST`, `LEARNGAP_PORT`.
pub fn load_config() -> Result<LearngapConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<LearngapConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("learngap.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => LearngapConfig::default(),
    };

    apply_env(config, &env_lookup)
}

/// Parse a TOML config string without applying any overrides.
pub fn parse_config(content: &str) -> Result<LearngapConfig> {
    Ok(toml::from_str::<LearngapConfig>(content)?)
}

/// Apply env overrides, resolve `${VAR}` references, and drop a classifier
/// that ends up without a key.
fn apply_env(
    mut config: LearngapConfig,
    lookup: &dyn Fn(&str) -> Option<String>,
) -> Result<LearngapConfig> {
    if let Some(host) = lookup("LEARNGAP_HOST") {
        config.server.host = host;
    }
    if let Some(port) = lookup("LEARNGAP_PORT") {
        config.server.port = port
            .parse()
            .with_context(|| format!("invalid LEARNGAP_PORT: {port}"))?;
    }

    if let Some(key) = lookup("HUGGINGFACE_API_KEY").filter(|k| !k.is_empty()) {
        match config.classifier.as_mut() {
            Some(ClassifierConfig::HuggingFace { api_key, .. }) => *api_key = key,
            None => config.classifier = Some(ClassifierConfig::huggingface_with_key(key)),
        }
    }

    config.classifier = config
        .classifier
        .map(|c| resolve_classifier_config(&c, lookup))
        .filter(|c| {
            let has_key = !c.api_key().is_empty();
            if !has_key {
                tracing::warn!("classifier configured without an API key, disabling it");
            }
            has_key
        });

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("learngap"))
}

/// Create a classifier instance from its configuration.
pub fn create_classifier(config: &ClassifierConfig) -> Result<Box<dyn TextClassifier>> {
    match config {
        ClassifierConfig::HuggingFace {
            api_key,
            base_url,
            model,
            timeout_secs,
        } => Ok(Box::new(HuggingFaceClassifier::new(
            api_key,
            base_url.clone(),
            model,
            *timeout_secs,
        )?)),
    }
}
