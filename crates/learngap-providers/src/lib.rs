//! learngap-providers: configuration and external classifier integrations.
//!
//! Loads `learngap.toml` and implements the `TextClassifier` trait for the
//! Hugging Face Inference API, plus a mock for tests.

pub mod config;
pub mod error;
pub mod huggingface;
pub mod mock;

pub use config::{
    create_classifier, load_config, load_config_from, parse_config, ClassifierConfig, LearngapConfig,
    ServerConfig,
};
pub use error::ProviderError;
