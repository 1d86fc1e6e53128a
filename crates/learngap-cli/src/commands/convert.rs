//! The `learngap convert` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use learngap_core::converter::convert_named;
use learngap_core::error::ValidationError;

pub fn execute(format: String, text: Option<String>, input: Option<PathBuf>) -> Result<()> {
    if format.is_empty() {
        return Err(ValidationError::MissingField("Format").into());
    }

    let text = match (text, input) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, None) => String::new(),
    };
    if text.is_empty() {
        return Err(ValidationError::MissingField("Text").into());
    }

    println!("{}", convert_named(&text, &format));
    Ok(())
}
