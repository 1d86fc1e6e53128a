//! Accessibility content conversion.
//!
//! Each format is a deterministic re-punctuation of the input. Sentences are
//! whatever lies between `.` characters; no language model is involved.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Number of characters quoted in the visual format's main-idea section.
pub const MAIN_IDEA_CHARS: usize = 150;

/// Target presentation for converted content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFormat {
    /// One bullet per sentence.
    Simplified,
    /// Key-point list plus a main-idea excerpt.
    Visual,
    /// Wide word spacing, one sentence per paragraph, upper case.
    Dyslexia,
    /// Read-aloud script with pause directives.
    Audio,
}

impl ContentFormat {
    pub const ALL: [ContentFormat; 4] = [
        ContentFormat::Simplified,
        ContentFormat::Visual,
        ContentFormat::Dyslexia,
        ContentFormat::Audio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentFormat::Simplified => "simplified",
            ContentFormat::Visual => "visual",
            ContentFormat::Dyslexia => "dyslexia",
            ContentFormat::Audio => "audio",
        }
    }
}

impl fmt::Display for ContentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == lower)
            .ok_or_else(|| ValidationError::UnsupportedFormat(s.to_string()))
    }
}

/// Convert `text` into the requested format.
pub fn convert_content(text: &str, format: ContentFormat) -> String {
    match format {
        ContentFormat::Simplified => to_simplified(text),
        ContentFormat::Visual => to_visual(text),
        ContentFormat::Dyslexia => to_dyslexia(text),
        ContentFormat::Audio => to_audio(text),
    }
}

/// Convert by format name. Unrecognised names return `text` unchanged.
pub fn convert_named(text: &str, format: &str) -> String {
    match format.parse::<ContentFormat>() {
        Ok(format) => convert_content(text, format),
        Err(e) => {
            tracing::warn!(error = %e, "returning text unconverted");
            text.to_string()
        }
    }
}

/// Trimmed, non-empty sentences split on `.`.
pub fn sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split('.').map(str::trim).filter(|s| !s.is_empty())
}

/// The first `n` characters of `text`, never splitting a code point.
pub fn prefix_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn to_simplified(text: &str) -> String {
    sentences(text)
        .map(|s| format!("• {s}"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn to_visual(text: &str) -> String {
    let points = sentences(text)
        .map(|s| format!("▸ {s}"))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "📌 KEY POINTS:\n\n{points}\n\n🎯 MAIN IDEA:\n{}...",
        prefix_chars(text, MAIN_IDEA_CHARS)
    )
}

fn to_dyslexia(text: &str) -> String {
    text.replace(' ', "  ").replace('.', ".\n\n").to_uppercase()
}

fn to_audio(text: &str) -> String {
    format!(
        "[BEGIN SCRIPT]\n\n[PAUSE 2 SECONDS]\n\n{}\n\n[END SCRIPT]",
        text.replace('.', ".\n\n[PAUSE 1 SECOND]\n\n")
    )
}
