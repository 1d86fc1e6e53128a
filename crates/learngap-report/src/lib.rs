//! learngap-report: renders saved assessments for people to read.

pub mod html;
pub mod markdown;

pub use html::{generate_html, write_html_report};
pub use markdown::to_markdown;
