//! The `learngap report` command.

use std::path::PathBuf;

use anyhow::Result;

use learngap_core::report::AssessmentReport;
use learngap_report::{generate_html, to_markdown, write_html_report};

use super::emit;

pub fn execute(input: PathBuf, format: String, output: Option<PathBuf>) -> Result<()> {
    let report = AssessmentReport::load_json(&input)?;

    match (format.as_str(), &output) {
        ("html", Some(path)) => {
            write_html_report(&report, path)?;
            eprintln!("Written to: {}", path.display());
            Ok(())
        }
        ("html", None) => emit(&generate_html(&report), None),
        _ => emit(&to_markdown(&report), output.as_deref()),
    }
}
