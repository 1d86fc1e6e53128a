pub mod analyze;
pub mod convert;
pub mod init;
pub mod questions;
pub mod report;
pub mod serve;

use std::path::Path;

use anyhow::{Context, Result};

/// Print `content`, or write it to `output` when one was given.
pub fn emit(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Written to: {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}
