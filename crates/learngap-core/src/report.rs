//! Saved assessment reports with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{AssessmentInput, AssessmentResult};
use crate::scorer::analyze_student;

/// One scored assessment, as written by `learngap analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Optional student display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student: Option<String>,
    /// The input that was scored.
    pub input: AssessmentInput,
    /// The scorer's output.
    pub result: AssessmentResult,
}

impl AssessmentReport {
    /// Score `input` and wrap it in a fresh report.
    pub fn generate(input: AssessmentInput, student: Option<String>) -> Self {
        let result = analyze_student(&input);
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            student,
            input,
            result,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: AssessmentReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Display name for headings, `"Student"` when none was given.
    pub fn student_name(&self) -> &str {
        self.student.as_deref().unwrap_or("Student")
    }
}

/// Read an [`AssessmentInput`] from a JSON file.
pub fn load_input(path: &Path) -> Result<AssessmentInput> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read input from {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse assessment input: {}", path.display()))
}
