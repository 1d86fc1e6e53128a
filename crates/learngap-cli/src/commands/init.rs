//! The `learngap init` command.

use std::path::Path;

use anyhow::{Context, Result};

use learngap_core::model::AssessmentInput;
use learngap_core::questionnaire::{likert_responses, quiz_answers};

const CONFIG_FILE: &str = "learngap.toml";
const SAMPLE_INPUT_FILE: &str = "sample-input.json";

pub fn execute() -> Result<()> {
    write_once(Path::new(CONFIG_FILE), SAMPLE_CONFIG)?;

    let sample = serde_json::to_string_pretty(&sample_input())
        .context("failed to serialize sample input")?;
    write_once(Path::new(SAMPLE_INPUT_FILE), &sample)?;

    println!("\nNext steps:");
    println!("  1. Run: learngap analyze --input {SAMPLE_INPUT_FILE}");
    println!("  2. Run: learngap questions --audience student");
    println!("  3. Set HUGGINGFACE_API_KEY to enable document classification, then: learngap serve");

    Ok(())
}

fn write_once(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Created {}", path.display());
    }
    Ok(())
}

/// A mostly on-track, hands-on learner with a few low classroom ratings.
fn sample_input() -> AssessmentInput {
    AssessmentInput {
        teacher_responses: Some(likert_responses(&[4, 2, 3, 5, 2, 3, 5, 2, 3, 4, 4, 3])),
        parent_responses: Some(likert_responses(&[3, 2, 4, 4, 3, 3, 2, 3])),
        student_quiz_answers: Some(quiz_answers(&[3, 0, 3, 2, 3, 1, 3, 0, 3, 3])),
        uploaded_text: Some(
            "Sam is enthusiastic during science experiments. He finds long reading passages difficult. \
             He remembers steps better after trying them himself."
                .to_string(),
        ),
        diagnosed_difficulty: false,
    }
}

const SAMPLE_CONFIG: &str = r#"# learngap configuration

[server]
host = "127.0.0.1"
port = 3000

# Optional zero-shot classification for /analyze-text.
# Remove this section to run with local heuristics only.
[classifier]
type = "huggingface"
api_key = "${HUGGINGFACE_API_KEY}"
model = "facebook/bart-large-mnli"
timeout_secs = 30
"#;
