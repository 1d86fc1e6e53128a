//! The `learngap analyze` command.

use std::fmt::Write;
use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use learngap_core::report::{load_input, AssessmentReport};
use learngap_core::scorer::validate_input;
use learngap_report::{generate_html, to_markdown, write_html_report};

use super::emit;

pub fn execute(
    input_path: PathBuf,
    student: Option<String>,
    format: String,
    output: Option<PathBuf>,
) -> Result<()> {
    let input = load_input(&input_path)?;
    validate_input(&input)?;

    let report = AssessmentReport::generate(input, student);
    tracing::info!(
        id = %report.id,
        primary = %report.result.learning_style.primary,
        risk = %report.result.risk_assessment.level,
        "assessment scored"
    );

    match format.as_str() {
        "json" => match &output {
            Some(path) => {
                report.save_json(path)?;
                eprintln!("Report saved to: {}", path.display());
            }
            None => println!("{}", serde_json::to_string_pretty(&report)?),
        },
        "markdown" => emit(&to_markdown(&report), output.as_deref())?,
        "html" => match &output {
            Some(path) => {
                write_html_report(&report, path)?;
                eprintln!("Written to: {}", path.display());
            }
            None => emit(&generate_html(&report), None)?,
        },
        _ => emit(&render_text(&report), output.as_deref())?,
    }

    Ok(())
}

/// Terminal summary with tables for scores and gaps.
pub fn render_text(report: &AssessmentReport) -> String {
    let result = &report.result;
    let mut out = String::new();

    let _ = writeln!(out, "Assessment for {}", report.student_name());
    let _ = writeln!(
        out,
        "Primary style: {}",
        result.learning_style.primary.title()
    );

    let mut scores = Table::new();
    scores.set_header(vec!["Style", "Score"]);
    for (style, score) in result.learning_style.scores.iter() {
        scores.add_row(vec![Cell::new(style.title()), Cell::new(score)]);
    }
    let _ = writeln!(out, "{scores}");

    let _ = writeln!(out, "Risk level: {}", result.risk_assessment.level);
    for factor in &result.risk_assessment.factors {
        let _ = writeln!(out, "  - {factor}");
    }

    let mut gaps = Table::new();
    gaps.set_header(vec!["Area", "Severity", "Description"]);
    for gap in &result.identified_gaps {
        gaps.add_row(vec![
            Cell::new(&gap.area),
            Cell::new(gap.severity),
            Cell::new(&gap.description),
        ]);
    }
    let _ = writeln!(out, "{gaps}");

    let _ = writeln!(out, "Recommendations:");
    for rec in &result.recommendations {
        let _ = writeln!(
            out,
            "  [{}] {} ({}): {}",
            rec.priority, rec.title, rec.category, rec.description
        );
    }

    let _ = writeln!(out);
    let _ = write!(out, "{}", result.summary);
    out
}
