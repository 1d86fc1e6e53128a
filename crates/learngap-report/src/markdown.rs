//! Markdown rendering, for pasting into notes or issue trackers.

use std::fmt::Write;

use learngap_core::report::AssessmentReport;

/// Escape pipes so free text cannot break a table row.
fn cell(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ")
}

/// Render a saved assessment as Markdown.
pub fn to_markdown(report: &AssessmentReport) -> String {
    let result = &report.result;
    let mut md = String::new();

    let _ = writeln!(md, "# Learning assessment: {}", report.student_name());
    let _ = writeln!(md);
    let _ = writeln!(
        md,
        "_Report `{}` created {}_",
        report.id,
        report.created_at.format("%Y-%m-%d %H:%M UTC")
    );
    let _ = writeln!(md);
    let _ = writeln!(md, "{}", result.summary);
    let _ = writeln!(md);

    let _ = writeln!(md, "## Learning style");
    let _ = writeln!(md);
    let _ = writeln!(
        md,
        "Primary style: **{}**",
        result.learning_style.primary.title()
    );
    let _ = writeln!(md);
    let _ = writeln!(md, "| Style | Score |");
    let _ = writeln!(md, "|---|---:|");
    for (style, score) in result.learning_style.scores.iter() {
        let _ = writeln!(md, "| {} | {score} |", style.title());
    }
    let _ = writeln!(md);

    let _ = writeln!(md, "## Risk assessment");
    let _ = writeln!(md);
    let _ = writeln!(md, "Risk level: **{}**", result.risk_assessment.level);
    let _ = writeln!(md);
    for factor in &result.risk_assessment.factors {
        let _ = writeln!(md, "- {factor}");
    }
    let _ = writeln!(md);

    let _ = writeln!(md, "## Identified gaps");
    let _ = writeln!(md);
    let _ = writeln!(md, "| Area | Severity | Description |");
    let _ = writeln!(md, "|---|---|---|");
    for gap in &result.identified_gaps {
        let _ = writeln!(
            md,
            "| {} | {} | {} |",
            cell(&gap.area),
            gap.severity,
            cell(&gap.description)
        );
    }
    let _ = writeln!(md);

    let _ = writeln!(md, "## Recommendations");
    let _ = writeln!(md);
    for rec in &result.recommendations {
        let _ = writeln!(
            md,
            "- **{}** ({}, {} priority): {}",
            rec.title, rec.category, rec.priority, rec.description
        );
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use learngap_core::model::AssessmentInput;

    #[test]
    fn markdown_has_every_section() {
        let input = AssessmentInput {
            student_quiz_answers: Some(vec!["reading".into(), "reading".into()]),
            ..Default::default()
        };
        let report = AssessmentReport::generate(input, Some("Ava".into()));
        let md = to_markdown(&report);

        assert!(md.starts_with("# Learning assessment: Ava\n"));
        assert!(md.contains("Primary style: **Reading**"));
        assert!(md.contains("| Reading | 20 |"));
        assert!(md.contains("Risk level: **Low**"));
        assert!(md.contains("- No significant risk factors identified"));
        assert!(md.contains("| No significant gaps | mild |"));
        assert!(md.contains("## Recommendations"));
    }

    #[test]
    fn pipes_are_escaped_in_tables() {
        assert_eq!(cell("a | b\nc"), "a \\| b c");
    }
}
