//! HTML report generator.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use anyhow::{Context, Result};
use std::path::Path;

use learngap_core::model::{LearningStyle, Priority, RiskLevel, Severity, StyleScores};
use learngap_core::report::AssessmentReport;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn risk_class(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "low",
        RiskLevel::Medium => "medium",
        RiskLevel::High => "high",
    }
}

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Mild => "low",
        Severity::Moderate => "medium",
        Severity::Significant => "high",
    }
}

fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "low",
        Priority::Medium => "medium",
        Priority::High => "high",
    }
}

/// Generate an HTML report from a saved assessment.
pub fn generate_html(report: &AssessmentReport) -> String {
    let result = &report.result;
    let student = html_escape(report.student_name());
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>Learning assessment: {student}</title>\n"));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str(&format!("<h1>Learning assessment: {student}</h1>\n"));
    html.push_str(&format!(
        "<p class=\"meta\">Report <code>{}</code> | {}</p>\n",
        report.id,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str(&format!(
        "<p class=\"summary\">{}</p>\n",
        html_escape(&result.summary)
    ));
    html.push_str("</header>\n");

    // Learning style
    let primary = result.learning_style.primary;
    html.push_str("<section class=\"style\">\n");
    html.push_str("<h2>Learning Style</h2>\n");
    html.push_str(&format!(
        "<p>Primary style: <strong>{}</strong></p>\n",
        primary.title()
    ));
    html.push_str(&generate_radar_chart(&result.learning_style.scores));
    html.push_str("<table class=\"scores\">\n");
    html.push_str("<thead><tr><th>Style</th><th>Score</th></tr></thead>\n<tbody>\n");
    for (style, score) in result.learning_style.scores.iter() {
        let class = if style == primary { " class=\"primary\"" } else { "" };
        html.push_str(&format!(
            "<tr{class}><td>{}</td><td>{score}</td></tr>\n",
            style.title()
        ));
    }
    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    // Risk
    let risk = &result.risk_assessment;
    html.push_str("<section class=\"risk\">\n");
    html.push_str("<h2>Risk Assessment</h2>\n");
    html.push_str(&format!(
        "<p>Risk level: <span class=\"badge {}\">{}</span></p>\n",
        risk_class(risk.level),
        risk.level
    ));
    html.push_str("<ul>\n");
    for factor in &risk.factors {
        html.push_str(&format!("<li>{}</li>\n", html_escape(factor)));
    }
    html.push_str("</ul>\n");
    html.push_str("</section>\n");

    // Gaps
    html.push_str("<section class=\"gaps\">\n");
    html.push_str("<h2>Identified Gaps</h2>\n");
    html.push_str("<table>\n");
    html.push_str("<thead><tr><th>Area</th><th>Severity</th><th>Description</th></tr></thead>\n<tbody>\n");
    for gap in &result.identified_gaps {
        html.push_str(&format!(
            "<tr><td>{}</td><td class=\"{}\">{}</td><td>{}</td></tr>\n",
            html_escape(&gap.area),
            severity_class(gap.severity),
            gap.severity,
            html_escape(&gap.description)
        ));
    }
    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    // Recommendations
    html.push_str("<section class=\"recommendations\">\n");
    html.push_str("<h2>Recommendations</h2>\n");
    html.push_str("<table>\n");
    html.push_str("<thead><tr><th>Category</th><th>Recommendation</th><th>Priority</th></tr></thead>\n<tbody>\n");
    for rec in &result.recommendations {
        html.push_str(&format!(
            "<tr><td>{}</td><td><strong>{}</strong><br>{}</td><td class=\"{}\">{}</td></tr>\n",
            rec.category,
            html_escape(&rec.title),
            html_escape(&rec.description),
            priority_class(rec.priority),
            rec.priority
        ));
    }
    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(&html_escape(
        &serde_json::to_string_pretty(report).unwrap_or_default(),
    ));
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &AssessmentReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write HTML report to {}", path.display()))?;
    Ok(())
}

const RADAR_SIZE: f64 = 320.0;
const RADAR_RADIUS: f64 = 110.0;
const RADAR_RINGS: usize = 4;

/// Axis direction for each style: visual up, then clockwise.
fn axis(index: usize) -> (f64, f64) {
    let angle = -std::f64::consts::FRAC_PI_2 + index as f64 * std::f64::consts::FRAC_PI_2;
    (angle.cos(), angle.sin())
}

fn polygon(fractions: impl Iterator<Item = f64>) -> String {
    let center = RADAR_SIZE / 2.0;
    fractions
        .enumerate()
        .map(|(i, f)| {
            let (dx, dy) = axis(i);
            format!(
                "{:.1},{:.1}",
                center + dx * RADAR_RADIUS * f,
                center + dy * RADAR_RADIUS * f
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Four-axis radar chart of the style scores, scaled to the largest score.
fn generate_radar_chart(scores: &StyleScores) -> String {
    let center = RADAR_SIZE / 2.0;
    let max = scores.iter().map(|(_, s)| s).max().unwrap_or(0).max(1) as f64;

    let mut svg = format!(
        "<svg width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        size = RADAR_SIZE
    );

    for ring in 1..=RADAR_RINGS {
        let f = ring as f64 / RADAR_RINGS as f64;
        svg.push_str(&format!(
            "  <polygon points=\"{}\" fill=\"none\" stroke=\"var(--border)\"/>\n",
            polygon(std::iter::repeat(f).take(LearningStyle::ALL.len()))
        ));
    }

    for (i, style) in LearningStyle::ALL.iter().enumerate() {
        let (dx, dy) = axis(i);
        svg.push_str(&format!(
            "  <line x1=\"{center:.1}\" y1=\"{center:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"var(--border)\"/>\n",
            center + dx * RADAR_RADIUS,
            center + dy * RADAR_RADIUS
        ));
        let anchor = if dx > 0.5 {
            "start"
        } else if dx < -0.5 {
            "end"
        } else {
            "middle"
        };
        svg.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{:.1}\" font-size=\"13\" fill=\"currentColor\" text-anchor=\"{anchor}\" dominant-baseline=\"middle\">{} ({})</text>\n",
            center + dx * (RADAR_RADIUS + 12.0),
            center + dy * (RADAR_RADIUS + 14.0),
            style.title(),
            scores.get(*style)
        ));
    }

    svg.push_str(&format!(
        "  <polygon class=\"profile\" points=\"{}\" fill=\"#3b82f6\" fill-opacity=\"0.35\" stroke=\"#3b82f6\" stroke-width=\"2\"/>\n",
        polygon(LearningStyle::ALL.iter().map(|s| scores.get(*s) as f64 / max))
    ));

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --low: #dcfce7; --medium: #fef9c3; --high: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --low: #064e3b; --medium: #713f12; --high: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
.summary { font-size: 1.1rem; max-width: 60rem; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; vertical-align: top; }
th { background: var(--border); }
tr.primary { font-weight: bold; }
.low { background: var(--low); }
.medium { background: var(--medium); }
.high { background: var(--high); }
.badge { padding: 0.2rem 0.6rem; border-radius: 6px; font-weight: bold; }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; }
"#;
