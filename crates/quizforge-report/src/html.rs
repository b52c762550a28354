//! HTML report generator.
//!
//! Produces a self-contained HTML file with all CSS/JS inlined.

use anyhow::Result;
use std::path::Path;

use quizforge_core::report::{QuizReport, TrackReport};

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML report from a quiz report.
pub fn generate_html(report: &QuizReport) -> String {
    let tracks = [("Cognitive", &report.cognitive), ("Skills", &report.skills)];
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>quizforge results — {}</title>\n", report.id));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>quizforge results</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">Session <strong>{}</strong> | {} questions | {}</p>\n",
        report.id,
        report.cognitive.detailed_results.len() + report.skills.detailed_results.len(),
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Summary dashboard
    html.push_str("<section class=\"dashboard\">\n");
    html.push_str("<h2>Summary</h2>\n");
    html.push_str("<table class=\"summary\">\n");
    html.push_str("<thead><tr><th>Track</th><th>Score</th><th>Percentage</th><th>Feedback</th></tr></thead>\n");
    html.push_str("<tbody>\n");
    for (title, track) in &tracks {
        let percentage = track
            .percentage()
            .map(|p| format!("{p:.1}%"))
            .unwrap_or_else(|| "-".to_string());
        html.push_str(&format!(
            "<tr><td>{} ({})</td><td>{}/{}</td><td>{}</td><td>{}</td></tr>\n",
            title,
            track.track,
            track.score,
            track.total_possible,
            percentage,
            html_escape(&track.feedback),
        ));
    }
    html.push_str("</tbody></table>\n");
    html.push_str(&generate_bar_chart(&tracks));
    html.push_str("</section>\n");

    // Per-track detail
    for (idx, (title, track)) in tracks.iter().enumerate() {
        html.push_str(&generate_track_section(idx, title, track));
    }

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(report)
            .unwrap_or_default()
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    // JavaScript for sorting
    html.push_str("<script>\n");
    html.push_str(JS);
    html.push_str("</script>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &QuizReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

fn generate_track_section(idx: usize, title: &str, track: &TrackReport) -> String {
    let analysis = &track.analysis;
    let mut html = String::new();

    html.push_str("<section class=\"track\">\n");
    html.push_str(&format!("<h2>{title}</h2>\n"));
    html.push_str(&format!(
        "<p class=\"feedback\">{}</p>\n",
        html_escape(&track.feedback)
    ));

    html.push_str("<ul class=\"counts\">\n");
    html.push_str(&format!(
        "<li>Total questions: {}</li>\n",
        analysis.total_questions
    ));
    html.push_str(&format!(
        "<li>Correct answers: {}</li>\n",
        analysis.correct_answers
    ));
    html.push_str(&format!(
        "<li>Incorrect answers: {}</li>\n",
        analysis.incorrect_answers
    ));
    if let (Some(units), Some(score)) = (analysis.total_units, analysis.score) {
        html.push_str(&format!("<li>Total units: {units}</li>\n"));
        html.push_str(&format!("<li>Score: {score}</li>\n"));
    }
    html.push_str("</ul>\n");

    html.push_str(&question_list("Strengths", &analysis.strengths));
    html.push_str(&question_list("Weaknesses", &analysis.weaknesses));

    let table_id = format!("results-{idx}");
    html.push_str(&format!("<table class=\"results-table\" id=\"{table_id}\">\n"));
    html.push_str(&format!(
        "<thead><tr><th onclick=\"sortTable('{table_id}', 0)\">Question</th><th onclick=\"sortTable('{table_id}', 1)\">Answer</th><th onclick=\"sortTable('{table_id}', 2)\">Correct answer</th><th onclick=\"sortTable('{table_id}', 3)\">Difficulty</th></tr></thead>\n"
    ));
    html.push_str("<tbody>\n");
    for r in &track.detailed_results {
        let class = if r.is_correct { "pass" } else { "fail" };
        html.push_str(&format!(
            "<tr class=\"{}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            class,
            html_escape(&r.question),
            r.user_answer,
            html_escape(&r.correct_answer),
            r.difficulty
        ));
    }
    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");
    html
}

fn question_list(heading: &str, questions: &[String]) -> String {
    let mut html = format!("<h3>{heading}</h3>\n");
    if questions.is_empty() {
        html.push_str("<p class=\"meta\">None</p>\n");
        return html;
    }
    html.push_str("<ul>\n");
    for q in questions {
        html.push_str(&format!("<li>{}</li>\n", html_escape(q)));
    }
    html.push_str("</ul>\n");
    html
}

fn generate_bar_chart(tracks: &[(&str, &TrackReport)]) -> String {
    let bar_height = 30;
    let max_width = 400;
    let padding = 10;
    let label_width = 200;

    let total_height = tracks.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 60,
        total_height
    );

    for (i, (title, track)) in tracks.iter().enumerate() {
        let y = i * (bar_height + padding) + padding;
        let ratio = track.percentage().unwrap_or(0.0) / 100.0;
        let width = (ratio * max_width as f64) as usize;

        let color = if ratio >= 0.75 {
            "#22c55e"
        } else if ratio >= 0.5 {
            "#eab308"
        } else {
            "#ef4444"
        };

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            label_width - 10,
            y + bar_height / 2,
            html_escape(title)
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"4\"/>\n",
            label_width, y, width, bar_height, color
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{:.1}%</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
            ratio * 100.0
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --pass: #dcfce7; --fail: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --pass: #064e3b; --fail: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
.feedback { font-style: italic; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); cursor: pointer; }
.pass { background: var(--pass); }
.fail { background: var(--fail); }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; }
"#;

const JS: &str = r#"
function sortTable(id, col) {
  const table = document.getElementById(id);
  const tbody = table.querySelector('tbody');
  const rows = Array.from(tbody.querySelectorAll('tr'));
  const asc = table.dataset.sortCol == col && table.dataset.sortDir == 'asc' ? false : true;
  rows.sort((a, b) => {
    const va = a.cells[col].textContent;
    const vb = b.cells[col].textContent;
    return asc ? va.localeCompare(vb) : vb.localeCompare(va);
  });
  table.dataset.sortCol = col;
  table.dataset.sortDir = asc ? 'asc' : 'desc';
  rows.forEach(r => tbody.appendChild(r));
}
"#;
