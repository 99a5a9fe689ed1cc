//! Output formatting for scan reports
//!
//! Formats reports as JSON or Markdown. Human output is streamed by the
//! library while the log is scanned.

use petri_invariant::{ScanReport, PLACE_INVARIANT_TOTAL};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "markdown" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Unknown format: {}. Expected: human, json, markdown", s)),
        }
    }
}

/// Format as JSON
pub fn format_json(report: &ScanReport) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

/// Format as Markdown
pub fn format_markdown(report: &ScanReport) -> String {
    let mut md = String::new();

    md.push_str("# Place Invariant Report\n\n");
    md.push_str(&format!("**Log:** `{}`\n\n", report.log_path.display()));
    md.push_str(&format!("**SHA-256:** `{}`\n\n", report.sha256));

    md.push_str("## Summary\n\n");
    md.push_str(&format!(
        "- **Invariant:** P0 + P1 + P2 = {}\n",
        PLACE_INVARIANT_TOTAL
    ));
    md.push_str(&format!("- **Lines read:** {}\n", report.lines_read));
    md.push_str(&format!("- **Place-state lines:** {}\n", report.lines_matched));
    md.push_str(&format!("- **Violations:** {}\n\n", report.violations.len()));
    md.push_str(&format!("{}\n", report.summary()));

    if !report.violations.is_empty() {
        md.push_str("\n## Violations\n\n");
        md.push_str("| P0 | P1 | P2 | Sum | Line |\n");
        md.push_str("|----|----|----|-----|------|\n");
        for violation in &report.violations {
            md.push_str(&format!(
                "| {} | {} | {} | {} | `{}` |\n",
                violation.counts.p0,
                violation.counts.p1,
                violation.counts.p2,
                violation.sum,
                violation.line.replace('|', "\\|").replace('`', "'"),
            ));
        }
    }

    md
}
