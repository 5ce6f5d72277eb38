//! Rendering and JSON serialization for CLI output.

use std::{collections::BTreeMap, process::ExitCode};

use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL_CONDENSED};
use kwm_extract::{FieldSummary, KeywordReport, RankedKeyword};
use serde::Serialize;

/// Everything reported about one analyzed page.
#[derive(Serialize)]
pub struct PageAnalysis<'a> {
    /// Final URL or file path of the page.
    pub location: &'a str,
    /// Page title, if any.
    pub title: Option<&'a str>,
    /// Collected meta tags, sorted by name.
    pub meta_tags: &'a BTreeMap<String, String>,
    /// Ranked keywords.
    pub keywords: &'a [RankedKeyword],
    /// Per-field weights and key counts.
    pub fields: &'a [FieldSummary],
    /// Distinct keywords before the limit was applied.
    pub total_keys: usize,
}

impl<'a> PageAnalysis<'a> {
    /// Bundles page metadata with an analysis report.
    pub fn new(
        location: &'a str,
        title: Option<&'a str>,
        meta_tags: &'a BTreeMap<String, String>,
        report: &'a KeywordReport,
    ) -> Self {
        Self {
            location,
            title,
            meta_tags,
            keywords: &report.keywords,
            fields: &report.fields,
            total_keys: report.total_keys,
        }
    }
}

/// Prints the analysis as pretty JSON.
pub fn print_json(analysis: &PageAnalysis<'_>) -> ExitCode {
    match serde_json::to_string_pretty(analysis) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Renders the analysis as human-readable text.
///
/// Field summaries are included when `verbose` is non-zero.
pub fn render_text(analysis: &PageAnalysis<'_>, verbose: u8) -> String {
    let mut lines = vec![
        "[Title]".to_string(),
        format!("  {}", analysis.title.unwrap_or("(none)")),
        String::new(),
        "[Meta Tags]".to_string(),
    ];
    if analysis.meta_tags.is_empty() {
        lines.push("  (none)".to_string());
    }
    lines.extend(
        analysis
            .meta_tags
            .iter()
            .map(|(name, content)| format!("  {name}: {content}")),
    );
    lines.push(String::new());

    if verbose > 0 {
        lines.push("[Fields]".to_string());
        lines.extend(analysis.fields.iter().map(|summary| {
            format!(
                "  {} (weight {}): {} keys",
                summary.field, summary.weight, summary.keys
            )
        }));
        lines.push(String::new());
    }

    lines.push(format!(
        "[Keywords] {} of {}",
        analysis.keywords.len(),
        analysis.total_keys
    ));
    if analysis.keywords.is_empty() {
        lines.push("  (none)".to_string());
    } else {
        lines.push(keyword_table(analysis.keywords).to_string());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Builds the ranked keyword table.
fn keyword_table(keywords: &[RankedKeyword]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["#", "Keyword", "Score"]);
    for (rank, kw) in keywords.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1).set_alignment(CellAlignment::Right),
            Cell::new(&kw.keyword),
            Cell::new(kw.score).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}
