//! Plain-text report rendering.

use std::fmt::Write;

use super::catalog::Catalog;
use super::category::{Category, CategoryId};

/// First line of every report.
pub const REPORT_BANNER: &str = "AI Timetable Result";

/// Closing line of every report.
pub const TIP_LINE: &str =
    "Tip: You can ask for custom wake-up time or night shift in the next version.";

/// Render one titled section: title, dash underline, one line per slot.
///
/// Every line, including the last slot, ends with `\n`.
pub fn render_section(category: &Category) -> String {
    let mut out = String::new();
    out.push_str(category.title);
    out.push('\n');
    out.push_str(&"-".repeat(category.title.chars().count()));
    out.push('\n');
    for slot in &category.slots {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{slot}");
    }
    out
}

/// Render the full report for `prompt` using the built-in catalog.
pub fn render(prompt: &str, categories: &[CategoryId]) -> String {
    render_with(Catalog::builtin(), prompt, categories)
}

/// Render the full report against a specific catalog.
///
/// Sections appear in the order given and are separated by one blank
/// line. The prompt is echoed verbatim.
pub fn render_with(catalog: &Catalog, prompt: &str, categories: &[CategoryId]) -> String {
    if categories.is_empty() {
        tracing::warn!("rendering timetable report with no categories");
    }

    let sections: Vec<String> = categories
        .iter()
        .map(|id| render_section(catalog.category(*id)))
        .collect();

    let mut out = String::new();
    out.push_str(REPORT_BANNER);
    out.push('\n');
    let _ = writeln!(out, "Prompt: \"{prompt}\"");
    out.push('\n');
    out.push_str(&sections.join("\n"));
    out.push('\n');
    out.push_str(TIP_LINE);
    out
}
