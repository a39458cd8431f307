//! Text summary of aggregated stamps for terminal output.

use crate::aggregator::{calculate_distribution, top_groups};
use crate::catalog::StampCatalog;
use crate::stamp::AggregatedStamp;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Render a table of the most used stamps
///
/// **Public** - used by the aggregate command's `--summary`
///
/// # Arguments
/// * `groups` - Output of `aggregate`
/// * `catalog` - Glyphs and labels to display
/// * `max_lines` - Number of groups to list
pub fn render_summary(groups: &[AggregatedStamp], catalog: &StampCatalog, max_lines: usize) -> String {
    let dist = calculate_distribution(groups);
    let total = dist.total_stamps.max(1);
    let mut lines = Vec::new();

    lines.push("  STAMPS".to_string());
    lines.push(format!("  ┏{}┳{}┳{}┳{}┓", "━".repeat(28), "━".repeat(8), "━".repeat(10), "━".repeat(9)));
    lines.push(format!(
        "  ┃ {:<26} ┃ {:>6} ┃ {:>8} ┃ {:>7} ┃",
        "Stamp", "Count", "Reactors", "%"
    ));
    lines.push(format!("  ┣{}╋{}╋{}╋{}┫", "━".repeat(28), "━".repeat(8), "━".repeat(10), "━".repeat(9)));

    for group in top_groups(groups, max_lines) {
        let percentage = (group.count as f64 / total as f64) * 100.0;
        let name = format!(
            "{} {} ({})",
            catalog.display_glyph(group),
            catalog.display_label(group),
            group.kind
        );

        lines.push(format!(
            "  ┃ {} ┃ {:>6} ┃ {:>8} ┃ {:>6.1}% ┃",
            pad_display(&name, 26),
            group.count,
            group.reactors().len(),
            percentage
        ));
    }

    lines.push(format!("  ┗{}┻{}┻{}┻{}┛", "━".repeat(28), "━".repeat(8), "━".repeat(10), "━".repeat(9)));
    lines.push(format!("  {}", dist.summary()));

    lines.join("\n")
}

/// Pad or truncate to a fixed number of terminal columns
///
/// **Private** - emoji and kana take two columns each
fn pad_display(text: &str, width: usize) -> String {
    if text.width() <= width {
        return format!("{}{}", text, " ".repeat(width - text.width()));
    }

    let budget = width.saturating_sub(3);
    let mut truncated = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        truncated.push(c);
        used += w;
    }

    let dots = ".".repeat(width.min(3));
    let padding = " ".repeat(width - used - dots.len());
    format!("{}{}{}", truncated, padding, dots)
}
