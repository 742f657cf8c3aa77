use crate::analyze::SpilloverReason;
use crate::report::PivotTable;

pub const CHART_TITLE: &str = "Spillover Reasons by Assignee";
const BAR_WIDTH: usize = 50;
const GLYPHS: [char; 5] = ['█', '▓', '▒', '░', '#'];

fn glyph(reason: SpilloverReason) -> char {
    GLYPHS[reason as usize % GLYPHS.len()]
}

/// Renders the pivot as a horizontal stacked bar chart, one bar per assignee.
///
/// Bars are scaled so the largest total fills [`BAR_WIDTH`] cells; segment
/// ends are rounded on the running total so a bar never drifts past its size.
pub fn render_stacked_bars(pivot: &PivotTable) -> String {
    let mut out = String::new();
    out.push_str(&format!("{CHART_TITLE}\n"));
    if pivot.is_empty() {
        out.push_str("(no spilled issues)\n");
        return out;
    }

    let max_total = pivot.max_total().max(1);
    let label_width = pivot
        .rows
        .keys()
        .map(|assignee| assignee.chars().count())
        .max()
        .unwrap_or(0);

    for (assignee, cells) in &pivot.rows {
        let mut bar = String::with_capacity(BAR_WIDTH * 3);
        let mut running = 0;
        let mut drawn = 0;
        for (reason, count) in pivot.reasons.iter().zip(cells) {
            running += count;
            let end = (running * BAR_WIDTH + max_total / 2) / max_total;
            bar.extend(std::iter::repeat(glyph(*reason)).take(end - drawn));
            drawn = end;
        }
        let total: usize = cells.iter().sum();
        out.push_str(&format!(
            "{assignee:<label_width$} │{bar:<BAR_WIDTH$}│ {total}\n"
        ));
    }

    let legend = pivot
        .reasons
        .iter()
        .map(|reason| format!("{} {}", glyph(*reason), reason))
        .collect::<Vec<_>>()
        .join("   ");
    out.push_str(&format!("{legend}\n"));
    out
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
