use std::fmt::Write;

use picker_core::{AppViewModel, EMPTY_SELECTION_NOTICE};

const TITLE: &str = "Industry & Niche Picker";

/// Renders the whole form as text. Positions printed here are the ones commands refer to.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {TITLE} ==");
    let _ = writeln!(
        out,
        "Search industries: \"{}\"   Filter niches: \"{}\"",
        view.industry_query, view.niche_query
    );

    let _ = writeln!(out, "\n1) Choose industries");
    if view.visible_industries.is_empty() {
        let _ = writeln!(out, "   (no industries match)");
    }
    for (idx, industry) in view.visible_industries.iter().enumerate() {
        let mark = checkbox(view.selected_industries.contains(industry));
        let _ = writeln!(out, "   {mark} {}. {industry}", idx + 1);
    }

    for (panel_idx, panel) in view.panels.iter().enumerate() {
        let _ = writeln!(
            out,
            "\n2) Select niches for: {}  [panel {}]",
            panel.industry,
            panel_idx + 1
        );
        if panel.niches.is_empty() {
            let _ = writeln!(out, "   (no niches match the filter)");
        }
        for (idx, row) in panel.niches.iter().enumerate() {
            let _ = writeln!(out, "   {} {}. {}", checkbox(row.checked), idx + 1, row.niche);
        }
    }

    let _ = writeln!(out, "\nSelections summary");
    let _ = writeln!(out, "{}", view.summary_caption());
    if !view.has_exports() {
        let _ = writeln!(out, "{EMPTY_SELECTION_NOTICE}");
        return out;
    }

    let width = view
        .summary_rows
        .iter()
        .map(|row| row.industry.chars().count())
        .max()
        .unwrap_or(0)
        .max("industry".len());
    let _ = writeln!(out, "   {:<width$} | niche", "industry");
    for row in &view.summary_rows {
        let _ = writeln!(out, "   {:<width$} | {}", row.industry, row.niche);
    }
    let _ = writeln!(out, "Downloads: 'json' -> selections.json, 'csv' -> selections.csv");
    if let Some(share) = view.share_text() {
        let _ = writeln!(out, "Share this view (encodes current selections):\n   {share}");
    }
    out
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}
