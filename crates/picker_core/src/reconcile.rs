//! Render pass: merges search text, multi-select value, checkbox store, panel actions
//! and the incoming share link into one selection.

use picker_logging::picker_trace;

use crate::filter::{filter_matching, matches};
use crate::state::{NicheKey, Widgets};
use crate::view_model::{IndustryPanelView, NicheRowView};
use crate::{Dataset, SelectionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PanelActionKind {
    SelectAll,
    Clear,
}

/// A "Select all" or "Clear" button press for one industry panel, valid for one pass.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PanelAction<'a> {
    pub industry: &'a str,
    pub kind: PanelActionKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct RenderPass {
    pub visible_industries: Vec<String>,
    pub selected_industries: Vec<String>,
    pub panels: Vec<IndustryPanelView>,
    pub selections: SelectionState,
    pub total_niche_count: usize,
}

pub(crate) fn reconcile(
    dataset: &Dataset,
    widgets: &mut Widgets,
    action: Option<PanelAction<'_>>,
) -> RenderPass {
    let visible_industries: Vec<String> =
        filter_matching(&widgets.industry_query, dataset.industries())
            .into_iter()
            .map(ToOwned::to_owned)
            .collect();

    if widgets.chosen_industries.is_none() {
        widgets.chosen_industries = Some(default_industries(
            &visible_industries,
            widgets.incoming.as_ref(),
        ));
    }
    let selected_industries: Vec<String> = widgets
        .chosen_industries
        .iter()
        .flatten()
        .filter(|industry| visible_industries.contains(*industry))
        .cloned()
        .collect();

    let mut panels = Vec::with_capacity(selected_industries.len());
    let mut selections = SelectionState::new();
    let mut total_niche_count = 0;

    for industry in &selected_industries {
        let Some(all_niches) = dataset.niches(industry) else {
            continue;
        };
        let panel_action = action
            .filter(|a| a.industry == industry.as_str())
            .map(|a| a.kind);
        let link_niches = widgets
            .incoming
            .as_ref()
            .and_then(|link| link.niches_for(industry));

        let mut rows = Vec::new();
        for niche in all_niches
            .iter()
            .filter(|niche| matches(&widgets.niche_query, niche))
        {
            let key = NicheKey::new(industry.as_str(), niche.as_str());
            let checked = match (panel_action, widgets.checkboxes.get(&key), link_niches) {
                (Some(PanelActionKind::SelectAll), _, _) => true,
                (Some(PanelActionKind::Clear), _, _) => false,
                (None, None, Some(listed)) => listed.contains(niche),
                (None, stored, _) => stored.unwrap_or(false),
            };
            widgets.checkboxes.set(key, checked);

            if checked {
                selections.push(industry, niche);
                total_niche_count += 1;
            }
            rows.push(NicheRowView {
                niche: niche.clone(),
                checked,
            });
        }

        picker_trace!(
            "panel industry={} visible_niches={} checked={}",
            industry,
            rows.len(),
            selections.get(industry).map_or(0, <[String]>::len)
        );
        panels.push(IndustryPanelView {
            industry: industry.clone(),
            niches: rows,
        });
    }

    RenderPass {
        visible_industries,
        selected_industries,
        panels,
        selections,
        total_niche_count,
    }
}

fn default_industries(
    visible_industries: &[String],
    incoming: Option<&crate::ShareLink>,
) -> Vec<String> {
    match incoming {
        Some(link) if !link.industries.is_empty() => visible_industries
            .iter()
            .filter(|industry| link.industries.contains(*industry))
            .cloned()
            .collect(),
        _ => Vec::new(),
    }
}
