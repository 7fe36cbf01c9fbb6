use picker_logging::{picker_debug, picker_trace};

use crate::reconcile::{reconcile, PanelAction, PanelActionKind};
use crate::state::{NicheKey, Widgets};
use crate::{AppState, Dataset, Effect, Msg, ShareLink};

/// Pure update function: applies a message to state and returns any effects.
///
/// Every accepted interaction runs a full render pass against `dataset`. Interactions
/// aimed at widgets that the last pass did not render are ignored.
pub fn update(mut state: AppState, dataset: &Dataset, msg: Msg) -> (AppState, Vec<Effect>) {
    picker_trace!("update msg={:?}", msg);
    let effects = match msg {
        Msg::PageLoaded { link } => {
            state.widgets = Widgets {
                incoming: link.filter(|l| !l.is_empty()),
                ..Widgets::default()
            };
            rerender(&mut state, dataset, None);
            Vec::new()
        }
        Msg::IndustryQueryChanged(text) => {
            if text == state.widgets.industry_query {
                return (state, Vec::new());
            }
            state.widgets.industry_query = text;
            rerender(&mut state, dataset, None);
            Vec::new()
        }
        Msg::NicheQueryChanged(text) => {
            if text == state.widgets.niche_query {
                return (state, Vec::new());
            }
            state.widgets.niche_query = text;
            rerender(&mut state, dataset, None);
            Vec::new()
        }
        Msg::IndustriesChosen(industries) => {
            let visible = &state.pass.visible_industries;
            let mut chosen: Vec<String> = Vec::with_capacity(industries.len());
            for industry in industries {
                if visible.contains(&industry) && !chosen.contains(&industry) {
                    chosen.push(industry);
                }
            }
            // Choices hidden by the industry search are not part of the widget's value.
            let hidden = state
                .widgets
                .chosen_industries
                .iter()
                .flatten()
                .filter(|industry| !visible.contains(*industry))
                .cloned()
                .collect::<Vec<_>>();
            chosen.extend(hidden);
            state.widgets.chosen_industries = Some(chosen);
            rerender(&mut state, dataset, None);
            Vec::new()
        }
        Msg::IndustryToggled { industry, selected } => {
            let visible = state.pass.visible_industries.contains(&industry);
            let chosen = state.widgets.chosen_industries.get_or_insert_with(Vec::new);
            let already = chosen.contains(&industry);
            match (selected, visible, already) {
                (true, true, false) => chosen.push(industry),
                (false, true, true) => chosen.retain(|i| *i != industry),
                _ => {
                    picker_debug!(
                        "ignoring toggle industry={} selected={} visible={}",
                        industry,
                        selected,
                        visible
                    );
                    return (state, Vec::new());
                }
            }
            rerender(&mut state, dataset, None);
            Vec::new()
        }
        Msg::SelectAllClicked { industry } => {
            panel_action(&mut state, dataset, &industry, PanelActionKind::SelectAll);
            Vec::new()
        }
        Msg::ClearClicked { industry } => {
            panel_action(&mut state, dataset, &industry, PanelActionKind::Clear);
            Vec::new()
        }
        Msg::NicheToggled {
            industry,
            niche,
            checked,
        } => {
            if !state.is_rendered_niche(&industry, &niche) {
                picker_debug!("ignoring toggle of hidden niche {}/{}", industry, niche);
                return (state, Vec::new());
            }
            state
                .widgets
                .checkboxes
                .set(NicheKey::new(industry, niche), checked);
            rerender(&mut state, dataset, None);
            Vec::new()
        }
        Msg::DownloadJsonClicked => match selections_for_export(&state) {
            Some(selections) => vec![Effect::DownloadJson { selections }],
            None => Vec::new(),
        },
        Msg::DownloadCsvClicked => match selections_for_export(&state) {
            Some(selections) => vec![Effect::DownloadCsv { selections }],
            None => Vec::new(),
        },
        Msg::UpdateUrlClicked => match selections_for_export(&state) {
            Some(selections) => {
                let link = ShareLink::from_selection(&state.pass.selected_industries, &selections);
                vec![Effect::SetLocation {
                    query: link.to_query_string(),
                }]
            }
            None => Vec::new(),
        },
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn panel_action(state: &mut AppState, dataset: &Dataset, industry: &str, kind: PanelActionKind) {
    if !state.is_rendered_industry(industry) {
        picker_debug!("ignoring {:?} for unselected industry {}", kind, industry);
        return;
    }
    rerender(state, dataset, Some(PanelAction { industry, kind }));
}

fn rerender(state: &mut AppState, dataset: &Dataset, action: Option<PanelAction<'_>>) {
    state.pass = reconcile(dataset, &mut state.widgets, action);
    picker_debug!(
        "render pass: visible={} selected={} industries_with_niches={} niches={}",
        state.pass.visible_industries.len(),
        state.pass.selected_industries.len(),
        state.pass.selections.industry_count(),
        state.pass.total_niche_count
    );
    state.mark_dirty();
}

fn selections_for_export(state: &AppState) -> Option<crate::SelectionState> {
    let selections = &state.pass.selections;
    (!selections.is_empty()).then(|| selections.clone())
}
