use crate::reconcile::RenderPass;
use crate::{SelectionRow, SelectionState, ShareLink};

pub const EMPTY_SELECTION_NOTICE: &str = "No selections yet. Pick at least one industry to begin.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub industry_query: String,
    pub niche_query: String,
    /// Multi-select options.
    pub visible_industries: Vec<String>,
    /// Multi-select value, constrained to the visible options.
    pub selected_industries: Vec<String>,
    pub panels: Vec<IndustryPanelView>,
    pub selections: SelectionState,
    pub summary_rows: Vec<SelectionRow>,
    pub total_niche_count: usize,
    /// Share query string without the leading `?`; `None` when nothing is selected.
    pub share_query: Option<String>,
    pub dirty: bool,
}

/// Expandable panel for one selected industry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndustryPanelView {
    pub industry: String,
    /// Niches visible under the current filter, ascending.
    pub niches: Vec<NicheRowView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NicheRowView {
    pub niche: String,
    pub checked: bool,
}

impl AppViewModel {
    pub(crate) fn from_pass(
        industry_query: &str,
        niche_query: &str,
        pass: &RenderPass,
        dirty: bool,
    ) -> Self {
        let share_query = (!pass.selections.is_empty()).then(|| {
            ShareLink::from_selection(&pass.selected_industries, &pass.selections)
                .to_query_string()
        });
        Self {
            industry_query: industry_query.to_owned(),
            niche_query: niche_query.to_owned(),
            visible_industries: pass.visible_industries.clone(),
            selected_industries: pass.selected_industries.clone(),
            panels: pass.panels.clone(),
            selections: pass.selections.clone(),
            summary_rows: pass.selections.rows(),
            total_niche_count: pass.total_niche_count,
            share_query,
            dirty,
        }
    }

    /// Exports are offered only once at least one niche is checked.
    pub fn has_exports(&self) -> bool {
        !self.selections.is_empty()
    }

    /// Caption above the summary table.
    pub fn summary_caption(&self) -> String {
        format!(
            "{} industries • {} niches",
            self.selections.industry_count(),
            self.total_niche_count
        )
    }

    pub fn share_text(&self) -> Option<String> {
        self.share_query.as_ref().map(|query| format!("?{query}"))
    }
}
