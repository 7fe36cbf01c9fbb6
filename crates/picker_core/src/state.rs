use std::collections::BTreeMap;

use crate::reconcile::RenderPass;
use crate::view_model::AppViewModel;
use crate::ShareLink;

/// Composite key of one niche checkbox. Names are kept apart, so separator characters
/// inside names cannot collide.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NicheKey {
    pub industry: String,
    pub niche: String,
}

impl NicheKey {
    pub fn new(industry: impl Into<String>, niche: impl Into<String>) -> Self {
        Self {
            industry: industry.into(),
            niche: niche.into(),
        }
    }
}

/// Last resolved state of every niche checkbox that has been rendered in this session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckboxStore {
    states: BTreeMap<NicheKey, bool>,
}

impl CheckboxStore {
    pub fn get(&self, key: &NicheKey) -> Option<bool> {
        self.states.get(key).copied()
    }

    pub(crate) fn set(&mut self, key: NicheKey, checked: bool) {
        self.states.insert(key, checked);
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Widget values owned by one session and carried across render passes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct Widgets {
    pub industry_query: String,
    pub niche_query: String,
    /// Multi-select value. `None` until the first render pass applies the default.
    pub chosen_industries: Option<Vec<String>>,
    pub checkboxes: CheckboxStore,
    pub incoming: Option<ShareLink>,
}

/// One user session: widget state plus the output of the latest render pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub(crate) widgets: Widgets,
    pub(crate) pass: RenderPass,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::from_pass(
            &self.widgets.industry_query,
            &self.widgets.niche_query,
            &self.pass,
            self.dirty,
        )
    }

    pub fn checkboxes(&self) -> &CheckboxStore {
        &self.widgets.checkboxes
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn is_rendered_industry(&self, industry: &str) -> bool {
        self.pass.selected_industries.iter().any(|i| i == industry)
    }

    pub(crate) fn is_rendered_niche(&self, industry: &str, niche: &str) -> bool {
        self.pass
            .panels
            .iter()
            .find(|panel| panel.industry == industry)
            .is_some_and(|panel| panel.niches.iter().any(|row| row.niche == niche))
    }
}
