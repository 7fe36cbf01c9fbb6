//! Picker core: dataset normalization, filtering, selection reconciliation and the
//! share-link codec, driven by a pure state machine.
mod dataset;
mod effect;
mod filter;
mod msg;
mod reconcile;
mod selection;
mod share_link;
mod state;
mod update;
mod view_model;

pub use dataset::{Dataset, IndustryRecord, RawRecord};
pub use effect::Effect;
pub use filter::{filter_matching, matches};
pub use msg::Msg;
pub use selection::{SelectionRow, SelectionState};
pub use share_link::{ShareLink, INDUSTRIES_KEY, NICHE_KEY_PREFIX};
pub use state::{AppState, CheckboxStore, NicheKey};
pub use update::update;
pub use view_model::{AppViewModel, IndustryPanelView, NicheRowView, EMPTY_SELECTION_NOTICE};
