use crate::SelectionState;

/// Side effects requested by [`crate::update`]; executed by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Offer `selections.json` for download.
    DownloadJson { selections: SelectionState },
    /// Offer `selections.csv` for download.
    DownloadCsv { selections: SelectionState },
    /// Replace the location's query string (without the leading `?`).
    SetLocation { query: String },
}
