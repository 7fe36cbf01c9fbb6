use crate::ShareLink;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Page opened, optionally with a share link in its query string. Starts from
    /// fresh widget state.
    PageLoaded { link: Option<ShareLink> },
    /// User edited the industry search box.
    IndustryQueryChanged(String),
    /// User edited the niche filter box.
    NicheQueryChanged(String),
    /// User replaced the multi-select value.
    IndustriesChosen(Vec<String>),
    /// User added or removed one industry in the multi-select.
    IndustryToggled { industry: String, selected: bool },
    /// User clicked "Select all" in an industry panel.
    SelectAllClicked { industry: String },
    /// User clicked "Clear" in an industry panel.
    ClearClicked { industry: String },
    /// User checked or unchecked one niche.
    NicheToggled {
        industry: String,
        niche: String,
        checked: bool,
    },
    /// User clicked "Download JSON".
    DownloadJsonClicked,
    /// User clicked "Download CSV".
    DownloadCsvClicked,
    /// User clicked "Update URL with selections".
    UpdateUrlClicked,
    /// Fallback for placeholder wiring.
    NoOp,
}
