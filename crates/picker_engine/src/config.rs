use std::path::PathBuf;

pub const DEFAULT_DATA_PATH: &str = "data.json";
pub const DEFAULT_JSON_FILENAME: &str = "selections.json";
pub const DEFAULT_CSV_FILENAME: &str = "selections.csv";

/// Runtime settings for one picker process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerConfig {
    /// JSON dataset read once at startup.
    pub data_path: PathBuf,
    /// Directory receiving downloaded artifacts.
    pub output_dir: PathBuf,
    /// Prefix of the shareable URL; the query string is appended after `?`.
    pub base_url: String,
    pub json_filename: String,
    pub csv_filename: String,
}

impl PickerConfig {
    pub fn default_with_output(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            ..Self::default()
        }
    }

    /// Full shareable URL for a query string.
    pub fn share_url(&self, query: &str) -> String {
        format!("{}?{}", self.base_url, query)
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            output_dir: PathBuf::from("output"),
            base_url: String::new(),
            json_filename: DEFAULT_JSON_FILENAME.to_string(),
            csv_filename: DEFAULT_CSV_FILENAME.to_string(),
        }
    }
}
