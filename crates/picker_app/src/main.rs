//! Industry & Niche Picker: terminal front end.

use std::path::PathBuf;

use clap::Parser;

mod platform;

use platform::logging::LogDestination;

#[derive(Parser, Debug)]
#[command(
    name = "picker",
    version,
    about = "Filter and select industries and niches, then export or share the selection"
)]
struct Cli {
    /// JSON dataset: an array of {"industry": ..., "niches": [...]} records.
    #[arg(long, default_value = picker_engine::DEFAULT_DATA_PATH)]
    data: PathBuf,
    /// Share query string to start from, e.g. "?industries=Tech&n_Tech=AI".
    #[arg(long)]
    link: Option<String>,
    /// Directory receiving selections.json and selections.csv.
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,
    /// URL the share query string is appended to.
    #[arg(long, default_value = "")]
    base_url: String,
    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    log: LogDestination,
}

impl Cli {
    fn config(&self) -> picker_engine::PickerConfig {
        picker_engine::PickerConfig {
            data_path: self.data.clone(),
            output_dir: self.output_dir.clone(),
            base_url: self.base_url.clone(),
            ..picker_engine::PickerConfig::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    platform::logging::initialize(cli.log);
    platform::run_app(cli.config(), cli.link.as_deref())
}
