//! Picker engine: dataset loading, export encoding and artifact persistence.
mod config;
mod export;
mod load;
mod persist;

pub use config::PickerConfig;
pub use config::{DEFAULT_CSV_FILENAME, DEFAULT_DATA_PATH, DEFAULT_JSON_FILENAME};
pub use export::{
    csv_artifact, json_artifact, selections_to_csv, selections_to_json, write_artifact, Artifact,
    ExportError, CSV_HEADER,
};
pub use load::{load_dataset, parse_dataset, LoadError};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
