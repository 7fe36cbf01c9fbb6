use std::io;
use std::path::{Path, PathBuf};

use picker_core::SelectionState;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::persist::{AtomicFileWriter, PersistError};
use crate::PickerConfig;

pub const CSV_HEADER: [&str; 2] = ["industry", "niche"];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv encoding failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}

/// A downloadable file produced from the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// Serializes as a JSON object in accumulation order.
struct OrderedSelections<'a>(&'a SelectionState);

impl Serialize for OrderedSelections<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.industry_count()))?;
        for (industry, niches) in self.0.iter() {
            map.serialize_entry(industry, niches)?;
        }
        map.end()
    }
}

/// Pretty JSON (2-space indent), UTF-8, keys in selection order.
pub fn selections_to_json(selections: &SelectionState) -> Result<Vec<u8>, ExportError> {
    Ok(serde_json::to_vec_pretty(&OrderedSelections(selections))?)
}

/// `industry,niche` header followed by one row per checked niche.
pub fn selections_to_csv(selections: &SelectionState) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for row in selections.rows() {
        writer.write_record([row.industry.as_str(), row.niche.as_str()])?;
    }
    writer.into_inner().map_err(|e| ExportError::Io(e.into_error()))
}

pub fn json_artifact(
    selections: &SelectionState,
    config: &PickerConfig,
) -> Result<Artifact, ExportError> {
    Ok(Artifact {
        file_name: config.json_filename.clone(),
        mime: "application/json",
        bytes: selections_to_json(selections)?,
    })
}

pub fn csv_artifact(
    selections: &SelectionState,
    config: &PickerConfig,
) -> Result<Artifact, ExportError> {
    Ok(Artifact {
        file_name: config.csv_filename.clone(),
        mime: "text/csv",
        bytes: selections_to_csv(selections)?,
    })
}

/// Writes an artifact into `output_dir`, replacing any previous download of the same name.
pub fn write_artifact(output_dir: &Path, artifact: &Artifact) -> Result<PathBuf, ExportError> {
    let writer = AtomicFileWriter::new(output_dir.to_path_buf());
    Ok(writer.write(&artifact.file_name, &artifact.bytes)?)
}
