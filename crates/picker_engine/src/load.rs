use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use picker_core::{Dataset, RawRecord};
use picker_logging::{picker_debug, picker_info};
use serde_json::Value;
use thiserror::Error;

/// Startup failure: the dataset cannot be used at all.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("dataset is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("dataset must be a JSON array of records")]
    NotAnArray,
}

/// Reads and normalizes the dataset file.
pub fn load_dataset(path: &Path) -> Result<Dataset, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = parse_dataset(&text)?;
    picker_info!(
        "Loaded {} industries from {:?}",
        dataset.len(),
        path
    );
    Ok(dataset)
}

/// Parses dataset JSON. Individual malformed records are coerced or dropped, never errors.
pub fn parse_dataset(text: &str) -> Result<Dataset, LoadError> {
    let Value::Array(items) = serde_json::from_str::<Value>(text)? else {
        return Err(LoadError::NotAnArray);
    };
    let raw: Vec<RawRecord> = items.iter().filter_map(coerce_record).collect();
    let dataset = Dataset::normalize(raw);
    picker_debug!(
        "normalized {} raw records into {} industries",
        items.len(),
        dataset.len()
    );
    Ok(dataset)
}

fn coerce_record(value: &Value) -> Option<RawRecord> {
    let object = value.as_object()?;
    let industry = object
        .get("industry")
        .and_then(coerce_text)
        .unwrap_or_default();
    let niches = match object.get("niches") {
        Some(Value::Array(items)) => items.iter().filter_map(coerce_text).collect(),
        _ => Vec::new(),
    };
    Some(RawRecord { industry, niches })
}

fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_are_coerced_to_text() {
        let record = coerce_record(&serde_json::json!({
            "industry": 42,
            "niches": ["a", 7, true, null, ["nested"], {"k": "v"}]
        }))
        .unwrap();
        assert_eq!(record.industry, "42");
        assert_eq!(record.niches, vec!["a", "7", "true"]);
    }

    #[test]
    fn missing_or_wrong_typed_fields_become_empty() {
        let record = coerce_record(&serde_json::json!({"niches": "AI"})).unwrap();
        assert_eq!(record, RawRecord::default());
        assert!(coerce_record(&serde_json::json!("Tech")).is_none());
    }
}
