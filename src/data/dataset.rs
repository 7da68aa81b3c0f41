//! Tarot dataset file: a top-level JSON array of card objects (data/tarot-data.json).
//! Records are kept as raw JSON objects so fields this crate never touches survive a
//! load/save cycle in their original key order.

use std::env;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_DATA_PATH: &str = "data/tarot-data.json";
pub const DATA_FILE_ENV: &str = "TAROT_DATA_FILE";
pub const UNNAMED_CARD: &str = "<unnamed>";

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("unable to read file: {0}")]
    Read(#[source] std::io::Error),
    #[error("unable to parse json: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("unexpected document shape: {0}")]
    Shape(String),
    #[error("unable to serialize dataset: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("unable to write file: {0}")]
    Write(#[source] std::io::Error),
}

/// Data file location: `TAROT_DATA_FILE` when set, else data/tarot-data.json under the
/// current working directory.
pub fn default_data_path() -> PathBuf {
    if let Ok(path) = env::var(DATA_FILE_ENV) {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }
    match env::current_dir() {
        Ok(cwd) => cwd.join(DEFAULT_DATA_PATH),
        Err(_) => PathBuf::from(DEFAULT_DATA_PATH),
    }
}

/// File name used in operator-facing messages.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn load_dataset(path: &Path) -> Result<Vec<Value>, DatasetError> {
    let raw = fs::read_to_string(path).map_err(DatasetError::Read)?;
    debug!(path = %path.display(), bytes = raw.len(), "read dataset");
    match serde_json::from_str(&raw).map_err(DatasetError::Parse)? {
        Value::Array(cards) => Ok(cards),
        other => Err(DatasetError::Shape(format!(
            "expected top-level JSON array, found {}",
            kind_of(&other)
        ))),
    }
}

/// Write the dataset as 2-space pretty JSON with non-ASCII text left unescaped.
/// The payload goes to a temporary file next to the resolved `path` and is renamed over
/// it, so a failed write leaves the previous file intact.
pub fn save_dataset(path: &Path, cards: &[Value]) -> Result<(), DatasetError> {
    let payload = serde_json::to_string_pretty(cards).map_err(DatasetError::Serialize)?;

    // Write through symlinks: the rename targets the file the link points at.
    let resolved = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let path = resolved.as_path();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(DatasetError::Write)?;
    tmp.write_all(payload.as_bytes()).map_err(DatasetError::Write)?;
    tmp.as_file().sync_all().map_err(DatasetError::Write)?;
    // Keep the original file's mode; temp files are created owner-only.
    if let Ok(meta) = fs::metadata(path) {
        fs::set_permissions(tmp.path(), meta.permissions()).map_err(DatasetError::Write)?;
    }
    debug!(tmp = %tmp.path().display(), target = %path.display(), "persisting dataset");
    tmp.persist(path).map_err(|err| DatasetError::Write(err.error))?;
    Ok(())
}

/// Card name for progress lines; non-string names are shown as their JSON text.
pub fn card_name(card: &Value) -> String {
    match card.get("name") {
        Some(Value::String(name)) => name.clone(),
        None | Some(Value::Null) => UNNAMED_CARD.to_string(),
        Some(other) => other.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
