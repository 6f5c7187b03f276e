use std::fs;
use std::path::{Path, PathBuf};

use crate::pack::Pack;
use crate::{Error, Result};

/// Resolves pack names against a directory of JSON documents.
///
/// Documents are read fresh on every call; the store holds nothing
/// but the directory path, so clones are cheap and concurrent reads
/// need no coordination.
#[derive(Debug, Clone)]
pub struct PackStore {
    data_dir: PathBuf,
}

impl PackStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load one pack by name, case-insensitively.
    ///
    /// The name is lowercased and resolved to `<data_dir>/<name>.json`.
    /// Names that could climb out of the data directory are treated as
    /// absent.
    pub fn load(&self, name: &str) -> Result<Pack> {
        let normalized = name.to_lowercase();
        if normalized.is_empty()
            || normalized.contains(['/', '\\'])
            || normalized.contains("..")
        {
            return Err(Error::NotFound(name.to_string()));
        }
        let path = self.data_dir.join(format!("{normalized}.json"));
        if !path.exists() {
            return Err(Error::NotFound(name.to_string()));
        }
        let raw = fs::read_to_string(&path)?;
        let value: serde_json::Value = serde_json::from_str(&raw)?;
        Pack::from_value(&normalized, value)
    }

    /// Names of every pack currently on disk, sorted.
    ///
    /// Recomputed on every call; the directory listing is the catalog.
    pub fn catalog(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.data_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}
