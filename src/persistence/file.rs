//! JSON file store for native builds
//!
//! The file holds a small JSON object so other keys can live beside the best
//! score. Writes go to a `.tmp` sibling first and are renamed into place.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::{BEST_SCORE_KEY, ScoreStore, StoreError};

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `FLAPPY_BEST_PATH` if set, otherwise a file in the OS temp dir
    pub fn default_location() -> Self {
        match std::env::var_os("FLAPPY_BEST_PATH") {
            Some(path) => Self::new(path),
            None => Self::new(std::env::temp_dir().join("flappy_best.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<Option<Map<String, Value>>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(map)) => Ok(Some(map)),
            _ => Err(StoreError::Corrupt(text)),
        }
    }
}

impl ScoreStore for FileStore {
    fn load_best(&self) -> Result<u32, StoreError> {
        let Some(map) = self.read_map()? else {
            return Ok(0);
        };
        match map.get(BEST_SCORE_KEY) {
            None | Some(Value::Null) => Ok(0),
            Some(Value::Number(n)) => n
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(|| StoreError::Corrupt(n.to_string())),
            Some(Value::String(s)) => super::parse_best(s),
            Some(other) => Err(StoreError::Corrupt(other.to_string())),
        }
    }

    fn save_best(&mut self, best: u32) -> Result<(), StoreError> {
        // A corrupt file is replaced rather than blocking the new record
        let mut map = self.read_map().ok().flatten().unwrap_or_default();
        map.insert(BEST_SCORE_KEY.to_string(), Value::from(best));

        let json = serde_json::to_string_pretty(&Value::Object(map))
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        log::debug!("Best score {} written to {}", best, self.path.display());
        Ok(())
    }
}
