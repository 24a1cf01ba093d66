//! LocalStorage store for web builds

use web_sys::Storage;

use super::{BEST_SCORE_KEY, ScoreStore, StoreError, parse_best};

#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<Storage, StoreError> {
        web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".into()))?
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".into()))
    }
}

impl ScoreStore for LocalStorageStore {
    fn load_best(&self) -> Result<u32, StoreError> {
        let raw = Self::storage()?
            .get_item(BEST_SCORE_KEY)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?;
        match raw {
            Some(raw) => parse_best(&raw),
            None => Ok(0),
        }
    }

    fn save_best(&mut self, best: u32) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(BEST_SCORE_KEY, &best.to_string())
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }
}
