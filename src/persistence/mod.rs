//! Best-score persistence
//!
//! One integer under one key. Reads happen once at startup, writes once per
//! new record. Every failure here is recoverable: callers log and carry on.

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStorageStore;

use thiserror::Error;

/// Storage key for the best score
pub const BEST_SCORE_KEY: &str = "flappy_best";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored best score is corrupt: {0:?}")]
    Corrupt(String),
}

/// Where the best score lives between sessions
pub trait ScoreStore {
    /// Stored best, or 0 if nothing was stored yet
    fn load_best(&self) -> Result<u32, StoreError>;
    fn save_best(&mut self, best: u32) -> Result<(), StoreError>;
}

/// Parse a stored best score; blank means "never stored"
pub fn parse_best(raw: &str) -> Result<u32, StoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse::<u32>()
        .map_err(|_| StoreError::Corrupt(raw.to_string()))
}

/// In-memory store (tests, and a fallback when nothing else is available)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    best: Option<u32>,
    pub writes: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(best: u32) -> Self {
        Self {
            best: Some(best),
            writes: 0,
        }
    }

    pub fn stored(&self) -> Option<u32> {
        self.best
    }
}

impl ScoreStore for MemoryStore {
    fn load_best(&self) -> Result<u32, StoreError> {
        Ok(self.best.unwrap_or(0))
    }

    fn save_best(&mut self, best: u32) -> Result<(), StoreError> {
        self.best = Some(best);
        self.writes += 1;
        Ok(())
    }
}
