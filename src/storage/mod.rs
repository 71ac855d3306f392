//!
//! dashauth storage module
//! -----------------------
//! This module implements the durable local key-value slot the session service
//! persists into. It is the crate's stand-in for the browser localStorage the
//! original dashboard wrote its token to: one JSON file (`local.json`) under a
//! configured data directory, loaded once at open and rewritten atomically on
//! every mutation.
//!
//! Key responsibilities:
//! - String key/value storage with write-through persistence.
//! - Crash-safe file replacement (temp file + rename).
//! - The fixed single-token session slot (`SessionStore`) layered on top.
//!
//! The public API centers around `LocalStore`, which clones cheaply (the map is
//! shared behind an `Arc`) so one handle can be held by service and tests alike.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use anyhow::Result;
use parking_lot::RwLock;
use tracing::debug;

/// Storage key for the current session token. Fixed by contract: the original
/// wrote `localStorage.setItem('auth_token', token)`.
pub const SESSION_TOKEN_KEY: &str = "auth_token";

/// File-backed string key-value store rooted at a data directory.
#[derive(Clone)]
pub struct LocalStore {
    dir: PathBuf,
    map: Arc<RwLock<BTreeMap<String, String>>>,
}

impl LocalStore {
    /// Open (or create) the store under `dir`, loading `local.json` if present.
    /// A missing or unreadable file yields an empty store rather than an error
    /// so a corrupted data directory never blocks startup.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        let file = dir.join("local.json");
        let map = match std::fs::read(&file) {
            Ok(bytes) => serde_json::from_slice::<BTreeMap<String, String>>(&bytes)
                .unwrap_or_else(|e| {
                    debug!("local store unreadable, starting empty: {}", e);
                    BTreeMap::new()
                }),
            Err(_) => BTreeMap::new(),
        };
        Ok(Self { dir, map: Arc::new(RwLock::new(map)) })
    }

    fn file_path(&self) -> PathBuf { self.dir.join("local.json") }

    pub fn get(&self, key: &str) -> Option<String> {
        self.map.read().get(key).cloned()
    }

    /// Set a key and persist the whole map. The map is small by construction
    /// (the dashboard only ever stored the session token) so a full rewrite per
    /// mutation is fine.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        {
            let mut w = self.map.write();
            w.insert(key.into(), value.into());
        }
        self.save()
    }

    /// Remove a key. Returns true if it existed. Persists either way so the
    /// on-disk file always matches memory.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let existed = self.map.write().remove(key).is_some();
        self.save()?;
        Ok(existed)
    }

    pub fn len(&self) -> usize { self.map.read().len() }
    pub fn is_empty(&self) -> bool { self.map.read().is_empty() }
    /// Return a snapshot of all keys in this store
    pub fn keys(&self) -> Vec<String> { self.map.read().keys().cloned().collect() }

    fn save(&self) -> Result<()> {
        let bytes = {
            let r = self.map.read();
            serde_json::to_vec_pretty(&*r)?
        };
        let tmp = self.file_path().with_extension("json.tmp");
        std::fs::write(&tmp, bytes)?;
        std::fs::rename(tmp, self.file_path())?;
        Ok(())
    }
}

/// The process-wide session slot: at most one current token, stored under
/// [`SESSION_TOKEN_KEY`].
#[derive(Clone)]
pub struct SessionStore {
    store: LocalStore,
}

impl SessionStore {
    pub fn new(store: LocalStore) -> Self { Self { store } }

    /// Persist the current session token, replacing any previous one.
    pub fn save(&self, token: &str) -> Result<()> {
        self.store.set(SESSION_TOKEN_KEY, token)
    }

    /// Read the stored token, if any.
    pub fn load(&self) -> Option<String> {
        self.store.get(SESSION_TOKEN_KEY)
    }

    /// Clear the slot. Idempotent: clearing an empty slot is a no-op.
    pub fn clear(&self) -> Result<()> {
        let _ = self.store.remove(SESSION_TOKEN_KEY)?;
        Ok(())
    }
}

#[cfg(test)]
mod storage_tests;
