// ABOUTME: Durable key-value store — synchronous string get/set backing the session state.
// ABOUTME: FileStore keeps one file per key with atomic tmp+rename writes; MemStore backs tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Synchronous string key-value storage, the session's only durable
/// collaborator. `get` of a missing key is `None`, never an error;
/// a present-but-malformed value is the caller's problem to recover.
pub trait Store {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// File-backed store: each key is a file under the store directory,
/// written atomically via tmp + rename so a crash mid-write never
/// leaves a truncated value behind.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: &Path) -> anyhow::Result<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        let path = self.key_path(key);
        let tmp_path = path.with_extension("tmp");
        std::fs::write(&tmp_path, value)?;
        std::fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemStore {
    values: HashMap<String, String>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Wrapper masking a single key: reads of it miss, writes to it are
/// discarded, and every other key passes through to the inner store.
/// Powers `--fresh`, which runs the session as if no history were
/// stored while leaving the durable history untouched.
pub struct EphemeralKey<S: Store> {
    inner: S,
    key: &'static str,
}

impl<S: Store> EphemeralKey<S> {
    pub fn new(inner: S, key: &'static str) -> Self {
        Self { inner, key }
    }

    /// Unwrap the inner store.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Store> Store for EphemeralKey<S> {
    fn get(&self, key: &str) -> Option<String> {
        if key == self.key {
            return None;
        }
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        if key == self.key {
            return Ok(());
        }
        self.inner.set(key, value)
    }
}

impl Store for Box<dyn Store> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        (**self).set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(tmp.path()).unwrap();

        store.set("eraai_theme", "light").unwrap();
        assert_eq!(store.get("eraai_theme"), Some("light".to_string()));
    }

    #[test]
    fn file_store_missing_key_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();
        assert_eq!(store.get("nope"), None);
    }

    #[test]
    fn file_store_set_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(tmp.path()).unwrap();

        store.set("k", "first").unwrap();
        store.set("k", "second").unwrap();
        assert_eq!(store.get("k"), Some("second".to_string()));
    }

    #[test]
    fn file_store_write_is_atomic() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(tmp.path()).unwrap();

        store.set("k", "value").unwrap();

        assert!(tmp.path().join("k").exists());
        assert!(
            !tmp.path().join("k.tmp").exists(),
            "tmp file should not survive a successful write"
        );
    }

    #[test]
    fn file_store_open_creates_missing_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");
        let mut store = FileStore::open(&nested).unwrap();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k"), Some("v".to_string()));
    }

    #[test]
    fn file_store_survives_reopen() {
        let tmp = tempfile::tempdir().unwrap();
        {
            let mut store = FileStore::open(tmp.path()).unwrap();
            store.set("eraai_preset", "glass").unwrap();
        }
        let store = FileStore::open(tmp.path()).unwrap();
        assert_eq!(store.get("eraai_preset"), Some("glass".to_string()));
    }

    #[test]
    fn mem_store_roundtrip() {
        let mut store = MemStore::new();
        assert_eq!(store.get("k"), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k"), Some("v".to_string()));
    }

    #[test]
    fn ephemeral_key_hides_existing_value() {
        let mut inner = MemStore::new();
        inner.set("masked", "stored").unwrap();
        inner.set("other", "visible").unwrap();

        let store = EphemeralKey::new(inner, "masked");
        assert_eq!(store.get("masked"), None);
        assert_eq!(store.get("other"), Some("visible".to_string()));
    }

    #[test]
    fn ephemeral_key_discards_writes_to_masked_key() {
        let mut inner = MemStore::new();
        inner.set("masked", "stored").unwrap();

        let mut store = EphemeralKey::new(inner, "masked");
        store.set("masked", "overwritten").unwrap();
        store.set("other", "kept").unwrap();

        let inner = store.into_inner();
        assert_eq!(inner.get("masked"), Some("stored".to_string()));
        assert_eq!(inner.get("other"), Some("kept".to_string()));
    }
}
