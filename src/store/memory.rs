use super::ConfigStore;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

/// In-process [`ConfigStore`] backed by a map.
///
/// Counts reads and writes, and can be told to fail either operation, which
/// makes it suitable for exercising callers without touching git.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
    reads: AtomicUsize,
    writes: AtomicUsize,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `key` with `value`.
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Make every `get` fail as if the backing tool were unavailable.
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Make every `set` fail as if the write were rejected.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Number of `get` calls made so far, including failed ones.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Number of `set` calls made so far, including failed ones.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Current value of `key`, without counting as a read.
    pub fn value(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}

#[async_trait]
impl ConfigStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads {
            return Err(anyhow!("Config store unavailable while reading '{key}'"));
        }
        let values = self
            .values
            .lock()
            .map_err(|_| anyhow!("Config store lock poisoned"))?;
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(anyhow!("Config store rejected write to '{key}'"));
        }
        let mut values = self
            .values
            .lock()
            .map_err(|_| anyhow!("Config store lock poisoned"))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("init.defaultBranch").await.unwrap(), None);
        assert_eq!(store.reads(), 1);
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let store = MemoryStore::new();
        store.set("init.defaultBranch", "trunk").await.unwrap();
        assert_eq!(
            store.get("init.defaultBranch").await.unwrap(),
            Some("trunk".to_string())
        );
        assert_eq!(store.writes(), 1);
    }

    #[tokio::test]
    async fn test_seeded_value() {
        let store = MemoryStore::new().with_value("init.defaultBranch", "develop");
        assert_eq!(
            store.value("init.defaultBranch"),
            Some("develop".to_string())
        );
        assert_eq!(store.reads(), 0);
    }

    #[tokio::test]
    async fn test_failing_reads() {
        let store = MemoryStore::new()
            .with_value("init.defaultBranch", "develop")
            .failing_reads();
        let err = store.get("init.defaultBranch").await.unwrap_err();
        assert!(err.to_string().contains("unavailable"));
    }

    #[tokio::test]
    async fn test_failing_writes_leave_value_untouched() {
        let store = MemoryStore::new()
            .with_value("init.defaultBranch", "develop")
            .failing_writes();
        assert!(store.set("init.defaultBranch", "trunk").await.is_err());
        assert_eq!(
            store.value("init.defaultBranch"),
            Some("develop".to_string())
        );
        assert_eq!(store.writes(), 1);
    }
}
