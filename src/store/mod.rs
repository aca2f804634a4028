//! Key/value configuration stores.
//!
//! [`ConfigStore`] is the seam between branch resolution and wherever the
//! value actually lives. The production store is git's global config,
//! driven through [`GitCommand`]; [`MemoryStore`] keeps everything in process.

mod memory;

pub use memory::MemoryStore;

use crate::git::GitCommand;
use anyhow::Result;
use async_trait::async_trait;

/// A user-level key/value configuration store.
///
/// `get` distinguishes "not set" (`Ok(None)`) from a store that could not be
/// read (`Err`). Implementations do not retry.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

#[async_trait]
impl ConfigStore for GitCommand {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.config_get_global(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.config_set_global(key, value).await
    }
}
