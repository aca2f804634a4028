//! Resolution and override of the default branch for new repositories.
//!
//! Resolution order:
//! 1. If the feature gate is off, [`DEFAULT_BRANCH_IN_APP`] (the store is not read)
//! 2. `init.defaultBranch` from the config store, if set and non-empty
//! 3. [`DEFAULT_BRANCH_IN_APP`]

use crate::branch::DEFAULT_BRANCH_IN_APP;
use crate::feature::{DefaultBranchSetting, FeatureGate};
use crate::git::GitCommand;
use crate::log_debug;
use crate::settings::keys;
use crate::store::ConfigStore;
use anyhow::Result;

pub struct DefaultBranchResolver<S, G> {
    store: S,
    gate: G,
}

impl DefaultBranchResolver<GitCommand, DefaultBranchSetting> {
    /// Resolver over the user's global git config, gated by
    /// `GIT_DEFAULT_BRANCH_SETTING`.
    pub fn system() -> Self {
        Self::new(GitCommand::new(), DefaultBranchSetting)
    }
}

impl<S: ConfigStore, G: FeatureGate> DefaultBranchResolver<S, G> {
    pub fn new(store: S, gate: G) -> Self {
        Self { store, gate }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn gate(&self) -> &G {
        &self.gate
    }

    /// The user's configured default branch, if the setting is enabled and a
    /// non-empty value is stored.
    pub async fn configured_default_branch(&self) -> Result<Option<String>> {
        if !self.gate.is_enabled() {
            log_debug!(
                "Default branch setting disabled, ignoring {}",
                keys::INIT_DEFAULT_BRANCH
            );
            return Ok(None);
        }

        let value = self.store.get(keys::INIT_DEFAULT_BRANCH).await?;
        Ok(value.filter(|name| !name.trim().is_empty()))
    }

    /// The branch name to use when creating a new repository.
    ///
    /// A key that is not set falls back to [`DEFAULT_BRANCH_IN_APP`]. Any
    /// other store failure is returned to the caller.
    pub async fn default_branch(&self) -> Result<String> {
        match self.configured_default_branch().await? {
            Some(name) => {
                log_debug!("Using {} = {name}", keys::INIT_DEFAULT_BRANCH);
                Ok(name)
            }
            None => {
                log_debug!("No configured default branch, using {DEFAULT_BRANCH_IN_APP}");
                Ok(DEFAULT_BRANCH_IN_APP.to_string())
            }
        }
    }

    /// Persist `name` as the default branch for new repositories.
    ///
    /// Not gated and not validated. Store failures are returned unchanged.
    pub async fn set_default_branch(&self, name: &str) -> Result<()> {
        log_debug!("Setting {} = {name}", keys::INIT_DEFAULT_BRANCH);
        self.store.set(keys::INIT_DEFAULT_BRANCH, name).await
    }
}
