//! Resolve and override the branch name used when initializing new
//! repositories.
//!
//! The value lives under `init.defaultBranch` in git's global config. Reading
//! it is gated by a [`FeatureGate`]; when the gate is off, or nothing is
//! configured, [`DEFAULT_BRANCH_IN_APP`] is used.
//!
//! ```no_run
//! use default_branch::DefaultBranchResolver;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let resolver = DefaultBranchResolver::system();
//! resolver.set_default_branch("trunk").await?;
//! assert_eq!(resolver.default_branch().await?, "trunk");
//! # Ok(())
//! # }
//! ```

use anyhow::Result;
use which::which;

pub mod branch;
pub mod commands;
pub mod feature;
pub mod git;
pub mod logging;
pub mod resolver;
pub mod settings;
pub mod store;
pub mod styles;

pub use branch::{DEFAULT_BRANCH_IN_APP, DEFAULT_BRANCH_IN_GIT, SUGGESTED_BRANCH_NAMES};
pub use feature::{DefaultBranchSetting, FeatureGate};
pub use resolver::DefaultBranchResolver;
pub use store::{ConfigStore, MemoryStore};

/// Version string shown by `--version`, with the commit hash on dev builds.
pub const VERSION: &str = env!("DEFAULT_BRANCH_VERSION_DISPLAY");

pub fn check_dependencies() -> Result<()> {
    if which("git").is_err() {
        anyhow::bail!("Missing required dependency: git");
    }
    Ok(())
}
