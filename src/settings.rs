//! Git config keys and environment variables read by this crate.
//!
//! # Config Keys
//!
//! | Key | Scope | Description |
//! |-----|-------|-------------|
//! | `init.defaultBranch` | global | Branch name git uses for `git init` |
//!
//! # Environment
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `GIT_DEFAULT_BRANCH_SETTING` | enabled | Whether `init.defaultBranch` is consulted at all |
//! | `GIT_CONFIG_GLOBAL` | `~/.gitconfig` | Global config file, honoured by both read paths |
//! | `XDG_CONFIG_HOME` | `~/.config` | XDG global config directory, read before `~/.gitconfig` |
//!
//! # Example
//!
//! ```bash
//! # Use "trunk" for every new repository
//! git config --global init.defaultBranch trunk
//!
//! # Ignore the configured value and always use "main"
//! GIT_DEFAULT_BRANCH_SETTING=off git default-branch get
//! ```

/// Git config keys.
pub mod keys {
    /// Config key holding the branch name used for new repositories.
    pub const INIT_DEFAULT_BRANCH: &str = "init.defaultBranch";
}

/// Environment variables.
pub mod env {
    /// Toggles whether the configured default branch is honoured.
    pub const DEFAULT_BRANCH_SETTING: &str = "GIT_DEFAULT_BRANCH_SETTING";

    /// Overrides the location of git's global config file.
    pub const GIT_CONFIG_GLOBAL: &str = "GIT_CONFIG_GLOBAL";

    /// Base directory for the XDG-style global config, `$XDG_CONFIG_HOME/git/config`.
    pub const XDG_CONFIG_HOME: &str = "XDG_CONFIG_HOME";
}

/// Parse a git config boolean value.
///
/// Git accepts various boolean representations:
/// - true: `true`, `yes`, `on`, `1`
/// - false: `false`, `no`, `off`, `0`
///
/// Returns the default value if parsing fails.
pub fn parse_bool(value: &str, default: bool) -> bool {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => true,
        "false" | "no" | "off" | "0" => false,
        _ => default,
    }
}
