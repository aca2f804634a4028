//! Well-known branch names for newly initialized repositories.

/// The branch name git itself uses when `init.defaultBranch` is not set.
pub const DEFAULT_BRANCH_IN_GIT: &str = "master";

/// The branch name this tool falls back to when no override is configured.
pub const DEFAULT_BRANCH_IN_APP: &str = "main";

/// Branch names offered to a user picking a default, in display order.
pub const SUGGESTED_BRANCH_NAMES: &[&str] = &[DEFAULT_BRANCH_IN_APP, DEFAULT_BRANCH_IN_GIT];

/// Returns `true` if `name` is one of [`SUGGESTED_BRANCH_NAMES`].
pub fn is_suggested(name: &str) -> bool {
    SUGGESTED_BRANCH_NAMES.contains(&name)
}
