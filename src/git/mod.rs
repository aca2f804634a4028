use crate::settings::env::GIT_CONFIG_GLOBAL;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tokio::process::Command;

mod config;
pub(crate) mod oxide;

static GITOXIDE_NOTICE: Once = Once::new();

/// Thin async wrapper around the `git` binary, scoped to global config.
#[derive(Debug, Clone, Default)]
pub struct GitCommand {
    pub(crate) use_gitoxide: bool,
    pub(crate) global_file: Option<PathBuf>,
}

impl GitCommand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read config natively via gitoxide instead of spawning `git`.
    /// Writes always go through the git CLI.
    pub fn with_gitoxide(mut self, enabled: bool) -> Self {
        self.use_gitoxide = enabled;
        if enabled {
            GITOXIDE_NOTICE.call_once(|| {
                crate::log_debug!("[experimental] Using gitoxide backend for config reads");
            });
        }
        self
    }

    /// Use `path` as the global config file instead of `~/.gitconfig`.
    pub fn with_global_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.global_file = Some(path.into());
        self
    }

    pub fn global_file(&self) -> Option<&Path> {
        self.global_file.as_deref()
    }

    /// The global config file git would use, if overridden explicitly or
    /// through `GIT_CONFIG_GLOBAL`. `None` means git's own discovery applies.
    pub(crate) fn resolved_global_file(&self) -> Option<PathBuf> {
        self.global_file
            .clone()
            .or_else(|| std::env::var_os(GIT_CONFIG_GLOBAL).map(PathBuf::from))
    }

    pub(crate) fn git(&self) -> Command {
        let mut cmd = Command::new("git");
        if let Some(path) = &self.global_file {
            cmd.env(GIT_CONFIG_GLOBAL, path);
        }
        cmd.kill_on_drop(true);
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_command_new() {
        let git = GitCommand::new();
        assert!(!git.use_gitoxide);
        assert!(git.global_file().is_none());
    }

    #[test]
    fn test_git_command_with_gitoxide() {
        let git = GitCommand::new().with_gitoxide(true);
        assert!(git.use_gitoxide);

        let git = GitCommand::new().with_gitoxide(false);
        assert!(!git.use_gitoxide);
    }

    #[test]
    fn test_explicit_global_file_wins() {
        let git = GitCommand::new().with_global_file("/tmp/custom-gitconfig");
        assert_eq!(
            git.resolved_global_file(),
            Some(PathBuf::from("/tmp/custom-gitconfig"))
        );
    }
}
