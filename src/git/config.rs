use super::oxide;
use super::GitCommand;
use anyhow::{Context, Result};

impl GitCommand {
    /// Get a git config value from global config only.
    ///
    /// A key that is not set yields `Ok(None)`. A missing `git` binary, an
    /// unreadable config file or any other non-zero exit is an error.
    pub async fn config_get_global(&self, key: &str) -> Result<Option<String>> {
        if self.use_gitoxide {
            return oxide::config_get_global(self.resolved_global_file(), key).await;
        }
        let output = self
            .git()
            .args(["config", "--global", "--get", key])
            .output()
            .await
            .context("Failed to execute git config command")?;

        if output.status.success() {
            let value = String::from_utf8(output.stdout)
                .context("Failed to parse git config output")?
                .trim()
                .to_string();
            return Ok(Some(value));
        }

        // Exit code 1 means the key was not found, which is not an error
        if output.status.code() == Some(1) {
            return Ok(None);
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("Git config --get {} failed: {}", key, stderr.trim());
    }

    /// Set a git config value in global config.
    pub async fn config_set_global(&self, key: &str, value: &str) -> Result<()> {
        let output = self
            .git()
            .args(["config", "--global", key, value])
            .output()
            .await
            .context("Failed to execute git config command")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("Git config failed: {}", stderr.trim());
        }

        Ok(())
    }
}
