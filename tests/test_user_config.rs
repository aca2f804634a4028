//! Global config lookup when `GIT_CONFIG_GLOBAL` is not set.
//!
//! These tests point `HOME` and `XDG_CONFIG_HOME` at temporary directories,
//! so they run serially and restore the environment afterwards.

use anyhow::Result;
use default_branch::git::GitCommand;
use serial_test::serial;
use std::ffi::OsString;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const KEY: &str = "init.defaultBranch";

const ISOLATED_VARS: [&str; 4] = [
    "HOME",
    "XDG_CONFIG_HOME",
    "GIT_CONFIG_GLOBAL",
    "GIT_CONFIG_SYSTEM",
];

/// Restores the variables in `ISOLATED_VARS` when dropped.
struct EnvGuard {
    saved: Vec<(&'static str, Option<OsString>)>,
}

impl EnvGuard {
    fn isolate(home: &Path) -> Self {
        let saved = ISOLATED_VARS
            .iter()
            .map(|name| (*name, std::env::var_os(name)))
            .collect();
        std::env::remove_var("GIT_CONFIG_GLOBAL");
        std::env::remove_var("GIT_CONFIG_SYSTEM");
        std::env::remove_var("XDG_CONFIG_HOME");
        std::env::set_var("HOME", home);
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (name, value) in &self.saved {
            match value {
                Some(value) => std::env::set_var(name, value),
                None => std::env::remove_var(name),
            }
        }
    }
}

async fn read_both(key: &str) -> Result<(Option<String>, Option<String>)> {
    let cli = GitCommand::new().config_get_global(key).await?;
    let oxide = GitCommand::new()
        .with_gitoxide(true)
        .config_get_global(key)
        .await?;
    Ok((cli, oxide))
}

#[tokio::test]
#[serial]
async fn test_system_config_is_ignored() -> Result<()> {
    let home = TempDir::new()?;
    let system = TempDir::new()?;
    let system_file = system.path().join("gitconfig");
    fs::write(&system_file, "[init]\n\tdefaultBranch = fromsystem\n")?;

    let _guard = EnvGuard::isolate(home.path());
    std::env::set_var("GIT_CONFIG_SYSTEM", &system_file);

    assert_eq!(read_both(KEY).await?, (None, None));
    Ok(())
}

#[tokio::test]
#[serial]
async fn test_home_gitconfig_overrides_xdg_config() -> Result<()> {
    let home = TempDir::new()?;
    let xdg_dir = home.path().join(".config").join("git");
    fs::create_dir_all(&xdg_dir)?;
    fs::write(
        xdg_dir.join("config"),
        "[init]\n\tdefaultBranch = fromxdg\n",
    )?;
    let _guard = EnvGuard::isolate(home.path());

    let expected = Some("fromxdg".to_string());
    assert_eq!(read_both(KEY).await?, (expected.clone(), expected));

    fs::write(
        home.path().join(".gitconfig"),
        "[init]\n\tdefaultBranch = fromhome\n",
    )?;
    let expected = Some("fromhome".to_string());
    assert_eq!(read_both(KEY).await?, (expected.clone(), expected));
    Ok(())
}

#[tokio::test]
#[serial]
async fn test_xdg_config_home_is_honoured() -> Result<()> {
    let home = TempDir::new()?;
    let xdg = TempDir::new()?;
    fs::create_dir_all(xdg.path().join("git"))?;
    fs::write(
        xdg.path().join("git").join("config"),
        "[init]\n\tdefaultBranch = trunk\n",
    )?;
    let _guard = EnvGuard::isolate(home.path());
    std::env::set_var("XDG_CONFIG_HOME", xdg.path());

    let expected = Some("trunk".to_string());
    assert_eq!(read_both(KEY).await?, (expected.clone(), expected));
    Ok(())
}

#[tokio::test]
#[serial]
async fn test_invalid_utf8_value_is_an_error_on_both_paths() -> Result<()> {
    let home = TempDir::new()?;
    fs::write(
        home.path().join(".gitconfig"),
        b"[init]\n\tdefaultBranch = \xffbad\n",
    )?;
    let _guard = EnvGuard::isolate(home.path());

    assert!(GitCommand::new().config_get_global(KEY).await.is_err());
    assert!(GitCommand::new()
        .with_gitoxide(true)
        .config_get_global(KEY)
        .await
        .is_err());
    Ok(())
}
