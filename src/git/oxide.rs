//! Gitoxide-based config reads.
//!
//! Used by `GitCommand` when the gitoxide backend is enabled. gitoxide does
//! its file IO synchronously, so reads run on the blocking pool.

use crate::settings::env;
use anyhow::{Context, Result};
use gix::bstr::ByteSlice;
use std::path::PathBuf;

/// gitoxide equivalent of `git config --global --get <key>`
///
/// Reads `global_file` when given (mirroring `GIT_CONFIG_GLOBAL`), otherwise
/// the user's XDG config and `~/.gitconfig`. System config is never read.
pub async fn config_get_global(
    global_file: Option<PathBuf>,
    key: &str,
) -> Result<Option<String>> {
    let key = key.to_string();
    let files = match global_file {
        Some(path) => vec![path],
        None => user_config_files(),
    };
    tokio::task::spawn_blocking(move || read_files(&files, &key))
        .await
        .context("gitoxide config read task failed")?
}

/// Global-scope config files in the order git reads them, lowest precedence
/// first.
fn user_config_files() -> Vec<PathBuf> {
    let home = dirs::home_dir();
    let xdg = std::env::var_os(env::XDG_CONFIG_HOME)
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home.as_ref().map(|home| home.join(".config")));

    let mut files = Vec::new();
    if let Some(xdg) = xdg {
        files.push(xdg.join("git").join("config"));
    }
    if let Some(home) = home {
        files.push(home.join(".gitconfig"));
    }
    files
}

fn read_files(files: &[PathBuf], key: &str) -> Result<Option<String>> {
    let mut value = None;
    for path in files {
        // git treats a missing global file as empty config
        if !path.exists() {
            continue;
        }
        let source = gix::config::Source::User;
        let config = gix::config::File::from_path_no_includes(path.clone(), source)
            .with_context(|| format!("Failed to read git config file: {}", path.display()))?;
        if let Some(raw) = config.string(key) {
            let text = raw
                .to_str()
                .with_context(|| format!("Git config value for {key} is not valid UTF-8"))?;
            value = Some(text.trim().to_string());
        }
    }
    Ok(value)
}
