/// git-default-branch - choose the branch name for new repositories
///
/// Installed on PATH, git picks it up as `git default-branch`.
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    default_branch::commands::run().await
}
