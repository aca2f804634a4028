//! The `git default-branch` command.
//!
//! - `get` - Print the branch name new repositories will use (default)
//! - `set <name>` - Store a new default in global git config
//! - `suggestions` - List suggested names, marking the effective one

use crate::branch::SUGGESTED_BRANCH_NAMES;
use crate::feature::{DefaultBranchSetting, FeatureGate};
use crate::git::GitCommand;
use crate::logging::init_logging;
use crate::resolver::DefaultBranchResolver;
use crate::settings::{env, keys};
use crate::store::ConfigStore;
use crate::styles::{bold, def};
use crate::{check_dependencies, log_warning};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;

fn long_about() -> String {
    [
        "Resolve or change the branch name used when initializing new repositories.",
        "",
        "Commands:",
        &def("get", "Print the effective default branch (default)"),
        &def("set", "Store a default branch in global git config"),
        &def("suggestions", "List suggested branch names"),
        "",
        &format!(
            "The value is read from {} in global git config and falls back to {}.",
            bold(keys::INIT_DEFAULT_BRANCH),
            bold(crate::DEFAULT_BRANCH_IN_APP)
        ),
        &format!(
            "Set {}=off to ignore the configured value.",
            bold(env::DEFAULT_BRANCH_SETTING)
        ),
    ]
    .join("\n")
}

#[derive(Parser)]
#[command(name = "git-default-branch")]
#[command(version = crate::VERSION)]
#[command(about = "Resolve or change the default branch for new repositories")]
#[command(long_about = long_about())]
pub struct Args {
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        help = "Print debug information to stderr"
    )]
    verbose: bool,

    #[arg(
        long = "gitoxide",
        global = true,
        help = "Read git config with the experimental gitoxide backend"
    )]
    gitoxide: bool,

    #[command(subcommand)]
    command: Option<BranchCommand>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum BranchCommand {
    /// Print the branch name new repositories will use
    Get,

    /// Store the branch name new repositories will use
    Set {
        #[arg(help = "Branch name to use for new repositories")]
        name: String,
    },

    /// List suggested branch names
    Suggestions,
}

pub async fn run() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose);
    check_dependencies()?;

    let git = GitCommand::new().with_gitoxide(args.gitoxide);
    let resolver = DefaultBranchResolver::new(git, DefaultBranchSetting);
    let command = args.command.unwrap_or(BranchCommand::Get);

    let mut stdout = std::io::stdout();
    run_with_output(&command, &resolver, &mut stdout).await
}

/// Run `command` against `resolver`, writing results to `out`.
pub async fn run_with_output<S, G>(
    command: &BranchCommand,
    resolver: &DefaultBranchResolver<S, G>,
    out: &mut dyn Write,
) -> Result<()>
where
    S: ConfigStore,
    G: FeatureGate,
{
    match command {
        BranchCommand::Get => {
            let name = resolver.default_branch().await?;
            writeln!(out, "{name}").context("Failed to write output")?;
        }
        BranchCommand::Set { name } => {
            resolver
                .set_default_branch(name)
                .await
                .with_context(|| format!("Failed to set default branch to '{name}'"))?;
            if !resolver.gate().is_enabled() {
                log_warning!(
                    "{} is disabled; '{name}' will be used once it is enabled",
                    env::DEFAULT_BRANCH_SETTING
                );
            }
            writeln!(out, "Default branch for new repositories set to '{name}'")
                .context("Failed to write output")?;
        }
        BranchCommand::Suggestions => {
            let current = resolver.default_branch().await?;
            for name in SUGGESTED_BRANCH_NAMES {
                let marker = if *name == current { '*' } else { ' ' };
                writeln!(out, "{marker} {name}").context("Failed to write output")?;
            }
            if !crate::branch::is_suggested(&current) {
                writeln!(out, "* {current} (configured)").context("Failed to write output")?;
            }
        }
    }

    Ok(())
}
