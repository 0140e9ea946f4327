//! # Git Operations
//!
//! All git interaction goes through the system `git` command, which
//! automatically handles:
//! - SSH keys from ~/.ssh/
//! - Git credential helpers
//! - Personal access tokens
//! - Any authentication configured in ~/.gitconfig
//!
//! Each operation is planned as an [`Invocation`] first, so the exact
//! argument vector can be asserted in tests, and executed with inherited
//! stdio second. `git commit -v` in the publish sequence relies on the
//! inherited stdio to open the operator's editor.
//!
//! Sync semantics per repository role:
//! - existing checkout → `git pull origin <branch>` inside it;
//! - absent checkout → `git clone` (the source pinned to its branch with
//!   `--branch posts --single-branch`, the destination a plain
//!   single-branch clone).
//!
//! A clone or pull failure is fatal and propagated; there is no retry and
//! no partial-state cleanup.

use std::path::Path;

use crate::defaults::{DEST_BRANCH, PUBLISH_DIRS, SOURCE_BRANCH};
use crate::error::Result;
use crate::process::Invocation;

/// Which of the two repositories an operation targets. Each role is tied to
/// a fixed branch: the blog source lives on `posts`, the published site on
/// `master`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoRole {
    Source,
    Destination,
}

impl RepoRole {
    /// The branch this role is tracked on.
    pub fn branch(self) -> &'static str {
        match self {
            RepoRole::Source => SOURCE_BRANCH,
            RepoRole::Destination => DEST_BRANCH,
        }
    }
}

fn git(args: Vec<String>, cwd: Option<&Path>) -> Invocation {
    Invocation {
        program: "git".to_string(),
        args,
        cwd: cwd.map(Path::to_path_buf),
    }
}

/// Plan the sync command for one repository: pull when the checkout already
/// exists at `local_path`, clone otherwise.
pub fn sync_plan(locator: &str, local_path: &Path, role: RepoRole) -> Invocation {
    if local_path.exists() {
        return git(
            vec![
                "pull".to_string(),
                "origin".to_string(),
                role.branch().to_string(),
            ],
            Some(local_path),
        );
    }

    let mut args = vec!["clone".to_string(), locator.to_string()];
    if role == RepoRole::Source {
        args.push("--branch".to_string());
        args.push(role.branch().to_string());
    }
    args.push("--single-branch".to_string());
    args.push(local_path.display().to_string());
    git(args, None)
}

/// Ensure a repository is present and current at `local_path`.
pub fn sync_repo(locator: &str, local_path: &Path, role: RepoRole) -> Result<()> {
    let plan = sync_plan(locator, local_path, role);
    log::info!("syncing {:?} repo: {}", role, plan.render());
    plan.run()
}

/// Plan `git status` inside a working tree.
pub fn status_plan(repo_path: &Path) -> Invocation {
    git(vec!["status".to_string()], Some(repo_path))
}

/// Plan the stage step of a publish: either the `posts`/`slides`
/// subdirectories only, or the whole working tree.
pub fn stage_plan(repo_path: &Path, all: bool) -> Invocation {
    let mut args = vec!["add".to_string()];
    if all {
        args.push(".".to_string());
    } else {
        args.extend(PUBLISH_DIRS.iter().map(|d| d.to_string()));
    }
    git(args, Some(repo_path))
}

/// Plan the interactive commit step. `-v` shows the staged diff in the
/// editor the way the tool has always done.
pub fn commit_plan(repo_path: &Path) -> Invocation {
    git(vec!["commit".to_string(), "-v".to_string()], Some(repo_path))
}

/// Plan the push of the destination branch.
pub fn push_plan(repo_path: &Path) -> Invocation {
    git(
        vec![
            "push".to_string(),
            "origin".to_string(),
            DEST_BRANCH.to_string(),
        ],
        Some(repo_path),
    )
}
