//! # Publish Prompt
//!
//! The only interactive piece of the pipeline. After the artifact copy the
//! operator gets a three-way numeric menu:
//!
//! 1. Upload changed files in posts/slides only.
//! 2. Upload all changed files.
//! 3. Abort and exit.
//!
//! The prompt layer validates the input before dispatch, so only `1`, `2`,
//! or `3` reaches the handler; anything else re-prompts. A defensive arm
//! still maps an unrecognized action value to an error and exit 1.
//!
//! The stage/commit/push sequence is the single place in the program with
//! local error recovery: a failure there is caught and logged, and the run
//! still completes with exit 0. The commit step is editor-driven
//! (`git commit -v` with inherited stdio).

use std::path::Path;

use dialoguer::{theme::ColorfulTheme, Input};

use crate::error::{Error, Result};
use crate::git;
use crate::paths::PathPlan;
use crate::process::{run_all, Invocation};

/// The three terminal choices of the publish menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stage only the `posts` and `slides` subdirectories, commit, push.
    PostsAndSlides,
    /// Stage the whole destination working tree, commit, push.
    All,
    /// No mutation; print confirmation and exit.
    Abort,
}

impl Action {
    /// Parse one line of operator input. Exactly `1`, `2`, or `3`.
    pub fn parse(input: &str) -> Option<Action> {
        match input.trim() {
            "1" => Some(Action::PostsAndSlides),
            "2" => Some(Action::All),
            "3" => Some(Action::Abort),
            _ => None,
        }
    }
}

/// Plan the full publish sequence against the destination checkout.
pub fn publish_plan(dest_repo_path: &Path, all: bool) -> Vec<Invocation> {
    vec![
        git::stage_plan(dest_repo_path, all),
        git::commit_plan(dest_repo_path),
        git::push_plan(dest_repo_path),
    ]
}

/// Run the stage/commit/push sequence, swallowing any failure.
///
/// This is deliberate, long-standing behavior: the operator has just watched
/// the git output directly, so the error is reported and the run still
/// finishes with exit 0.
pub fn upload_changes(dest_repo_path: &Path, all: bool) {
    if let Err(err) = run_all(&publish_plan(dest_repo_path, all)) {
        log::error!("publish failed: {}", err);
        eprintln!("Error: {}", err);
    }
}

/// Block on one validated line of operator input.
fn prompt_action() -> Result<Action> {
    println!("Choose the number of action to perform:");
    println!("1. Upload changed files in posts/slides only.");
    println!("2. Upload all changed files.");
    println!("3. Abort and exit.");

    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("action")
        .validate_with(|line: &String| -> std::result::Result<(), &str> {
            if Action::parse(line).is_some() {
                Ok(())
            } else {
                Err("Please choose action from 1 - 3.")
            }
        })
        .interact_text()?;

    // The validator already rejected anything unparseable; this arm only
    // fires if that invariant breaks.
    Action::parse(&input).ok_or(Error::UnknownAction { value: input })
}

/// The closing lines printed after every branch of the menu, abort and
/// caught publish failure included.
fn summary_lines(plan: &PathPlan) -> [String; 2] {
    [
        format!("Source folder = {}", plan.src_repo_path.display()),
        format!("Destination folder = {}", plan.dest_repo_path.display()),
    ]
}

/// Dispatch an already-validated action and print the resolved checkout
/// paths. Always returns `Ok`: a publish failure was swallowed by
/// [`upload_changes`], and abort performs no mutation, so every branch ends
/// the run with exit 0.
pub fn dispatch(action: Action, plan: &PathPlan) -> Result<()> {
    match action {
        Action::PostsAndSlides => {
            upload_changes(&plan.dest_repo_path, false);
            println!("Done!!");
        }
        Action::All => {
            upload_changes(&plan.dest_repo_path, true);
            println!("Done!!");
        }
        Action::Abort => {
            println!("Abort!!");
        }
    }

    for line in summary_lines(plan) {
        println!("{}", line);
    }
    Ok(())
}

/// Present the menu and dispatch the chosen action.
pub fn run_menu(plan: &PathPlan) -> Result<()> {
    dispatch(prompt_action()?, plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_action_parse_valid_inputs() {
        assert_eq!(Action::parse("1"), Some(Action::PostsAndSlides));
        assert_eq!(Action::parse("2"), Some(Action::All));
        assert_eq!(Action::parse("3"), Some(Action::Abort));
    }

    #[test]
    fn test_action_parse_trims_whitespace() {
        assert_eq!(Action::parse(" 2 "), Some(Action::All));
    }

    #[test]
    fn test_action_parse_rejects_out_of_range() {
        assert_eq!(Action::parse("0"), None);
        assert_eq!(Action::parse("4"), None);
        assert_eq!(Action::parse("12"), None);
        assert_eq!(Action::parse(""), None);
        assert_eq!(Action::parse("yes"), None);
    }

    #[test]
    fn test_publish_plan_posts_and_slides() {
        let plan = publish_plan(Path::new("/dest"), false);
        let rendered: Vec<String> = plan.iter().map(Invocation::render).collect();
        assert_eq!(
            rendered,
            ["git add posts slides", "git commit -v", "git push origin master"]
        );
    }

    #[test]
    fn test_publish_plan_all() {
        let plan = publish_plan(Path::new("/dest"), true);
        assert_eq!(plan[0].render(), "git add .");
    }

    #[test]
    fn test_upload_changes_swallows_failure() {
        // Staging inside an empty temp dir is not a git repo, so the
        // sequence fails; the failure is caught and the call returns.
        let dir = TempDir::new().unwrap();
        upload_changes(dir.path(), true);
    }

    fn plan_in(dir: &Path) -> PathPlan {
        PathPlan {
            temp_build_path: dir.to_path_buf(),
            src_repo_path: dir.join("blog.git"),
            dest_repo_path: dir.join("site.git"),
        }
    }

    #[test]
    fn test_dispatch_abort_returns_ok() {
        let dir = TempDir::new().unwrap();
        dispatch(Action::Abort, &plan_in(dir.path())).unwrap();
    }

    #[test]
    fn test_dispatch_returns_ok_after_publish_failure() {
        // The destination path is not a git repo, so both publishing
        // actions fail inside the stage/commit/push sequence; the failure
        // is swallowed and dispatch still reports success, which is what
        // keeps the process exit code at 0.
        let dir = TempDir::new().unwrap();
        dispatch(Action::PostsAndSlides, &plan_in(dir.path())).unwrap();
        dispatch(Action::All, &plan_in(dir.path())).unwrap();
    }

    #[test]
    fn test_summary_lines_name_both_checkouts() {
        let dir = TempDir::new().unwrap();
        let plan = plan_in(dir.path());
        let [src_line, dest_line] = summary_lines(&plan);
        assert_eq!(
            src_line,
            format!("Source folder = {}", plan.src_repo_path.display())
        );
        assert_eq!(
            dest_line,
            format!("Destination folder = {}", plan.dest_repo_path.display())
        );
    }
}
