//! # Build Runner
//!
//! Runs the blog source's install/clean/build pipeline inside its checkout:
//! `npm i`, then `gulp clean`, then `npm run build`. The steps are not
//! parameterized; the toolchain is assumed present on the host. A non-zero
//! exit from any step aborts the run.

use std::path::Path;

use crate::error::Result;
use crate::process::{run_all, Invocation};

/// Plan the three build steps, in order.
pub fn build_plan(src_repo_path: &Path) -> Vec<Invocation> {
    vec![
        Invocation::in_dir("npm", &["i"], src_repo_path),
        Invocation::in_dir("gulp", &["clean"], src_repo_path),
        Invocation::in_dir("npm", &["run", "build"], src_repo_path),
    ]
}

/// Run the build pipeline inside the source checkout.
pub fn run_build(src_repo_path: &Path) -> Result<()> {
    log::info!("building in {}", src_repo_path.display());
    run_all(&build_plan(src_repo_path))
}
