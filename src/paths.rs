//! # Path Planning
//!
//! Pure derivation of every directory the run touches from the resolved
//! configuration. No I/O happens here.
//!
//! The checkout path for each repository is the build root joined with the
//! literal basename of the locator, extension included, so
//! `https://host/org/repo.git` checks out under `<build root>/repo.git`.

use std::path::{Path, PathBuf};

use crate::config::ResolvedConfig;
use crate::defaults::BUILD_DIR_NAME;

/// The directory layout for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPlan {
    /// `<temp_path>/svs-uploader-build`; both checkouts live under it.
    pub temp_build_path: PathBuf,
    /// Local checkout of the blog source repository.
    pub src_repo_path: PathBuf,
    /// Local checkout of the published site repository.
    pub dest_repo_path: PathBuf,
}

impl PathPlan {
    /// Derive the layout from a resolved configuration.
    pub fn derive(config: &ResolvedConfig) -> Self {
        let temp_build_path = Path::new(&config.temp_path).join(BUILD_DIR_NAME);
        let src_repo_path = temp_build_path.join(basename(&config.src_repo));
        let dest_repo_path = temp_build_path.join(basename(&config.dest_repo));

        Self {
            temp_build_path,
            src_repo_path,
            dest_repo_path,
        }
    }
}

/// Last path component of a repository locator, taken literally.
fn basename(locator: &str) -> PathBuf {
    Path::new(locator)
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(locator))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(temp: &str, src: &str, dest: &str) -> ResolvedConfig {
        ResolvedConfig {
            temp_path: temp.to_string(),
            src_repo: src.to_string(),
            dest_repo: dest.to_string(),
        }
    }

    #[test]
    fn test_basename_keeps_extension() {
        assert_eq!(
            basename("https://host/org/repo.git"),
            PathBuf::from("repo.git")
        );
    }

    #[test]
    fn test_basename_of_local_path() {
        assert_eq!(basename("/home/user/blog"), PathBuf::from("blog"));
    }

    #[test]
    fn test_derive_url_locators() {
        let plan = PathPlan::derive(&resolved(
            "/tmp",
            "https://host/org/repo.git",
            "https://host/org/site.git",
        ));
        assert_eq!(plan.temp_build_path, PathBuf::from("/tmp/svs-uploader-build"));
        assert_eq!(
            plan.src_repo_path,
            PathBuf::from("/tmp/svs-uploader-build/repo.git")
        );
        assert_eq!(
            plan.dest_repo_path,
            PathBuf::from("/tmp/svs-uploader-build/site.git")
        );
    }

    #[test]
    fn test_derive_relative_temp_root() {
        let plan = PathPlan::derive(&resolved("./temp", "a.git", "b.git"));
        assert_eq!(
            plan.temp_build_path,
            PathBuf::from("./temp/svs-uploader-build")
        );
        assert_eq!(
            plan.src_repo_path,
            PathBuf::from("./temp/svs-uploader-build/a.git")
        );
    }

    #[test]
    fn test_derive_is_deterministic() {
        let config = resolved("/tmp", "x.git", "y.git");
        assert_eq!(PathPlan::derive(&config), PathPlan::derive(&config));
    }
}
