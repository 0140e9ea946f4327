//! # Configuration Resolution
//!
//! This module defines the single `Configuration` record the whole run is
//! driven by, and the logic that resolves it from three layers:
//!
//! 1. Hardcoded defaults ([`crate::defaults`]).
//! 2. Command-line flags, applied on top of the defaults to seed the record.
//! 3. An optional JSON config file (default
//!    `./.svs-blog-uploader-config.json`), overlaid last.
//!
//! The overlay order means a value present in the config file wins over a
//! value seeded from a flag; flags are not re-applied after the file is
//! merged. Unknown keys in the file are ignored silently.
//!
//! Once [`Config::resolve`] succeeds the record is immutable for the rest of
//! the run. Resolution fails before any side effect if either repository
//! locator is still missing after the merge.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::defaults::DEFAULT_TEMP_PATH;
use crate::error::{Error, Result};

/// The merged, not-yet-validated configuration record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Temp root under which the build directory is created.
    pub temp_path: String,
    /// Locator (URL or path) of the blog source repository.
    pub src_repo: Option<String>,
    /// Locator (URL or path) of the published site repository.
    pub dest_repo: Option<String>,
}

/// The keys the config file may carry. All optional; anything else in the
/// file is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileConfig {
    temp_path: Option<String>,
    src_repo: Option<String>,
    dest_repo: Option<String>,
}

/// A fully resolved configuration: both repository locators are known to be
/// present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub temp_path: String,
    pub src_repo: String,
    pub dest_repo: String,
}

impl Config {
    /// Seed the record from command-line flags, falling back to defaults
    /// for anything the operator did not pass.
    pub fn from_flags(
        temp: Option<String>,
        src: Option<String>,
        dest: Option<String>,
    ) -> Self {
        Self {
            temp_path: temp.unwrap_or_else(|| DEFAULT_TEMP_PATH.to_string()),
            src_repo: src,
            dest_repo: dest,
        }
    }

    /// Overlay the JSON config file at `path`, if it exists.
    ///
    /// A missing file returns the record unchanged. A present file is parsed
    /// as JSON and its known keys replace the seeded values; a parse failure
    /// is fatal and propagated.
    pub fn overlay_file(mut self, path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(self);
        }

        let raw = fs::read_to_string(path)?;
        let file: FileConfig =
            serde_json::from_str(&raw).map_err(|e| Error::ConfigParse {
                path: path.display().to_string(),
                source: e,
            })?;

        if let Some(temp_path) = file.temp_path {
            self.temp_path = temp_path;
        }
        if let Some(src_repo) = file.src_repo {
            self.src_repo = Some(src_repo);
        }
        if let Some(dest_repo) = file.dest_repo {
            self.dest_repo = Some(dest_repo);
        }

        Ok(self)
    }

    /// Validate the merged record into an immutable [`ResolvedConfig`].
    ///
    /// An absent or empty locator is a configuration error; the caller
    /// reports it with a usage message and exits 1.
    pub fn resolve(self) -> Result<ResolvedConfig> {
        let src_repo = match self.src_repo {
            Some(repo) if !repo.is_empty() => repo,
            _ => return Err(Error::MissingRepo { role: "source" }),
        };
        let dest_repo = match self.dest_repo {
            Some(repo) if !repo.is_empty() => repo,
            _ => return Err(Error::MissingRepo { role: "destination" }),
        };

        Ok(ResolvedConfig {
            temp_path: self.temp_path,
            src_repo,
            dest_repo,
        })
    }
}
