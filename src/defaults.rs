//! Default values for svs-blog-uploader configuration.
//!
//! This module provides centralized default values used across the pipeline,
//! ensuring consistency and avoiding duplication.

/// Default location of the uploader config file, relative to the cwd.
///
/// Can be overridden with the `-c/--config` CLI flag.
pub const DEFAULT_CONFIG_PATH: &str = "./.svs-blog-uploader-config.json";

/// Default temp root under which the build directory is created.
///
/// Can be overridden with the `-t/--temp` CLI flag or the `tempPath` key in
/// the config file.
pub const DEFAULT_TEMP_PATH: &str = "./temp";

/// Name of the build directory created under the temp root. Both repository
/// checkouts live under this directory.
pub const BUILD_DIR_NAME: &str = "svs-uploader-build";

/// Branch the blog source repository is tracked on.
pub const SOURCE_BRANCH: &str = "posts";

/// Branch the published site repository is tracked on.
pub const DEST_BRANCH: &str = "master";

/// Directory inside the source checkout that holds the build output.
pub const DIST_DIR: &str = "dist";

/// Subdirectories staged by the "posts/slides only" publish action.
pub const PUBLISH_DIRS: [&str; 2] = ["posts", "slides"];
