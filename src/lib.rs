//! # SVS Blog Uploader Library
//!
//! This library provides the functionality behind the `svs-blog-uploader`
//! command-line tool: a strictly linear pipeline that pulls a blog source
//! repository, builds it, copies the artifacts into the published site
//! repository, and optionally commits and pushes the result after an
//! interactive confirmation.
//!
//! ## Execution Flow
//!
//! The binary's `cli` module drives the following steps, in order:
//!
//! 1.  **Configuration** (`config`): merge CLI flags, the optional JSON
//!     config file, and defaults into one immutable record.
//! 2.  **Path planning** (`paths`): derive the build root and both checkout
//!     paths from the resolved configuration. Pure, no I/O.
//! 3.  **Repo sync** (`git`): clone each repository if absent, pull its
//!     fixed branch if present.
//! 4.  **Build** (`build`): run the source's install/clean/build pipeline.
//! 5.  **Artifact copy** (`artifact`): force-copy `dist/` into the
//!     destination working tree and show its `git status`.
//! 6.  **Publish menu** (`publish`): three-way interactive choice, then
//!     stage/commit/push on confirmation.
//!
//! Every external command goes through the `process` module as an argument
//! vector with inherited stdio; nothing is retried, and the only recovered
//! error is a failure inside the publish sequence.

pub mod artifact;
pub mod build;
pub mod config;
pub mod defaults;
pub mod error;
pub mod git;
pub mod paths;
pub mod process;
pub mod publish;
