//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `svs-blog-uploader` application. It uses the `thiserror` library to create
//! an `Error` enum that covers all anticipated failure modes, providing clear
//! and descriptive error messages.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum that represents all possible errors that can
//!   occur within the application. Each variant corresponds to a specific
//!   type of error and includes contextual information to aid in debugging.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the application to simplify function signatures.
//!
//! Only one error class is ever recovered from: a failure inside the
//! stage/commit/push sequence is caught by the publish handler and logged.
//! Every other variant propagates to `main` and terminates the run.

use thiserror::Error;

/// Main error type for svs-blog-uploader operations
#[derive(Error, Debug)]
pub enum Error {
    /// A required repository locator is missing after merging flags and the
    /// config file. Reported with a usage message before any side effect.
    #[error("The {role} repo is not given.")]
    MissingRepo {
        /// Which locator is missing: "source" or "destination".
        role: &'static str,
    },

    /// The config file exists but could not be parsed as JSON.
    #[error("Config parse error in {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// An external command could not be spawned at all.
    #[error("Failed to spawn `{command}`: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// An external command ran but exited with a non-zero status.
    #[error("Command `{command}` exited with {status}")]
    CommandFailed { command: String, status: String },

    /// An error occurred while copying build artifacts into the destination
    /// working tree.
    #[error("Artifact copy error: {src} -> {dst}: {message}")]
    ArtifactCopy {
        src: String,
        dst: String,
        message: String,
    },

    /// The publish prompt handler received an action value outside the
    /// validated `1`-`3` range. Effectively unreachable given the prompt
    /// layer's own validation.
    #[error("Uknown action: {value}!!")]
    UnknownAction { value: String },

    /// An error reading the interactive prompt.
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
