//! # SVS Blog Uploader CLI
//!
//! This is the binary entry point for the `svs-blog-uploader` command-line
//! tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Running the publish pipeline with the parsed options.
//! - Handling top-level application errors and translating them into
//!   user-friendly output.
//!
//! The pipeline logic itself lives in the `svs_blog_uploader` library crate,
//! ensuring that the binary is a thin wrapper around the reusable library
//! functionality.

mod cli;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
