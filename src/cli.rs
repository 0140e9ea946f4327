//! CLI argument parsing and pipeline dispatch

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use log::LevelFilter;

use svs_blog_uploader::config::Config;
use svs_blog_uploader::defaults::DEFAULT_CONFIG_PATH;
use svs_blog_uploader::error::Error;
use svs_blog_uploader::git::{self, RepoRole};
use svs_blog_uploader::paths::PathPlan;
use svs_blog_uploader::{artifact, build, publish};

/// SVS Blog Uploader - Build the blog source repo and publish it to the site repo
#[derive(Parser, Debug)]
#[command(name = "svs-blog-uploader")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The uploader config file path
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// The temp folder to prepare uploaded files
    #[arg(short, long, value_name = "PATH")]
    temp: Option<String>,

    /// The source repo
    #[arg(short, long, value_name = "REPO")]
    src: Option<String>,

    /// The destination repo
    #[arg(short, long, value_name = "REPO")]
    dest: Option<String>,

    /// Show verbose information (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Map the counted `-v` flag onto a log level. The quiet default only
/// surfaces errors and warnings; one `-v` adds progress info, two or more
/// add debug traces of the resolved configuration and every command line.
fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

impl Cli {
    /// Execute the pipeline end to end.
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::new()
            .filter_level(level_filter(self.verbose))
            .parse_default_env()
            .init();

        let config_path = self
            .config
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        log::debug!("config path: {}", config_path.display());

        let merged = Config::from_flags(self.temp, self.src, self.dest)
            .overlay_file(&config_path)?;

        let resolved = match merged.resolve() {
            Ok(resolved) => resolved,
            Err(err @ Error::MissingRepo { .. }) => {
                // Message and help text both go to stdout, the stream the
                // tool has always reported this usage error on.
                println!("{}", err);
                Cli::command().print_help()?;
                std::process::exit(1);
            }
            Err(err) => return Err(err.into()),
        };
        log::debug!("resolved config: {:?}", resolved);

        let plan = PathPlan::derive(&resolved);
        log::debug!("path plan: {:?}", plan);

        fs::create_dir_all(&plan.temp_build_path)?;

        git::sync_repo(&resolved.src_repo, &plan.src_repo_path, RepoRole::Source)?;
        git::sync_repo(
            &resolved.dest_repo,
            &plan.dest_repo_path,
            RepoRole::Destination,
        )?;

        build::run_build(&plan.src_repo_path)?;
        artifact::copy_and_report(&plan.src_repo_path, &plan.dest_repo_path)?;

        publish::run_menu(&plan)?;
        Ok(())
    }
}
