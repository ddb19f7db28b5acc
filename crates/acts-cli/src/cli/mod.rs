//! CLI for the legal-act downloader.

mod commands;

use acts_core::config;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_classify, run_fetch, run_list};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "acts")]
#[command(about = "Download legal-act documents from Polish government legislative sites", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Discover and download every document reachable from a project page.
    Fetch {
        /// Project or listing page URL (e.g. https://legislacja.rcl.gov.pl/projekt/12400101).
        url: String,
        /// Output directory (overrides `output_dir` from the config file).
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },

    /// List discovered documents without downloading them.
    List {
        /// Project or listing page URL.
        url: String,
    },

    /// Show which site profile a URL maps to.
    Classify {
        /// Any URL.
        url: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Classify { url } => run_classify(&url),
            CliCommand::Fetch { url, out } => {
                let mut cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                if let Some(dir) = out {
                    cfg.output_dir = dir;
                }
                run_fetch(&cfg, &url)
            }
            CliCommand::List { url } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_list(&cfg, &url)
            }
        }
    }
}
