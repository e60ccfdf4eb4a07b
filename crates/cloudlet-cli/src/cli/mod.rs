//! CLI for resolving cloudlet console API base URLs.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use cloudlet_core::config;
use cloudlet_core::location::StaticLocation;
use cloudlet_core::url_builder::UrlBuilder;

use commands::{run_api_base, run_completions, run_geofencing_base, run_man, run_param, run_show};

/// Top-level CLI for the cloudlet console URL builder.
#[derive(Debug, Parser)]
#[command(name = "cloudlet-urls")]
#[command(about = "Resolve cloudlet API base URLs from a console page URL", long_about = None)]
pub struct Cli {
    /// Console page URL to resolve against (defaults to `page_url` from config.toml).
    #[arg(long, global = true, value_name = "URL")]
    pub href: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the geofencing API base URL.
    GeofencingBase,

    /// Print the cloudlet API base URL.
    ApiBase,

    /// Print the raw value of a query parameter on the page URL.
    Param {
        /// Parameter name, matched literally.
        name: String,
    },

    /// Print both API base URLs.
    Show {
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Generate a man page.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Completions { shell } => return run_completions(shell),
            CliCommand::Man => return run_man(),
            _ => {}
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let href = cli.href.unwrap_or_else(|| cfg.page_url.clone());
        let location = StaticLocation::parse(&href)?;
        let builder = UrlBuilder::new(location).with_empty_override(cfg.empty_override);

        match cli.command {
            CliCommand::GeofencingBase => run_geofencing_base(&builder),
            CliCommand::ApiBase => run_api_base(&builder),
            CliCommand::Param { name } => run_param(&builder, &name),
            CliCommand::Show { json } => run_show(&builder, json),
            CliCommand::Completions { .. } | CliCommand::Man => Ok(()),
        }
    }
}
