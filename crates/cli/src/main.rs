mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mds", version, about = "Markdown vault crawler")]
struct Cli {
    /// Path to the config file (defaults to the XDG location)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Config profile to use
    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Crawl a vault and write the CSV and reference-tree artifacts
    Scan(ScanArgs),

    /// Print the reference tree without writing anything
    Tree(TreeArgs),

    /// Print statistics about the parent-link hierarchy
    Stats(StatsArgs),

    /// Validate configuration and print resolved settings
    Doctor,
}

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Vault root (defaults to the profile's vault_root, then the current directory)
    pub vault: Option<PathBuf>,

    /// Write the CSV artifact here instead of the configured location
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Write the tree artifact here instead of the configured location
    #[arg(long)]
    pub tree: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Vault root (defaults to the profile's vault_root, then the current directory)
    pub vault: Option<PathBuf>,

    /// Print only the subtree under this note
    #[arg(long)]
    pub root: Option<String>,
}

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Vault root (defaults to the profile's vault_root, then the current directory)
    pub vault: Option<PathBuf>,

    /// Emit JSON instead of the terminal summary
    #[arg(long)]
    pub json: bool,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan(args) => {
            cmd::scan::run(cli.config.as_deref(), cli.profile.as_deref(), args);
        }
        Commands::Tree(args) => {
            cmd::tree::run(cli.config.as_deref(), cli.profile.as_deref(), args);
        }
        Commands::Stats(args) => {
            cmd::stats::run(cli.config.as_deref(), cli.profile.as_deref(), args);
        }
        Commands::Doctor => cmd::doctor::run(cli.config.as_deref(), cli.profile.as_deref()),
    }
}
