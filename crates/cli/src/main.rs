mod cmd;
mod logging;

use clap::{ArgAction, Args, Parser};
use mdbyline_core::config::ConfigLoader;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "mdbyline",
    version,
    about = "Ensure a markdown document's front matter names its author"
)]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/mdbyline/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase stderr log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    ensure: EnsureArgs,
}

#[derive(Debug, Args)]
pub struct EnsureArgs {
    /// Markdown file to update in place
    #[arg(long)]
    pub input: PathBuf,

    /// Author to write into the front matter (and the byline)
    #[arg(long)]
    pub author: String,

    /// Insert a `*作者：<author>*` byline after the front matter if missing
    #[arg(long)]
    pub byline: bool,

    /// Print the rewritten document instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let cfg = ConfigLoader::load(cli.config.as_deref())?;
    let _log_guard = logging::init(&cfg.logging, cli.verbose)?;

    cmd::ensure::run(&cli.ensure, &cfg)
}
