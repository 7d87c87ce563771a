mod cmd;
mod output;
mod root;

use anyhow::Context;
use clap::Parser;
use output::Format;
use std::path::PathBuf;
use studio_core::{
    sync::{AutoSync, SystemRunner},
    Config, PhaseRepository,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "studio",
    about = "Roadmap helper — list milestone phases, show one in detail, or recommend the next step",
    long_about = "Roadmap helper — list milestone phases, show one in detail, or recommend the next step.\n\n\
                  Milestones are read from docs/milestones/ under the project root, or from \
                  STUDIO_MILESTONES_DIR. Set STUDIO_AUTO_SYNC=1 to git fetch and pull first.",
    version
)]
struct Cli {
    /// Show the summary of every phase (the default)
    #[arg(long, conflicts_with_all = ["phase", "next"])]
    list: bool,

    /// Show details for one phase
    #[arg(long, value_name = "N", conflicts_with = "next")]
    phase: Option<u32>,

    /// Recommend the phase to work on next
    #[arg(long)]
    next: bool,

    /// With --next: the phase you just completed
    #[arg(long, value_name = "N", requires = "next")]
    after: Option<u32>,

    /// Project root (default: auto-detect from docs/milestones/ or .git/)
    #[arg(long, env = "STUDIO_ROOT")]
    root: Option<PathBuf>,

    /// Milestone directory (overrides STUDIO_MILESTONES_DIR)
    #[arg(long, value_name = "DIR")]
    milestones_dir: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, short = 'j')]
    json: bool,

    /// Output phases as Markdown sections
    #[arg(long, conflicts_with = "json")]
    markdown: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(cli.verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

/// `--verbose` forces debug output; otherwise `RUST_LOG` decides, falling
/// back to warnings only.
fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into());
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let root = root::resolve_root(cli.root.as_deref());

    let mut config = Config::from_env(&root);
    if let Some(dir) = cli.milestones_dir {
        config = config.with_milestones_dir(dir);
    }

    // Must finish before any milestone is read.
    AutoSync::new(&config, &SystemRunner, &root).run();

    let repo = PhaseRepository::new(&config).context("failed to resolve milestone directory")?;
    let format = Format::from_flags(cli.json, cli.markdown);

    if let Some(number) = cli.phase {
        cmd::show::run(&repo, number, format)
    } else if cli.next {
        cmd::next::run(&repo, cli.after, format)
    } else {
        cmd::list::run(&repo, format)
    }
}
