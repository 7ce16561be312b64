use std::path::PathBuf;

use clap::Parser;

/// Replays a scripted session against the toast lifecycle and prints the
/// toasts left on screen.
#[derive(Parser, Debug)]
#[command(name = "spaces-replay", version, about)]
pub struct Args {
    /// JSON Lines script of session, navigation and display steps.
    pub script: PathBuf,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. "spaces=debug").
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
