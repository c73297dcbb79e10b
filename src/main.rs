// ABOUTME: Entry point for era — a terminal chat client with a simulated assistant.
// ABOUTME: Parses CLI args, loads config, and launches the app.

use std::path::PathBuf;

use clap::Parser;

use erachat::app::App;
use erachat::config::Config;

#[derive(Debug, Parser)]
#[command(
    name = "era",
    about = "EraAI terminal chat: themes, presets, and a simulated assistant"
)]
struct Args {
    /// Start this run with a fresh conversation; stored history is
    /// neither loaded nor overwritten.
    #[arg(long)]
    fresh: bool,

    /// Override the data directory holding the store and transcripts.
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::load()?;
    if let Some(dir) = args.data_dir {
        config.storage.data_dir = Some(dir);
    }

    App::new(config, args.fresh).run().await
}
