//! Mystic 8: ask the orb a question in your terminal.

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::Parser;

use mystic_core::OrbConfig;
use mystic_tui::app::OrbApp;

#[derive(Parser)]
#[command(
    name = "mystic8",
    about = "A magic 8-ball for your terminal: ask, click the orb, receive your fate",
    version
)]
struct Args {
    /// RNG seed for reproducible fortunes and starfield
    #[arg(long)]
    seed: Option<u64>,

    /// Animation frames per second (1-60)
    #[arg(long, default_value = "20")]
    fps: u32,

    /// Append structured logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = mystic_tui::logging::init_logging(args.log_file.as_deref()) {
        eprintln!("error: {e}");
        process::exit(1);
    }

    let mut config = OrbConfig::default().with_fps(args.fps);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    tracing::info!(seed = ?config.seed, fps = config.fps, "starting mystic8");

    let app = OrbApp::new(&config, Instant::now());

    if let Err(e) = mystic_tui::terminal::run(app) {
        tracing::error!(error = %e, "terminal session failed");
        eprintln!("error: {e}");
        process::exit(1);
    }
    tracing::info!("mystic8 closed");
}
