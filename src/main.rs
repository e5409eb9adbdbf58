//! Simon in the terminal.
//!
//! Type a color (`red`, `r`, ...) to press a button; several presses can
//! share a line. `strict` toggles strict mode, `reset` starts over and
//! `quit` leaves.

use anyhow::Context;
use clap::Parser;
use simon::config::GameConfig;
use simon::game::SimonGame;
use simon::shell::terminal::{TerminalAudio, TerminalSurface};
use simon::shell::{forward_inputs, Driver, SoundBank};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "simon", about = "Repeat the sequence of colors")]
struct Args {
    /// Config file (TOML, or JSON when it ends in .json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start in strict mode
    #[arg(long)]
    strict: bool,

    /// Seed for a reproducible sequence
    #[arg(long)]
    seed: Option<u64>,

    /// Sequence length that wins the game
    #[arg(long)]
    win_length: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("simon=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    tracing::info!(?config, "starting");

    println!("=== SIMON ===");
    println!("Repeat the sequence: red / yellow / blue / green (or r / y / b / g)");
    println!("Commands: strict, reset, quit");
    println!();

    let audio = TerminalAudio::new(Duration::from_millis(600));
    let sounds = SoundBank::preload(audio, &config.sounds);
    let game = SimonGame::new(&config)?;
    let driver = Driver::new(game, TerminalSurface::new(std::io::stdout()), sounds);

    // Detached: main returning ends the process even while a read is pending.
    let (tx, rx) = mpsc::channel(32);
    std::thread::spawn(move || {
        forward_inputs(std::io::stdin().lock(), &tx, |err| println!("{err}"));
    });

    let driver = driver.run(rx).await;
    println!("Bye! You reached {} steps.", driver.game().step_count());
    Ok(())
}

fn load_config(args: &Args) -> anyhow::Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    if args.strict {
        config.strict_mode = true;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(win_length) = args.win_length {
        config.win_length = win_length;
    }

    config.validated().context("invalid settings")
}
