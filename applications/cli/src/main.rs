/// Cadence - play a catalog track list from the terminal
use anyhow::{Context, Result};
use cadence_cli::{config, Command, Flow, Session};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "cadence")]
#[command(about = "Queue and play catalog tracks from stdin commands", long_about = None)]
struct Cli {
    /// Catalog track list (JSON array)
    tracks: PathBuf,

    /// Configuration file path (defaults to ./cadence.toml if present)
    #[arg(short, long, env = "CADENCE_CONFIG")]
    config: Option<PathBuf>,

    /// Queue index to start playing at
    #[arg(short, long, default_value_t = 0)]
    start: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cadence=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let playback = config::load(cli.config.as_deref())?;

    let json = std::fs::read_to_string(&cli.tracks)
        .with_context(|| format!("failed to read {}", cli.tracks.display()))?;
    let library = cadence_core::tracks_from_json(&json)
        .with_context(|| format!("failed to parse {}", cli.tracks.display()))?;

    let mut session = Session::new(playback, library);
    session.execute(Command::Queue(cli.start));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_json(&mut out, &session.snapshot())?;
    session.drain_events();

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let command: Command = match line.parse() {
            Ok(command) => command,
            Err(e) => {
                warn!("{e}");
                continue;
            }
        };

        let show_status = command == Command::Status;
        if session.execute(command) == Flow::Quit {
            break;
        }

        for event in session.drain_events() {
            print_json(&mut out, &event)?;
        }
        if show_status {
            print_json(&mut out, &session.snapshot())?;
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
