//! wcard - A terminal viewer for warranty cards.
//!
//! This is the main binary that loads a warranty record and launches the TUI
//! card for it.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wcard_config::{Config, persistence};
use wcard_protocol::{WarrantyRecord, dummy::sample_record};
use wcard_tui::{App, CardActions, terminal};

#[derive(Parser, Debug)]
#[command(name = "wcard")]
#[command(version)]
#[command(about = "Display a warranty record as an interactive terminal card")]
struct Args {
    /// JSON file holding the warranty record (defaults to a sample record)
    record: Option<PathBuf>,

    /// Configuration file (defaults to ./wcard.json5, then the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the sample record as JSON and exit
    #[arg(long)]
    dump_sample: bool,

    /// Write the default configuration to the user config directory and exit
    #[arg(long, conflicts_with = "config")]
    init_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they can be redirected away from the TUI
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    if args.dump_sample {
        let json = serde_json::to_string_pretty(&sample_record())?;
        println!("{json}");
        return Ok(());
    }

    if args.init_config {
        let path = init_user_config()?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().context("failed to load config")?,
    };
    config.validate().context("invalid configuration")?;

    let record = match &args.record {
        Some(path) => load_record(path)?,
        None => {
            info!("no record given, showing the sample record");
            sample_record()
        }
    };
    if !record.status_kind().is_known() {
        warn!(status = %record.status, "unrecognized warranty status, using default styling");
    }

    let actions = logging_actions(&record);

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();
    let mut terminal = terminal::setup_terminal()?;

    let mut app = App::new(record, config.content, actions);
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}

/// Writes the default configuration to the user config path, leaving an
/// existing file alone.
fn init_user_config() -> anyhow::Result<PathBuf> {
    let path = persistence::default_user_config_path()
        .context("failed to locate the user config directory")?;
    if path.exists() {
        warn!(path = %path.display(), "config file already exists, not overwriting");
        return Ok(path);
    }
    Config::default()
        .save_to(&path)
        .with_context(|| format!("failed to write config to {}", path.display()))?;
    info!(path = %path.display(), "wrote default config");
    Ok(path)
}

fn load_record(path: &Path) -> anyhow::Result<WarrantyRecord> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read record from {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse record in {}", path.display()))
}

/// Action handlers that only report the request; the actual work belongs to
/// whatever wraps this binary.
fn logging_actions(record: &WarrantyRecord) -> CardActions {
    let number = record.warranty_number.clone();
    let (download, print, share) = (number.clone(), number.clone(), number.clone());
    CardActions::new()
        .on_close(move || info!(warranty = %number, "close requested"))
        .on_download(move || info!(warranty = %download, "download requested"))
        .on_print(move || info!(warranty = %print, "print requested"))
        .on_share(move || info!(warranty = %share, "share requested"))
}
