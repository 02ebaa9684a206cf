//! # Kiosk Terminal Frontend
//!
//! Rotating feed-board kiosk for the terminal. Starts on the posts board,
//! hops to the users board after the configured dwell, then hands control
//! to the keyboard: 1/2 pick a board, Tab cycles, r refetches, q quits.
//!
//! ## Usage
//!
//! ```bash
//! # Against the default feed
//! kiosk
//!
//! # Against a local feed, rotating after 2 seconds, with logs
//! kiosk --feed-url http://localhost:3000 --dwell-ms 2000 --log-file kiosk.log
//! ```

mod config;
mod input;
mod render;
mod runtime;

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use kiosk_app::{BoxedFeedSource, OfflineFeedSource};
use kiosk_client::FeedClient;

use config::KioskConfig;

/// Rotating feed-board kiosk for the terminal
#[derive(Parser, Debug)]
#[command(name = "kiosk")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Feed base URL
    #[arg(long)]
    feed_url: Option<String>,

    /// Dwell before the timed board rotation, in milliseconds
    #[arg(long)]
    dwell_ms: Option<u64>,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Append logs to this file (the terminal owns the tty)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Run without a feed source; boards keep their placeholder
    #[arg(long)]
    offline: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = resolve_config(&args)?;
    init_tracing(&config)?;

    let feed: BoxedFeedSource = if config.offline {
        Arc::new(OfflineFeedSource)
    } else {
        Arc::new(FeedClient::new(config.feed_url.as_str())?)
    };

    // Restore the terminal even when the loop panics.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = runtime::run(&mut terminal, feed, &config).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Resolve configuration: CLI flags win over the file, the file over
/// defaults.
fn resolve_config(args: &Args) -> Result<KioskConfig> {
    let mut config = KioskConfig::load(args.config.as_deref())?;

    if let Some(feed_url) = &args.feed_url {
        config.feed_url = feed_url.clone();
    }
    if let Some(dwell_ms) = args.dwell_ms {
        config.dwell_ms = dwell_ms;
    }
    if let Some(log_file) = &args.log_file {
        config.log_file = Some(log_file.clone());
    }
    if args.offline {
        config.offline = true;
    }

    Ok(config)
}

/// Route tracing output away from the tty.
///
/// With a log file configured, formatted output appends there; without
/// one it is discarded, since the TUI owns the terminal.
fn init_tracing(config: &KioskConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            let file = Arc::new(file);
            let make_writer = move || FileLogWriter {
                file: Arc::clone(&file),
            };

            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_target(false)
                .with_writer(make_writer)
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_target(false)
                .with_writer(io::sink)
                .try_init();
        }
    }

    Ok(())
}

/// Log writer over a shared append-mode file handle.
struct FileLogWriter {
    file: Arc<std::fs::File>,
}

impl Write for FileLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        (&*self.file).write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        (&*self.file).flush()
    }
}
