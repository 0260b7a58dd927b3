// Bookdesk - terminal client for a books CRUD API
//
// A single-page client over a REST backend at {api_url}/api/books:
// a create/update form, the book list with edit/delete, and a
// confirmation dialog guarding deletes.
//
// Architecture:
// - API worker (reqwest): executes commands against the backend, one at a time
// - TUI (ratatui): form + list page, modal and toast overlays
// - Event system: mpsc channels connect the two
// - Demo mode swaps the HTTP client for an in-memory collection

mod api;
mod cli;
mod config;
mod events;
mod form;
mod logging;
mod model;
mod theme;
mod tui;

use anyhow::Result;
use api::demo::DemoBookService;
use api::HttpBookService;
use config::{Config, LogRotation};
use logging::{BufferLayer, LogBuffer};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --reset, --edit, --path).
    // If a command was handled, exit early.
    let Some(cli) = cli::handle_cli() else {
        return Ok(());
    };

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::from_env();
    if cli.demo {
        config.demo = true;
    }

    // Logs go to an in-memory buffer for the logs overlay - printing to
    // stdout would garble the alternate screen. File logging is optional.
    //
    // Precedence: RUST_LOG env var > config file > default "info"
    let log_buffer = LogBuffer::new();
    let default_filter = format!("bookdesk={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // The guard must be kept alive for the duration of the program so
    // buffered file writes flush on exit
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            match std::fs::create_dir_all(&config.logging.file_dir) {
                Ok(()) => {
                    let appender = match config.logging.file_rotation {
                        LogRotation::Hourly => tracing_appender::rolling::hourly(
                            &config.logging.file_dir,
                            &config.logging.file_prefix,
                        ),
                        LogRotation::Daily => tracing_appender::rolling::daily(
                            &config.logging.file_dir,
                            &config.logging.file_prefix,
                        ),
                        LogRotation::Never => tracing_appender::rolling::never(
                            &config.logging.file_dir,
                            &config.logging.file_prefix,
                        ),
                    };
                    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

                    tracing_subscriber::registry()
                        .with(filter)
                        .with(BufferLayer::new(log_buffer.clone()))
                        .with(
                            tracing_subscriber::fmt::layer()
                                .json()
                                .with_writer(non_blocking)
                                .with_ansi(false),
                        )
                        .init();
                    Some(guard)
                }
                Err(e) => {
                    eprintln!(
                        "Warning: Could not create log directory {:?}: {}",
                        config.logging.file_dir, e
                    );
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(BufferLayer::new(log_buffer.clone()))
                        .init();
                    None
                }
            }
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(BufferLayer::new(log_buffer.clone()))
                .init();
            None
        };

    // Command and event channels between the TUI and the API worker.
    // Bounded: a full command queue drops with a warning rather than
    // blocking the UI thread.
    let (command_tx, command_rx) = mpsc::channel(64);
    let (event_tx, event_rx) = mpsc::channel(64);

    // Spawn the API worker against the configured backend
    let worker_handle = if config.demo {
        tracing::info!("Running in DEMO MODE with an in-memory collection");
        tokio::spawn(api::worker::run(
            DemoBookService::seeded(),
            command_rx,
            event_tx,
        ))
    } else {
        tracing::info!("Books API: {}", config.api_url);
        let service = HttpBookService::new(&config.api_url)?;
        tokio::spawn(api::worker::run(service, command_rx, event_tx))
    };

    // Run the TUI in the main task; blocks until the user quits
    tracing::info!("Starting TUI (bookdesk {})", config::VERSION);
    if let Err(e) = tui::run_tui(&config, log_buffer, command_tx, event_rx).await {
        tracing::error!("TUI error: {:?}", e);
    }

    // The TUI dropped its command sender, so the worker drains and exits
    let _ = worker_handle.await;

    Ok(())
}
