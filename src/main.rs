use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, path::PathBuf, sync::Arc, time::Duration};
use tokio::sync::mpsc;

use pintui::api::PinataClient;
use pintui::config::{self, Config};
use pintui::credentials::CredentialStore;
use pintui::model::{self, Notification};
use pintui::services::{self, ApiRequest, ApiResponse};

mod app;
mod handlers;
mod ui;

/// Pinata IPFS file manager
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <temp dir>/pintui-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, gg/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Stage a file for upload at startup
    #[arg(short, long)]
    file: Option<PathBuf>,
}

pub const DEBUG_LOG_FILE: &str = "pintui-debug.log";

pub struct App {
    pub model: model::Model,

    store: CredentialStore,
    api_tx: mpsc::UnboundedSender<ApiRequest>,
    api_rx: mpsc::UnboundedReceiver<ApiResponse>,

    clipboard_command: Option<String>,
}

impl App {
    /// Build the app. Must run inside the tokio runtime: the API worker is
    /// spawned here.
    fn new(config: Config, config_path: Option<String>) -> Result<Self> {
        let store_path = config
            .store_path
            .clone()
            .unwrap_or_else(CredentialStore::default_path);
        let store = CredentialStore::open(&store_path)?;
        let credential = store.load();
        tracing::info!(
            store = %store_path.display(),
            usable = credential.is_usable(),
            "Loaded credentials"
        );

        let client = PinataClient::new(
            config.api_base_url.clone(),
            config.page_limit(),
            config.request_timeout(),
        )
        .context("Failed to build HTTP client")?;
        let (api_tx, api_rx) = services::spawn_api_service(Arc::new(client));

        let mut model = model::Model::new(
            credential,
            config.gateway_base_url.clone(),
            config.keep_list_on_refresh_error,
            config.vim_mode,
        );
        model.ui.config_path = config_path;

        Ok(App {
            model,
            store,
            api_tx,
            api_rx,
            clipboard_command: config.clipboard_command,
        })
    }
}

fn init_logging(debug: bool) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    if !debug {
        return None;
    }

    let appender = tracing_appender::rolling::never(std::env::temp_dir(), DEBUG_LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pintui=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Some(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Held until exit so buffered log lines get flushed
    let _log_guard = init_logging(args.debug);
    if args.debug {
        tracing::info!("Debug mode enabled");
    }

    // Load configuration, falling back to defaults
    let config_path = config::find_config_path(args.config.as_deref())?;
    let mut config = match &config_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading config");
            Config::from_file(path)?
        }
        None => Config::default(),
    };

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }

    let mut app = App::new(config, config_path.map(|p| p.display().to_string()))?;

    if let Some(path) = &args.file {
        if let Err(e) = app.stage_path(path) {
            app.model.ui.push_notification(Notification::warning(
                "Cannot stage file",
                format!("{}: {}", path.display(), e),
            ));
        }
    }

    app.refresh();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Auto-dismiss toast after 1.5 seconds
        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process API responses (non-blocking)
        while let Ok(response) = app.api_rx.try_recv() {
            handlers::handle_api_response(app, response);
        }

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                handlers::handle_key(app, key);
            }
        }
    }

    Ok(())
}
