// ABOUTME: Main entry point for the Toast-Box demo TUI

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    Terminal,
};
use std::{
    io,
    path::PathBuf,
    time::{Duration, Instant},
};
use tracing::{error, info};

use toast_box::app::{App, EventHandler};
use toast_box::components::LayoutComponent;
use toast_box::config::AppConfig;
use toast_box::{ToastKind, ToastPosition, ToastRequest};

/// Show transient toasts in a terminal UI.
#[derive(Debug, Parser)]
#[command(name = "toast-box", version, about)]
struct Cli {
    /// Message for a toast shown at startup
    #[arg(short, long)]
    message: Option<String>,

    /// Lifetime of the startup toast in milliseconds
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    duration: Option<u64>,

    /// Corner for the startup toast
    #[arg(short, long, value_enum)]
    position: Option<ToastPosition>,

    /// Styling of the startup toast
    #[arg(short = 't', long = "type", value_enum)]
    kind: Option<ToastKind>,

    /// Startup toast as JSON, e.g. '{"message":"Saved","type":"success"}'
    #[arg(long, conflicts_with = "message")]
    request: Option<String>,

    /// Config file to use instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn startup_request(&self, config: &AppConfig) -> Result<Option<ToastRequest>> {
        let base = match (&self.request, &self.message) {
            (Some(json), _) => {
                serde_json::from_str::<ToastRequest>(json).context("Invalid --request JSON")?
            }
            (None, Some(message)) => config.toast.request(message.clone()),
            (None, None) => return Ok(None),
        };

        let mut request = base;
        if let Some(duration) = self.duration {
            request = request.with_duration(Duration::from_millis(duration));
        }
        if let Some(position) = self.position {
            request = request.with_position(position);
        }
        if let Some(kind) = self.kind {
            request = request.with_kind(kind);
        }
        Ok(Some(request))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::load_default()?,
    };
    let startup_request = cli.startup_request(&config)?;

    setup_logging(&config.log_filter)?;
    setup_panic_handler();

    let mut app = App::with_config(&config);
    if let Some(request) = startup_request {
        app.state.present(request)?;
    }
    let mut layout = LayoutComponent::new();

    let result = run_tui(&mut app, &mut layout, config.tick_rate()).await;
    app.shutdown();
    result
}

async fn run_tui(app: &mut App, layout: &mut LayoutComponent, tick_rate: Duration) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("Toast-Box started");
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| {
            layout.render(frame, &app.state);
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    if let Some(app_event) = EventHandler::handle_key_event(key_event, &app.state) {
                        EventHandler::process_event(app_event, &mut app.state);
                    }
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }

        // Teardown tasks run off the UI thread; redraw as soon as one lands
        if app.needs_ui_refresh() {
            if let Err(e) = terminal.draw(|frame| layout.render(frame, &app.state)) {
                error!("Failed to redraw after toast change: {}", e);
            }
        }

        if app.state.should_quit {
            break;
        }

        // Let teardown tasks on this worker make progress
        tokio::task::yield_now().await;
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("Toast-Box exited");
    Ok(())
}

fn setup_logging(default_filter: &str) -> Result<()> {
    use std::fs::OpenOptions;
    use tracing_subscriber::prelude::*;

    let log_dir = dirs::home_dir()
        .map(|home| home.join(".toast-box").join("logs"))
        .unwrap_or_else(|| PathBuf::from(".toast-box/logs"));

    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let log_file = log_dir.join(format!(
        "toast-box-{}.log",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(file)
                .with_ansi(false), // No ANSI colors in log file
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    Ok(())
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        // Ensure terminal is restored before logging the panic
        let _ = disable_raw_mode();
        let _ = execute!(
            std::io::stderr(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
