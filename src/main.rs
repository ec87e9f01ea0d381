//! yourvibe - A terminal gallery of mood playlists.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};
use ratatui_image::picker::Picker;
use tokio::sync::mpsc;

mod action;
mod app;
mod config;
mod covers;
mod gallery;
mod theme;
mod tui;
mod ui;

use action::Action;
use app::App;
use config::Config;
use gallery::Gallery;

/// Font size assumed when the terminal cannot report one.
const FALLBACK_FONT_SIZE: (u16, u16) = (8, 16);

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "yourvibe")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Don't fetch or draw cover art (overrides config)
    #[arg(long)]
    no_covers: bool,

    /// Switch hover effects instantly (overrides config)
    #[arg(long)]
    no_animations: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hooks
    tui::install_hooks()?;

    // Initialize logging
    let log_file = dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("yourvibe")
        .join("yourvibe.log");

    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file_appender = tracing_subscriber::fmt::layer()
        .with_writer(std::fs::File::create(&log_file)?)
        .with_ansi(false);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::sink) // Don't write to stdout in TUI mode
        .finish()
        .with(file_appender)
        .try_init()
        .ok();

    // Parse command-line arguments
    let args = Args::parse();

    // Load configuration
    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            Config::load_from(path)?
        }
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!("Using default config: {}", e);
            Config::default()
        }),
    };

    // Apply command-line overrides
    if args.no_covers {
        config.ui.show_covers = false;
    }
    if args.no_animations {
        config.ui.animations = false;
    }

    if args.print_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    // Query graphics support before the terminal goes raw
    let picker = config.ui.show_covers.then(|| {
        Picker::from_query_stdio().unwrap_or_else(|e| {
            tracing::warn!("Terminal graphics query failed, using half-blocks: {:?}", e);
            Picker::from_fontsize(FALLBACK_FONT_SIZE)
        })
    });

    // Create action channel
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    // Create application
    let mut app = App::new(config, Gallery::reference()?, picker, action_tx.clone());

    // Initialize terminal
    let mut terminal = tui::init(app.config.ui.mouse)?;

    // Start background cover loads
    app.init()?;

    // Main event loop
    let tick_rate = app.config.tick_rate();

    loop {
        // Render UI
        terminal.draw(|frame| ui::render(frame, &mut app))?;

        // Handle events with timeout
        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press {
                        let action = handle_key_event(key.code, key.modifiers);
                        if action != Action::None {
                            action_tx.send(action)?;
                        }
                    }
                }
                Event::Mouse(mouse) => {
                    let action = handle_mouse_event(mouse);
                    if action != Action::None {
                        action_tx.send(action)?;
                    }
                }
                Event::Resize(width, height) => {
                    action_tx.send(Action::Resize(width, height))?;
                }
                _ => {}
            }
        }

        // Send tick action
        action_tx.send(Action::Tick)?;

        // Process all pending actions
        while let Ok(action) = action_rx.try_recv() {
            app.handle_action(action)?;
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    tui::restore()?;

    Ok(())
}

/// Map key events to actions.
fn handle_key_event(code: KeyCode, modifiers: KeyModifiers) -> Action {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        _ => Action::None,
    }
}

/// Handle mouse events.
fn handle_mouse_event(mouse: crossterm::event::MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            Action::MouseMove(mouse.column, mouse.row)
        }
        MouseEventKind::ScrollUp => Action::MouseScroll(-1),
        MouseEventKind::ScrollDown => Action::MouseScroll(1),
        _ => Action::None,
    }
}

use tracing_subscriber::prelude::*;
