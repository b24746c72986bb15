mod app;
mod config;
mod domain;
mod input;
mod logging;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use config::{default_config_path, load_config, log_dir, write_default_config, Config};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::Theme;
use log::{info, warn};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "focusboard")]
#[command(about = "A terminal productivity dashboard with a focus timer and a checklist", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path. Defaults to ~/.focusboard/config.json
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Theme to start in (overrides the config file)
    #[arg(long, value_enum)]
    theme: Option<Theme>,

    /// Use plain ASCII markers instead of emoji
    #[arg(long)]
    no_emoji: bool,

    /// Start with an empty checklist
    #[arg(long)]
    empty: bool,

    /// Log level for ~/.focusboard/logs (overrides the config file)
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };

    match &cli.command {
        Some(Commands::Init) => {
            let path = write_default_config(&config_path)?;
            println!("Wrote default config: {}", path.display());
            Ok(())
        }
        None => {
            let config = load_config(&config_path)
                .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
            run_tui(apply_overrides(config, &cli))
        }
    }
}

/// Command-line flags win over the config file
fn apply_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if cli.no_emoji {
        config.use_emoji = false;
    }
    if cli.empty {
        config.sample_tasks = false;
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    config
}

fn run_tui(config: Config) -> Result<()> {
    // Logger must outlive the app; failures only cost us the log file
    let _logger = match log_dir() {
        Ok(dir) => match logging::init_logging(&config.log_level, &dir) {
            Ok(handle) => Some(handle),
            Err(e) => {
                eprintln!("Warning: logging disabled: {}", e);
                None
            }
        },
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            None
        }
    };

    let mut app = AppState::new(&config);
    info!(
        "event=session_start theme={} tasks={}",
        app.theme.label(),
        app.tasks.len()
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    app.shutdown();

    if let Err(err) = &result {
        warn!("event=session_error error={}", err);
        eprintln!("Error: {}", err);
    }
    info!("event=session_end");

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let refresh = ticker::ui_refresh_duration();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Wake up for input, a redraw, or the next countdown tick
        let timeout = app.poll_timeout(Instant::now(), refresh);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key, Instant::now()) {
                    return Ok(());
                }
            }
        }

        app.tick(Instant::now());
    }
}
