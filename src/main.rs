use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use log::{error, info, LevelFilter};
use tick_snake::app::{App, Control};
use tick_snake::config::{GameConfig, DEFAULT_BOARD_SIZE, DEFAULT_TICK_INTERVAL_MS};
use tick_snake::engine::GameEngine;
use tick_snake::input::poll_input;
use tick_snake::logging::{default_log_path, init_file_logger};
use tick_snake::renderer;
use tick_snake::score::{scores_path, DEFAULT_PLAYER};
use tick_snake::terminal_runtime::{install_panic_hook, TerminalGuard};

/// Upper bound on how long one loop iteration waits for a key press.
const FRAME_BUDGET: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Cells per side of the square board.
    #[arg(long, env = "SNAKE_BOARD_SIZE", default_value_t = DEFAULT_BOARD_SIZE)]
    board_size: u16,

    /// Milliseconds between snake moves.
    #[arg(long = "tick-ms", env = "SNAKE_TICK_MS", default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// High-score file (defaults to the platform data directory).
    #[arg(long, env = "SNAKE_HIGH_SCORE_FILE")]
    high_score_file: Option<PathBuf>,

    /// Name stored next to recorded scores.
    #[arg(long, env = "SNAKE_PLAYER", default_value = DEFAULT_PLAYER)]
    player: String,

    /// Log file (defaults to the platform data directory).
    #[arg(long, env = "SNAKE_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Log debug-level detail.
    #[arg(long)]
    debug: bool,

    /// Seed for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            board_size: self.board_size,
            tick_interval: Duration::from_millis(self.tick_ms),
            high_score_path: self.high_score_file.clone().unwrap_or_else(scores_path),
            player_name: self.player.clone(),
        }
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    let level = if cli.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(error) = init_file_logger(&log_path, level) {
        eprintln!("Logging disabled, cannot open {}: {error}", log_path.display());
    }

    let config = cli.game_config();
    let engine = match cli.seed {
        Some(seed) => GameEngine::new_with_seed(config, seed),
        None => GameEngine::new(config),
    }
    .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))?;

    install_panic_hook();

    let result = run(App::new(engine, Instant::now()));
    if let Err(error) = &result {
        error!("terminal loop failed: {error}");
    }
    result
}

fn run(mut app: App) -> io::Result<()> {
    let mut session = TerminalGuard::enter()?;
    info!("entered terminal session");

    loop {
        session.terminal_mut().draw(|frame| {
            let engine = app.engine();
            renderer::render(frame, engine.state(), engine.high_scores());
        })?;

        let now = Instant::now();
        let wait = app
            .ticker()
            .time_until_due(now)
            .map_or(FRAME_BUDGET, |due| due.min(FRAME_BUDGET));

        if let Some(input) = poll_input(wait)? {
            if app.handle_input(input, Instant::now()) == Control::Quit {
                break;
            }
        }

        app.update(Instant::now());
    }

    Ok(())
}
