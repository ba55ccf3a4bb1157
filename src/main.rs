use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use grid_snake::config::{
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, GridSize, THEME_CLASSIC, tick_interval,
};
use grid_snake::error::AppError;
use grid_snake::food::FoodSource;
use grid_snake::game::GameState;
use grid_snake::input::InputHandler;
use grid_snake::logging;
use grid_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use log::{LevelFilter, debug, info};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Grid width in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    width: u16,

    /// Grid height in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    height: u16,

    /// Seed for food placement, for reproducible sessions.
    #[arg(long)]
    seed: Option<u64>,

    /// Write a debug log of the session to this file.
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match try_main(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("grid-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: Cli) -> Result<(), AppError> {
    let bounds = GridSize::new(cli.width, cli.height)?;
    logging::init(cli.log_file.as_deref(), LevelFilter::Debug)?;
    info!(
        "starting on a {}x{} grid (seed: {:?})",
        bounds.width, bounds.height, cli.seed
    );

    install_panic_hook();

    match cli.seed {
        Some(seed) => run(GameState::new_with_seed(bounds, seed))?,
        None => run(GameState::new(bounds))?,
    }

    info!("session ended");
    Ok(())
}

/// Drives the session: collect input until the tick deadline, apply it,
/// step once, draw. Returns when a quit command arrives.
fn run<S: FoodSource>(mut state: GameState<S>) -> Result<(), AppError> {
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let theme = &THEME_CLASSIC;

    session.draw_game(&state, theme)?;
    let mut last_tick = Instant::now();

    loop {
        let deadline = last_tick + tick_interval(state.score());
        let commands = input.collect_until(deadline)?;
        if commands.quit {
            break;
        }

        if !commands.is_empty() {
            debug!("tick {}: {commands:?}", state.tick_count());
            state.apply_commands(commands);
        }
        state.step();
        last_tick = Instant::now();

        session.draw_game(&state, theme)?;
    }

    Ok(())
}
