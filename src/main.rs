use std::time::{Duration, Instant};

use arcade_snake::config::{THEME_CLASSIC, TICK_INTERVAL_MS};
use arcade_snake::error::AppError;
use arcade_snake::game::GameState;
use arcade_snake::input::{GameInput, InputHandler};
use arcade_snake::renderer;
use arcade_snake::terminal_runtime::TerminalSession;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(version, about = "Minimal fixed-grid arcade Snake for the terminal")]
struct Cli {
    /// Seed the food-placement RNG for reproducible rounds.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let mut session = TerminalSession::enter()?;
    run(&mut session, &cli)?;

    Ok(())
}

fn run(session: &mut TerminalSession, cli: &Cli) -> Result<(), AppError> {
    let mut input = InputHandler::new();
    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(seed),
        None => GameState::new(),
    };

    let tick_interval = Duration::from_millis(TICK_INTERVAL_MS);
    let mut last_tick = Instant::now();

    loop {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state, &THEME_CLASSIC))?;

        // poll_input blocks for at most the input poll timeout, which rate
        // limits the outer loop between simulation steps.
        if let Some(game_input) = input.poll_input()? {
            if matches!(game_input, GameInput::Quit) {
                break;
            }

            state.apply_input(game_input);
        }

        if last_tick.elapsed() >= tick_interval {
            state.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
