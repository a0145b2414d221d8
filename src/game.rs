use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::food::Food;
use crate::input::GameInput;
use crate::snake::Snake;

/// Run state of the simulation.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Paused,
}

/// Complete mutable game state for one process lifetime.
///
/// Exclusively owned by the game loop; single-threaded throughout.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub status: GameStatus,
    rng: StdRng,
}

impl GameState {
    /// Creates a paused state with an entropy-seeded RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible rounds.
    #[must_use]
    pub fn new_with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: StdRng) -> Self {
        let snake = Snake::new();
        let food = Food::place(&mut rng, &snake);

        Self {
            snake,
            food,
            status: GameStatus::Paused,
            rng,
        }
    }

    /// Advances the simulation by one tick; no-op while paused.
    ///
    /// Collision is evaluated against the head position produced by the
    /// previous tick, before this tick's move is applied, so a fatal move is
    /// registered one tick after it becomes visible. Kept deliberately; see
    /// DESIGN.md.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }

        if self.head_collided() {
            self.snake.reset();
            self.status = GameStatus::Paused;
            return;
        }

        self.snake.advance();

        if self.snake.head() == self.food.position {
            self.snake.grow();
            self.food = Food::place(&mut self.rng, &self.snake);
        }
    }

    /// Applies one external input event.
    ///
    /// Direction requests steer the snake regardless of run state; a restart
    /// resets the delta rightward anyway. `Quit` is handled by the outer
    /// loop and ignored here.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => self.snake.steer(direction),
            GameInput::TogglePause => self.toggle_pause(),
            GameInput::Quit => {}
        }
    }

    fn head_collided(&self) -> bool {
        !self.snake.head().is_within_board() || self.snake.head_overlaps_body()
    }

    /// Flips between paused and running.
    ///
    /// Unpausing always starts a fresh round (snake re-initialized, food
    /// re-placed) rather than resuming the old one.
    fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => {
                self.snake.reset();
                self.food = Food::place(&mut self.rng, &self.snake);
                GameStatus::Running
            }
        };
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::CELL_SIZE;
    use crate::food::Food;
    use crate::input::{Direction, GameInput};
    use crate::snake::{Segment, Snake};

    use super::{GameState, GameStatus};

    fn running_state(seed: u64) -> GameState {
        let mut state = GameState::new_with_seed(seed);
        state.apply_input(GameInput::TogglePause);
        assert_eq!(state.status, GameStatus::Running);
        state
    }

    #[test]
    fn new_state_starts_paused_with_food_clear_of_snake() {
        let state = GameState::new_with_seed(1);

        assert_eq!(state.status, GameStatus::Paused);
        assert_eq!(state.snake.len(), 3);
        assert!(!state.snake.occupies(state.food.position));
    }

    #[test]
    fn tick_is_a_no_op_while_paused() {
        let mut state = GameState::new_with_seed(2);
        let head = state.snake.head();

        state.tick();

        assert_eq!(state.snake.head(), head);
        assert_eq!(state.status, GameStatus::Paused);
    }

    #[test]
    fn eating_food_grows_snake_and_replaces_food() {
        let mut state = running_state(3);
        state.food = Food::at(Segment { x: 256 + CELL_SIZE, y: 256 });

        state.tick();

        assert_eq!(state.snake.len(), 4);
        assert_ne!(state.food.position, Segment { x: 256 + CELL_SIZE, y: 256 });
        assert!(!state.snake.occupies(state.food.position));
    }

    #[test]
    fn wall_exit_resets_snake_and_forces_pause() {
        let mut state = running_state(4);
        state.snake = Snake::from_segments(
            &[
                Segment { x: -CELL_SIZE, y: 256 },
                Segment { x: 0, y: 256 },
                Segment { x: CELL_SIZE, y: 256 },
            ],
            Direction::Left,
        );

        state.tick();

        assert_eq!(state.status, GameStatus::Paused);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.head(), Segment { x: 256, y: 256 });
        assert_eq!(state.snake.delta(), (CELL_SIZE, 0));
    }

    #[test]
    fn self_collision_is_detected_on_the_following_tick() {
        // Head turning left into a loop: the overlapping move happens on the
        // first tick and is only registered by the check on the second.
        let mut state = running_state(5);
        state.snake = Snake::from_segments(
            &[
                Segment { x: 64, y: 64 },
                Segment { x: 48, y: 64 },
                Segment { x: 48, y: 80 },
                Segment { x: 64, y: 80 },
                Segment { x: 80, y: 80 },
                Segment { x: 80, y: 64 },
            ],
            Direction::Left,
        );
        state.food = Food::at(Segment { x: 0, y: 0 });

        state.tick();
        assert_eq!(state.status, GameStatus::Running);
        assert!(state.snake.head_overlaps_body());

        state.tick();
        assert_eq!(state.status, GameStatus::Paused);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.head(), Segment { x: 256, y: 256 });
    }

    #[test]
    fn unpausing_restarts_the_round() {
        let mut state = running_state(6);
        state.apply_input(GameInput::Direction(Direction::Up));
        for _ in 0..4 {
            state.tick();
        }
        assert_ne!(state.snake.head(), Segment { x: 256, y: 256 });

        // Pause, then unpause: fresh snake, fresh food, rightward again.
        state.apply_input(GameInput::TogglePause);
        assert_eq!(state.status, GameStatus::Paused);
        state.apply_input(GameInput::TogglePause);

        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.head(), Segment { x: 256, y: 256 });
        assert_eq!(state.snake.delta(), (CELL_SIZE, 0));
        assert!(!state.snake.occupies(state.food.position));
    }
}
