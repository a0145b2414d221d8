use arcade_snake::config::CELL_SIZE;
use arcade_snake::food::Food;
use arcade_snake::game::{GameState, GameStatus};
use arcade_snake::input::{Direction, GameInput};
use arcade_snake::snake::Segment;

#[test]
fn stepwise_round_with_growth_and_wall_collision() {
    let mut state = GameState::new_with_seed(42);
    assert_eq!(state.status, GameStatus::Paused);

    // Unpausing starts a fresh round: centered three-segment snake moving
    // right, food clear of the body.
    state.apply_input(GameInput::TogglePause);
    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.snake.len(), 3);
    assert_eq!(state.snake.head(), Segment { x: 256, y: 256 });
    assert_eq!(state.snake.delta(), (CELL_SIZE, 0));
    assert!(!state.snake.occupies(state.food.position));

    // Park the food in the corner so the next steps are food-free; the head
    // then advances by exactly one delta per tick.
    state.food = Food::at(Segment { x: 0, y: 0 });
    for n in 1..=5 {
        state.tick();
        assert_eq!(
            state.snake.head(),
            Segment { x: 256 + n * CELL_SIZE, y: 256 },
        );
    }
    assert_eq!(state.snake.len(), 3);

    // Put food directly ahead: the next tick consumes it and grows the snake.
    state.food = Food::at(Segment { x: 256 + 6 * CELL_SIZE, y: 256 });
    state.tick();
    assert_eq!(state.snake.len(), 4);
    assert!(!state.snake.occupies(state.food.position));

    // Drive straight up and out. The head leaves the board one tick after
    // reaching the top row, and the exit is registered one tick after that.
    state.food = Food::at(Segment { x: 0, y: 0 });
    state.apply_input(GameInput::Direction(Direction::Up));
    for _ in 0..17 {
        state.tick();
    }
    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.snake.head(), Segment { x: 256 + 6 * CELL_SIZE, y: -CELL_SIZE });

    state.tick();
    assert_eq!(state.status, GameStatus::Paused);
    assert_eq!(state.snake.len(), 3);
    assert_eq!(state.snake.head(), Segment { x: 256, y: 256 });
    assert_eq!(state.snake.delta(), (CELL_SIZE, 0));
}
