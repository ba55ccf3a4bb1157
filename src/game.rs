use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{GridSize, INITIAL_SNAKE_LENGTH, ticks_per_second};
use crate::food::{FoodSource, RandomCells, place_food};
use crate::input::{Direction, TickCommands};
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    Paused,
    GameOver,
    /// The snake fills the whole grid; nowhere is left to place food.
    Victory,
}

/// What ended the last game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Complete mutable game state for one session.
///
/// Only the simulation mutates it. Collaborators read through the accessors
/// and send commands through `set_direction`, `toggle_pause` and `reset`.
#[derive(Debug, Clone)]
pub struct GameState<S = RandomCells<StdRng>> {
    snake: Snake,
    food: Option<Position>,
    score: u32,
    status: GameStatus,
    death_reason: Option<DeathReason>,
    tick_count: u64,
    bounds: GridSize,
    food_source: S,
}

impl GameState {
    /// Creates a state whose food placement is seeded from OS entropy.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::with_food_source(bounds, RandomCells::new(StdRng::from_entropy()))
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::with_food_source(bounds, RandomCells::new(StdRng::seed_from_u64(seed)))
    }
}

impl<S: FoodSource> GameState<S> {
    /// Creates a freshly reset state drawing food cells from `food_source`.
    #[must_use]
    pub fn with_food_source(bounds: GridSize, food_source: S) -> Self {
        debug_assert!(
            bounds.total_cells() > INITIAL_SNAKE_LENGTH,
            "grid must leave room for food"
        );

        let mut state = Self {
            snake: Snake::new(Position::new(0, 0), Direction::Right, 1),
            food: None,
            score: 0,
            status: GameStatus::Playing,
            death_reason: None,
            tick_count: 0,
            bounds,
            food_source,
        };
        state.reset();
        state
    }

    /// Replaces the snake and food with an explicit layout, keeping the
    /// score and food source. Intended for tests and scripted replays; the
    /// game loop never calls it.
    ///
    /// # Panics
    ///
    /// When the snake leaves the grid or the food overlaps the snake.
    pub fn set_layout(&mut self, snake: Snake, food: Option<Position>) {
        assert!(
            snake.segments().all(|cell| cell.is_within_bounds(self.bounds)),
            "snake must lie inside the grid"
        );
        if let Some(food) = food {
            assert!(
                food.is_within_bounds(self.bounds) && !snake.occupies(food),
                "food must be on a free cell"
            );
        }

        self.snake = snake;
        self.food = food;
    }

    /// Puts a three-cell snake in the middle of the grid facing right and
    /// starts a new game.
    pub fn reset(&mut self) {
        let head = Position {
            x: i32::from(self.bounds.width / 2),
            y: i32::from(self.bounds.height / 2),
        };

        self.snake = Snake::new(head, Direction::Right, INITIAL_SNAKE_LENGTH);
        self.food = place_food(&mut self.food_source, self.bounds, &self.snake);
        self.score = 0;
        self.status = GameStatus::Playing;
        self.death_reason = None;
        self.tick_count = 0;

        debug!(
            "reset {}x{} grid, head at {:?}, food at {:?}",
            self.bounds.width, self.bounds.height, head, self.food
        );
    }

    /// Buffers a turn for the next tick. Reversing into the neck is ignored,
    /// and so is any turn once the game has ended.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.has_ended() {
            return;
        }
        self.snake.buffer_direction(direction);
    }

    /// Flips between playing and paused. Inert once the game has ended.
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Playing => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Playing,
            other => other,
        };
    }

    /// Applies one tick's worth of collapsed input.
    ///
    /// Restart only acts after a game over or victory. A restart consumes
    /// the pause toggle of the same batch, so the new game always starts
    /// playing; the turn is buffered on whichever game is current.
    pub fn apply_commands(&mut self, commands: TickCommands) {
        if commands.restart && self.has_ended() {
            self.reset();
        } else if commands.toggle_pause {
            self.toggle_pause();
        }

        if let Some(direction) = commands.direction {
            self.set_direction(direction);
        }
    }

    /// Advances simulation by one gameplay tick.
    pub fn step(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }

        self.tick_count += 1;
        self.snake.apply_pending_direction();
        let next_head = self.snake.next_head();

        if !next_head.is_within_bounds(self.bounds) {
            self.end_game(DeathReason::WallCollision);
            return;
        }

        // Checked before the tail moves, so chasing the tail is fatal too.
        if self.snake.occupies(next_head) {
            self.end_game(DeathReason::SelfCollision);
            return;
        }

        self.snake.push_head(next_head);

        if self.food == Some(next_head) {
            self.score += 1;
            self.food = place_food(&mut self.food_source, self.bounds, &self.snake);

            if self.food.is_none() {
                self.status = GameStatus::Victory;
                info!(
                    "grid filled after {} ticks, score {}",
                    self.tick_count, self.score
                );
            }
            return;
        }

        let popped = self.snake.pop_tail();
        debug_assert!(popped.is_some(), "a grown snake always has a tail to drop");
    }

    fn end_game(&mut self, reason: DeathReason) {
        self.status = GameStatus::GameOver;
        self.death_reason = Some(reason);
        info!(
            "game over ({reason:?}) after {} ticks, score {}",
            self.tick_count, self.score
        );
    }
}

impl<S> GameState<S> {
    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Current food cell; `None` only after a victory.
    #[must_use]
    pub fn food(&self) -> Option<Position> {
        self.food
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    /// True after a collision or a filled grid.
    #[must_use]
    pub fn has_ended(&self) -> bool {
        matches!(self.status, GameStatus::GameOver | GameStatus::Victory)
    }

    /// Simulation rate for the current score.
    #[must_use]
    pub fn ticks_per_second(&self) -> u32 {
        ticks_per_second(self.score)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::food::ScriptedCells;
    use crate::input::{Direction, GameInput, TickCommands};
    use crate::snake::{Position, Snake};

    use super::{DeathReason, GameState, GameStatus};

    fn grid(width: u16, height: u16) -> GridSize {
        GridSize { width, height }
    }

    #[test]
    fn reset_centers_snake_facing_right() {
        let state = GameState::new_with_seed(grid(30, 20), 1);

        let cells: Vec<_> = state.snake().segments().copied().collect();
        assert_eq!(
            cells,
            vec![
                Position::new(15, 10),
                Position::new(14, 10),
                Position::new(13, 10)
            ]
        );
        assert_eq!(state.snake().direction(), Direction::Right);
        assert_eq!(state.snake().pending_direction(), Direction::Right);
        assert_eq!(state.score(), 0);
        assert_eq!(state.status(), GameStatus::Playing);

        let food = state.food().expect("food is placed on reset");
        assert!(!state.snake().occupies(food));
    }

    #[test]
    fn snake_grows_after_eating_food() {
        let mut state =
            GameState::with_food_source(grid(10, 10), ScriptedCells::new(vec![Position::new(0, 0)]));
        state.set_layout(
            Snake::new(Position::new(3, 1), Direction::Right, 3),
            Some(Position::new(5, 1)),
        );

        state.step();
        assert_eq!(state.snake().len(), 3);
        assert_eq!(state.score(), 0);

        state.step();
        assert_eq!(state.snake().len(), 4);
        assert_eq!(state.score(), 1);
        assert_eq!(state.snake().head(), Position::new(5, 1));
        assert_eq!(state.food(), Some(Position::new(0, 0)));
    }

    #[test]
    fn snake_collision_with_wall_sets_game_over() {
        let mut state = GameState::new_with_seed(grid(4, 4), 2);
        state.set_layout(Snake::new(Position::new(3, 1), Direction::Right, 2), None);

        state.step();

        assert_eq!(state.status(), GameStatus::GameOver);
        assert_eq!(state.death_reason(), Some(DeathReason::WallCollision));
        assert_eq!(state.snake().head(), Position::new(3, 1));
    }

    #[test]
    fn snake_collision_with_self_sets_game_over() {
        let mut state = GameState::new_with_seed(grid(6, 6), 3);
        state.set_layout(
            Snake::from_segments(
                vec![
                    Position::new(2, 2),
                    Position::new(2, 3),
                    Position::new(1, 3),
                    Position::new(1, 2),
                    Position::new(1, 1),
                ],
                Direction::Up,
            ),
            None,
        );

        state.set_direction(Direction::Left);
        state.step();

        assert_eq!(state.status(), GameStatus::GameOver);
        assert_eq!(state.death_reason(), Some(DeathReason::SelfCollision));
        assert_eq!(state.snake().len(), 5);
    }

    #[test]
    fn moving_into_the_tail_cell_is_a_collision() {
        let mut state = GameState::new_with_seed(grid(6, 6), 4);
        state.set_layout(
            Snake::from_segments(
                vec![
                    Position::new(2, 2),
                    Position::new(3, 2),
                    Position::new(3, 3),
                    Position::new(2, 3),
                ],
                Direction::Left,
            ),
            None,
        );

        state.set_direction(Direction::Down);
        state.step();

        assert!(state.is_game_over());
    }

    #[test]
    fn steps_are_inert_while_paused() {
        let mut state = GameState::new_with_seed(grid(30, 20), 5);
        state.toggle_pause();
        let snake = state.snake().clone();
        let food = state.food();

        for _ in 0..10 {
            state.step();
        }

        assert!(state.is_paused());
        assert_eq!(state.snake(), &snake);
        assert_eq!(state.food(), food);
        assert_eq!(state.score(), 0);
        assert_eq!(state.tick_count(), 0);

        state.toggle_pause();
        state.step();
        assert_eq!(state.snake().head(), Position::new(16, 10));
    }

    #[test]
    fn pause_and_turns_are_inert_after_game_over() {
        let mut state = GameState::new_with_seed(grid(4, 4), 6);
        state.set_layout(Snake::new(Position::new(3, 1), Direction::Right, 2), None);
        state.step();
        assert!(state.is_game_over());

        state.toggle_pause();
        state.set_direction(Direction::Up);

        assert_eq!(state.status(), GameStatus::GameOver);
        assert_eq!(state.snake().pending_direction(), Direction::Right);
    }

    #[test]
    fn restart_only_applies_after_game_over() {
        let mut state = GameState::new_with_seed(grid(30, 20), 7);
        state.step();
        state.step();

        let mut restart = TickCommands::default();
        restart.record(GameInput::Restart);
        state.apply_commands(restart);
        assert_eq!(state.tick_count(), 2);

        state.set_layout(Snake::new(Position::new(29, 10), Direction::Right, 3), None);
        state.step();
        assert!(state.is_game_over());

        state.apply_commands(restart);
        assert_eq!(state.status(), GameStatus::Playing);
        assert_eq!(state.snake().head(), Position::new(15, 10));
        assert_eq!(state.tick_count(), 0);
        assert_eq!(state.death_reason(), None);
    }

    #[test]
    fn turn_buffered_while_paused_applies_on_resume() {
        let mut state = GameState::with_food_source(
            grid(30, 20),
            ScriptedCells::new(vec![Position::new(0, 0)]),
        );
        state.toggle_pause();

        state.set_direction(Direction::Up);
        state.step();
        assert_eq!(state.snake().head(), Position::new(15, 10));
        assert_eq!(state.snake().pending_direction(), Direction::Up);

        state.toggle_pause();
        state.step();
        assert_eq!(state.snake().head(), Position::new(15, 9));
        assert_eq!(state.snake().direction(), Direction::Up);
    }

    #[test]
    fn restart_with_pause_in_same_batch_starts_playing() {
        let mut state = GameState::with_food_source(
            grid(30, 20),
            ScriptedCells::new(vec![Position::new(0, 0)]),
        );
        state.set_layout(Snake::new(Position::new(29, 10), Direction::Right, 3), None);
        state.step();
        assert!(state.is_game_over());

        let mut commands = TickCommands::default();
        commands.record(GameInput::TogglePause);
        commands.record(GameInput::Restart);
        commands.record(GameInput::Direction(Direction::Down));
        state.apply_commands(commands);

        assert_eq!(state.status(), GameStatus::Playing);
        assert_eq!(state.snake().head(), Position::new(15, 10));
        assert_eq!(state.snake().pending_direction(), Direction::Down);

        state.step();
        assert_eq!(state.snake().head(), Position::new(15, 11));
    }

    #[test]
    fn pause_and_turn_in_same_batch_while_playing() {
        let mut state = GameState::with_food_source(
            grid(30, 20),
            ScriptedCells::new(vec![Position::new(0, 0)]),
        );

        let mut commands = TickCommands::default();
        commands.record(GameInput::Restart);
        commands.record(GameInput::TogglePause);
        commands.record(GameInput::Direction(Direction::Up));
        state.apply_commands(commands);

        assert!(state.is_paused());
        assert_eq!(state.snake().pending_direction(), Direction::Up);

        state.step();
        assert_eq!(state.snake().head(), Position::new(15, 10));
    }

    #[test]
    fn filling_the_grid_is_a_victory() {
        let mut state =
            GameState::with_food_source(grid(4, 2), ScriptedCells::new(vec![Position::new(0, 0)]));
        state.set_layout(
            Snake::from_segments(
                vec![
                    Position::new(1, 0),
                    Position::new(2, 0),
                    Position::new(3, 0),
                    Position::new(3, 1),
                    Position::new(2, 1),
                    Position::new(1, 1),
                    Position::new(0, 1),
                ],
                Direction::Left,
            ),
            Some(Position::new(0, 0)),
        );

        state.step();

        assert_eq!(state.status(), GameStatus::Victory);
        assert_eq!(state.score(), 1);
        assert_eq!(state.snake().len(), 8);
        assert_eq!(state.food(), None);

        let snake = state.snake().clone();
        state.step();
        assert_eq!(state.snake(), &snake);
    }

    #[test]
    fn speed_follows_score() {
        let mut state = GameState::with_food_source(
            grid(30, 20),
            ScriptedCells::new(vec![Position::new(0, 0), Position::new(0, 1)]),
        );
        assert_eq!(state.ticks_per_second(), 10);

        for x in 16..21 {
            let food = Position::new(x, 10);
            let snake = state.snake().clone();
            state.set_layout(snake, Some(food));
            state.step();
        }

        assert_eq!(state.score(), 5);
        assert_eq!(state.ticks_per_second(), 11);
    }
}
