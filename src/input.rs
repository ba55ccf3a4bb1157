use std::io;
use std::time::Instant;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns true when `other` would reverse straight into the neck.
    #[must_use]
    pub fn is_opposite_of(self, other: Self) -> bool {
        self == other.opposite()
    }

    /// Unit step as `(dx, dy)`; y grows downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    TogglePause,
    Restart,
    Quit,
}

/// Everything received during one tick, collapsed to at most one turn
/// and a set of flags.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct TickCommands {
    pub direction: Option<Direction>,
    pub toggle_pause: bool,
    pub restart: bool,
    pub quit: bool,
}

impl TickCommands {
    /// Folds one input into the batch. The latest direction wins.
    pub fn record(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => self.direction = Some(direction),
            GameInput::TogglePause => self.toggle_pause = true,
            GameInput::Restart => self.restart = true,
            GameInput::Quit => self.quit = true,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Maps one terminal key event to a game input.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'C') => Some(GameInput::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d' | 'D') => {
            Some(GameInput::Direction(Direction::Right))
        }
        KeyCode::Char('p' | 'P' | ' ') => Some(GameInput::TogglePause),
        KeyCode::Char('r' | 'R') | KeyCode::Enter => Some(GameInput::Restart),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(GameInput::Quit),
        _ => None,
    }
}

/// Keyboard reader that drains terminal events between ticks.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Polls the terminal until `deadline`, collapsing every key press into
    /// one batch. Returns early once a quit is seen.
    pub fn collect_until(&mut self, deadline: Instant) -> io::Result<TickCommands> {
        let mut commands = TickCommands::default();

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || !event::poll(remaining)? {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if let Some(input) = map_key(key) {
                    commands.record(input);
                }
            }

            if commands.quit {
                break;
            }
        }

        Ok(commands)
    }
}
