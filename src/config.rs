use std::time::Duration;

use ratatui::style::Color;

use crate::error::ConfigError;

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 30;

/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Smallest grid that fits the three-cell starting snake with room to move.
pub const MIN_GRID_WIDTH: u16 = 4;
pub const MIN_GRID_HEIGHT: u16 = 2;

pub const MAX_GRID_WIDTH: u16 = 200;
pub const MAX_GRID_HEIGHT: u16 = 100;

/// Segments in a freshly reset snake.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Tick rate at score zero.
pub const BASE_TICKS_PER_SECOND: u32 = 10;

/// Score needed per speed level increase.
pub const POINTS_PER_SPEED_LEVEL: u32 = 5;

/// Terminal columns used to draw one logical cell.
pub const CELL_WIDTH: u16 = 2;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Validates user-provided dimensions.
    pub fn new(width: u16, height: u16) -> Result<Self, ConfigError> {
        if width < MIN_GRID_WIDTH || height < MIN_GRID_HEIGHT {
            return Err(ConfigError::GridTooSmall {
                width,
                height,
                min_width: MIN_GRID_WIDTH,
                min_height: MIN_GRID_HEIGHT,
            });
        }

        if width > MAX_GRID_WIDTH || height > MAX_GRID_HEIGHT {
            return Err(ConfigError::GridTooLarge {
                width,
                height,
                max_width: MAX_GRID_WIDTH,
                max_height: MAX_GRID_HEIGHT,
            });
        }

        Ok(Self { width, height })
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
        }
    }
}

/// Simulation rate for a given score: one extra tick per second every
/// `POINTS_PER_SPEED_LEVEL` points.
#[must_use]
pub fn ticks_per_second(score: u32) -> u32 {
    BASE_TICKS_PER_SECOND + score / POINTS_PER_SPEED_LEVEL
}

/// Wall-clock duration of one tick for a given score.
#[must_use]
pub fn tick_interval(score: u32) -> Duration {
    Duration::from_secs(1) / ticks_per_second(score)
}

/// Colors applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    pub field_bg: Color,
    pub border_fg: Color,
    pub hud_text: Color,
    pub hud_muted: Color,
    pub overlay_title: Color,
    pub overlay_alert: Color,
}

pub const THEME_CLASSIC: Theme = Theme {
    snake_head: Color::LightBlue,
    snake_body: Color::Green,
    snake_tail: Color::Rgb(0, 155, 0),
    food: Color::Red,
    field_bg: Color::Black,
    border_fg: Color::DarkGray,
    hud_text: Color::White,
    hud_muted: Color::DarkGray,
    overlay_title: Color::Yellow,
    overlay_alert: Color::Red,
};

pub const GLYPH_SNAKE_HEAD_UP: &str = "▲▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶▶";
pub const GLYPH_SNAKE_BODY: &str = "██";
pub const GLYPH_SNAKE_TAIL: &str = "▓▓";
pub const GLYPH_FOOD: &str = "()";
