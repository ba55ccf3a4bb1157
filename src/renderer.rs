use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::config::{
    CELL_WIDTH, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN, GLYPH_SNAKE_HEAD_LEFT,
    GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GLYPH_SNAKE_TAIL, GridSize, Theme,
};
use crate::game::{GameState, GameStatus};
use crate::input::Direction;
use crate::snake::Position;
use crate::ui::hud::{HUD_HEIGHT, render_hud};
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_victory_menu};

/// Renders the full game frame from immutable state.
pub fn render<S>(frame: &mut Frame<'_>, state: &GameState<S>, theme: &Theme) {
    let area = frame.area();
    let bounds = state.bounds();
    let field_width = bounds.width * CELL_WIDTH + 2;
    let field_height = bounds.height + 2;

    if area.width < field_width || area.height < field_height + HUD_HEIGHT {
        render_too_small(frame, area, field_width, field_height + HUD_HEIGHT, theme);
        return;
    }

    let [column] = Layout::horizontal([Constraint::Length(field_width)])
        .flex(Flex::Center)
        .areas(area);
    let [play_area, hud_area] = Layout::vertical([
        Constraint::Length(field_height),
        Constraint::Length(HUD_HEIGHT),
    ])
    .flex(Flex::Center)
    .areas(column);

    let block = Block::bordered()
        .border_style(Style::new().fg(theme.border_fg))
        .style(Style::new().bg(theme.field_bg));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, state, theme);
    render_snake(frame, inner, state, theme);
    render_hud(frame, hud_area, state, theme);

    match state.status() {
        GameStatus::Paused => render_pause_menu(frame, play_area, theme),
        GameStatus::GameOver => {
            render_game_over_menu(frame, play_area, state.score(), state.death_reason(), theme);
        }
        GameStatus::Victory => render_victory_menu(frame, play_area, state.score(), theme),
        GameStatus::Playing => {}
    }
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect, width: u16, height: u16, theme: &Theme) {
    let message = format!("Terminal too small: need {width}x{height}, [Q] quits");
    let [rows] = Layout::vertical([Constraint::Length(3)])
        .flex(Flex::Center)
        .areas(area);

    frame.render_widget(
        Paragraph::new(message)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::new().fg(theme.overlay_alert)),
        rows,
    );
}

fn render_food<S>(frame: &mut Frame<'_>, inner: Rect, state: &GameState<S>, theme: &Theme) {
    let Some(food) = state.food() else {
        return;
    };
    let Some((x, y)) = logical_to_terminal(inner, state.bounds(), food) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake<S>(frame: &mut Frame<'_>, inner: Rect, state: &GameState<S>, theme: &Theme) {
    let snake = state.snake();
    let tail = snake.tail();

    let buffer = frame.buffer_mut();
    for (index, segment) in snake.segments().enumerate() {
        let Some((x, y)) = logical_to_terminal(inner, state.bounds(), *segment) else {
            continue;
        };

        let (glyph, style) = if index == 0 {
            (
                head_glyph(snake.direction()),
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            )
        } else if *segment == tail {
            (GLYPH_SNAKE_TAIL, Style::new().fg(theme.snake_tail))
        } else {
            (GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body))
        };

        buffer.set_string(x, y, glyph, style);
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x + CELL_WIDTH > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
