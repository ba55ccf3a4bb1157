use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Theme;
use crate::game::DeathReason;

/// Draws the pause overlay centered over the play field.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let lines = vec![
        title_line("PAUSED", theme),
        Line::from("[P] Resume"),
        Line::from("[Q] Quit"),
    ];
    render_overlay(frame, area, lines, theme);
}

/// Draws the game-over overlay with the final score and cause.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    death_reason: Option<DeathReason>,
    theme: &Theme,
) {
    let mut lines = vec![
        Line::from("GAME OVER").style(
            Style::new()
                .fg(theme.overlay_alert)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(format!("Score: {score}")),
    ];
    if let Some(reason) = death_reason {
        lines.push(Line::from(match reason {
            DeathReason::WallCollision => "Hit the wall",
            DeathReason::SelfCollision => "Hit yourself",
        }));
    }
    lines.push(Line::from("[R] Restart"));
    lines.push(Line::from("[Q] Quit"));

    render_overlay(frame, area, lines, theme);
}

/// Draws the overlay shown once the snake fills the grid.
pub fn render_victory_menu(frame: &mut Frame<'_>, area: Rect, score: u32, theme: &Theme) {
    let lines = vec![
        title_line("YOU WIN", theme),
        Line::from(format!("Score: {score}")),
        Line::from("[R] Restart"),
        Line::from("[Q] Quit"),
    ];
    render_overlay(frame, area, lines, theme);
}

fn title_line(text: &'static str, theme: &Theme) -> Line<'static> {
    Line::from(text).style(
        Style::new()
            .fg(theme.overlay_title)
            .add_modifier(Modifier::BOLD),
    )
}

fn render_overlay(frame: &mut Frame<'_>, area: Rect, lines: Vec<Line<'_>>, theme: &Theme) {
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0);
    let content_width = u16::try_from(content_width).unwrap_or(u16::MAX);
    let content_height = u16::try_from(lines.len()).unwrap_or(u16::MAX);

    let popup = centered_rect(
        area,
        content_width.saturating_add(4),
        content_height.saturating_add(2),
    );
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.hud_text).bg(theme.field_bg))
            .block(Block::bordered().border_style(Style::new().fg(theme.border_fg))),
        popup,
    );
}

/// Centers a `width` x `height` box in `area`, shrinking it to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
