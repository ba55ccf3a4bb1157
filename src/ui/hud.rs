use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::game::GameState;

/// Rows reserved under the play field.
pub const HUD_HEIGHT: u16 = 2;

const HINT_TEXT: &str = "[Arrows/WASD] Move  [P] Pause  [Q] Quit";

/// Renders the score row and the key hint row.
pub fn render_hud<S>(frame: &mut Frame<'_>, area: Rect, state: &GameState<S>, theme: &Theme) {
    let [stats_area, hint_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(stats_line(
            state.score(),
            state.snake().len(),
            state.ticks_per_second(),
            theme,
        ))
        .alignment(Alignment::Left),
        stats_area,
    );

    frame.render_widget(
        Paragraph::new(Line::from(HINT_TEXT))
            .alignment(Alignment::Left)
            .style(Style::new().fg(theme.hud_muted)),
        hint_area,
    );
}

fn stats_line(score: u32, length: usize, ticks_per_second: u32, theme: &Theme) -> Line<'static> {
    let label = Style::new().fg(theme.hud_muted);
    let value = Style::new().fg(theme.hud_text).add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::styled("Score: ", label),
        Span::styled(score.to_string(), value),
        Span::styled("  Length: ", label),
        Span::styled(length.to_string(), value),
        Span::styled("  Speed: ", label),
        Span::styled(format!("{ticks_per_second}/s"), value),
    ])
}

#[cfg(test)]
mod tests {
    use crate::config::THEME_CLASSIC;

    use super::stats_line;

    #[test]
    fn stats_line_lists_score_length_and_speed() {
        let line = stats_line(7, 10, 11, &THEME_CLASSIC);

        assert_eq!(line.to_string(), "Score: 7  Length: 10  Speed: 11/s");
    }
}
