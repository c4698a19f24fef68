pub mod form;
pub mod help;
pub mod limits;
pub mod months;

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
};

use crate::ui::{components::centered_rect, theme::Theme};

/// Clears a centered popup area and returns it with its framing block.
pub fn popup<'a>(
    frame: &mut Frame<'_>,
    area: Rect,
    (percent_x, percent_y): (u16, u16),
    title: &'a str,
    theme: &Theme,
) -> (Rect, Block<'a>) {
    let rect = centered_rect(percent_x, percent_y, area);
    frame.render_widget(Clear, rect);
    let block = Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(theme.accent),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.surface));
    (rect, block)
}
