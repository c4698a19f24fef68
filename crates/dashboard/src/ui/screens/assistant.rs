use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::{
    app::AppState,
    chat::Sender,
    ui::{components::card::Card, theme::Theme},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card = Card::new("Assistant", theme);
    let inner = card.inner(area);

    let mut lines = Vec::new();
    let mut offset = 0u16;
    for (i, message) in state.chat.messages().iter().enumerate() {
        if i == state.chat.scroll() {
            offset = lines.len() as u16;
        }
        let (who, color) = match message.sender {
            Sender::Bot => ("Assistant", theme.accent),
            Sender::User => ("You", theme.positive),
        };
        lines.push(Line::from(Span::styled(
            who,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(message.text.as_str()));
        lines.push(Line::default());
    }

    // Keep the focused message near the bottom of the panel.
    let offset = offset.saturating_sub(inner.height.saturating_sub(3));
    card.render_with(
        frame,
        area,
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((offset, 0)),
    );
}
