use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::{
    app::{AppState, LimitsModal},
    ui::{components::hint_spans, overlays::popup, theme::Theme},
};

/// Rows are rebuilt from the current limits on every draw, so a saved
/// limit shows up here as soon as the follow-up refresh lands.
pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let (rect, block) = popup(frame, area, (60, 70), "Spending limits", theme);
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Category list
            Constraint::Length(1), // Input
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    let items: Vec<ListItem<'_>> = LimitsModal::rows(&state.view.limits)
        .into_iter()
        .map(|row| {
            let current_style = if row.current.is_some() {
                Style::default().fg(theme.text)
            } else {
                Style::default().fg(theme.dim)
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} {:<16}", row.icon, row.category)),
                Span::styled(row.current_label(), current_style),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(state.limits_modal.selected));
    frame.render_stateful_widget(
        List::new(items)
            .highlight_style(
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("» "),
        layout[0],
        &mut list_state,
    );

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("New limit for {}: ", state.limits_modal.selected_category()),
                Style::default().fg(theme.text_muted),
            ),
            Span::styled(state.limits_modal.input.clone(), Style::default().fg(theme.text)),
            Span::styled("▏", Style::default().fg(theme.accent)),
        ])),
        layout[1],
    );
    frame.render_widget(
        Paragraph::new(Line::from(hint_spans(
            &[("↑/↓", "category"), ("Enter", "save"), ("Esc", "close")],
            theme,
        ))),
        layout[2],
    );
}
