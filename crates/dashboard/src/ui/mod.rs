pub mod components;
pub mod keymap;
pub mod overlays;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{AppState, Overlay, Section};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let area = frame.area();
    let theme = Theme::default();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Length(2), // Tab bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, &theme);
    components::tabs::render_tabs(frame, layout[1], state.section, &theme);

    match state.section {
        Section::Overview => screens::overview::render(frame, layout[2], state, &theme),
        Section::Records => screens::records::render(frame, layout[2], state, &theme),
        Section::Assistant => screens::assistant::render(frame, layout[2], state, &theme),
    }

    render_bottom_bar(frame, layout[3], state, &theme);

    match state.overlay {
        Overlay::None => {}
        Overlay::Form => overlays::form::render(frame, area, state, &theme),
        Overlay::Months => overlays::months::render(frame, area, state, &theme),
        Overlay::Limits => overlays::limits::render(frame, area, state, &theme),
        Overlay::Help => overlays::help::render(frame, area, state, &theme),
    }
    components::toast::render(frame, area, state.toast.as_ref(), &theme);
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let month = state.renderers.months.label_for(&state.view.month);
    let refresh = if state.refreshing {
        "…".to_string()
    } else {
        state
            .last_refresh
            .map(|dt| dt.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_string())
    };

    let line = Line::from(vec![
        Span::styled("Server", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}  ", state.base_url)),
        Span::styled("Month", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {month}  ")),
        Span::styled("Refresh", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {refresh}")),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts = components::tabs::tab_shortcuts(theme);

    let context_hints = context_hints(state);
    if !context_hints.is_empty() {
        parts.push(Span::styled("  │  ", Style::default().fg(theme.border)));
        parts.extend(components::hint_spans(&context_hints, theme));
    }

    parts.push(Span::styled("  │  ", Style::default().fg(theme.border)));
    parts.extend(components::hint_spans(&[("?", "help"), ("q", "quit")], theme));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

fn context_hints(state: &AppState) -> Vec<(&'static str, &'static str)> {
    match state.section {
        Section::Overview => vec![
            ("a", "add"),
            ("m", "month"),
            ("l", "limits"),
            ("←/→", "slices"),
            ("r", "refresh"),
        ],
        Section::Records if state.records.searching => vec![("Enter", "done"), ("Esc", "done")],
        Section::Records => vec![
            ("/", "search"),
            ("f", "filter"),
            ("d", "delete"),
            ("a", "add"),
            ("m", "month"),
        ],
        Section::Assistant => vec![("↑/↓", "scroll")],
    }
}
