use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::{
    app::{AppState, Section},
    ui::{
        components::{hint_spans, tabs},
        overlays::popup,
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let (rect, block) = popup(frame, area, (70, 60), "Help", theme);
    frame.render_widget(Paragraph::new(help_lines(state, theme)).block(block), rect);
}

fn help_lines(state: &AppState, theme: &Theme) -> Vec<Line<'static>> {
    let heading = Style::default().fg(theme.text).add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(tabs::tab_shortcuts(theme)),
        Line::from(hint_spans(
            &[
                ("a", "add transaction"),
                ("m", "pick month"),
                ("l", "spending limits"),
                ("r", "refresh"),
            ],
            theme,
        )),
        Line::default(),
    ];

    match state.section {
        Section::Overview => {
            lines.push(Line::styled("Overview", heading));
            lines.push(Line::from(hint_spans(
                &[("←/→", "highlight slice"), ("Esc", "clear highlight")],
                theme,
            )));
        }
        Section::Records => {
            lines.push(Line::styled("Records", heading));
            lines.push(Line::from(hint_spans(
                &[
                    ("↑/↓", "select"),
                    ("/", "search"),
                    ("f", "all/income/expense"),
                    ("d", "delete"),
                ],
                theme,
            )));
        }
        Section::Assistant => {
            lines.push(Line::styled("Assistant", heading));
            lines.push(Line::from(hint_spans(&[("↑/↓", "scroll")], theme)));
        }
    }

    lines.push(Line::default());
    lines.push(Line::from(hint_spans(
        &[("Esc", "back/close"), ("Ctrl+C", "quit")],
        theme,
    )));
    lines
}
