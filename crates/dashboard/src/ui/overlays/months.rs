use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem, ListState},
};

use crate::{
    app::AppState,
    ui::{overlays::popup, theme::Theme},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let (rect, block) = popup(frame, area, (40, 60), "Month", theme);
    let current = state.renderers.months.index_of(&state.view.month);

    let items: Vec<ListItem<'_>> = state
        .renderers
        .months
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let marker = if i == current { "● " } else { "  " };
            ListItem::new(format!("{marker}{}", option.label))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(state.month_picker.selected));
    let list = List::new(items)
        .block(block)
        .style(Style::default().fg(theme.text))
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");
    frame.render_stateful_widget(list, rect, &mut list_state);
}
