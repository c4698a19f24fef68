use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::{
    app::AppState,
    render::list::TxRow,
    state::{TransactionKind, TypeFilter},
    ui::{components::card::Card, theme::Theme},
};

const NO_NOTE: &str = "No note";

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_header(frame, layout[0], state, theme);
    render_list(frame, layout[1], state, theme);
}

fn render_header(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut spans = Vec::new();
    for filter in TypeFilter::ALL {
        let style = if filter == state.view.filter {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(theme.text_muted)
        };
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
        spans.push(Span::raw(" "));
    }

    spans.push(Span::styled("  Search: ", Style::default().fg(theme.text_muted)));
    let search_style = if state.records.searching {
        Style::default().fg(theme.text).add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default().fg(theme.text)
    };
    spans.push(Span::styled(state.view.search.clone(), search_style));
    if state.records.searching {
        spans.push(Span::styled("▏", Style::default().fg(theme.accent)));
    }

    let title = state.renderers.list.count_label.clone();
    Card::new(&title, theme)
        .focused(state.records.searching)
        .render_with(frame, area, Paragraph::new(Line::from(spans)));
}

fn render_list(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let view = &state.renderers.list;
    let card = Card::new("Transactions", theme);

    if let Some(message) = view.empty_message {
        card.render_with(
            frame,
            area,
            Paragraph::new(Line::from(message))
                .style(Style::default().fg(theme.text_muted))
                .alignment(Alignment::Center),
        );
        return;
    }

    let items: Vec<ListItem<'_>> = view.rows.iter().map(|row| row_item(row, theme)).collect();
    let mut list_state = ListState::default();
    list_state.select(Some(state.records.selected));

    let list = List::new(items)
        .block(card.block())
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn row_item<'a>(row: &'a TxRow, theme: &Theme) -> ListItem<'a> {
    let amount_color = match row.kind {
        TransactionKind::Income => theme.positive,
        TransactionKind::Expense => theme.negative,
    };
    let note = row.note.as_deref().unwrap_or(NO_NOTE);

    let line = Line::from(vec![
        Span::raw(format!("{} ", row.icon)),
        Span::styled(
            format!("{:<18}", row.category),
            Style::default().fg(theme.text),
        ),
        Span::styled(
            format!("{:<28}", note),
            Style::default().fg(theme.text_muted),
        ),
        Span::styled(format!("{:>16}", row.amount), Style::default().fg(amount_color)),
        Span::styled(format!("  {}", row.date), Style::default().fg(theme.dim)),
    ]);

    // A row with a delete in flight is dimmed and its `d` shortcut is inert.
    let style = if row.pending {
        Style::default().add_modifier(Modifier::DIM | Modifier::CROSSED_OUT)
    } else {
        Style::default()
    };
    ListItem::new(line).style(style)
}
