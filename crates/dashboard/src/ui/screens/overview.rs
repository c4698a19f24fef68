use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::{
    app::AppState,
    format,
    render::{donut, insight::InsightTone, stats::BalanceTone},
    ui::{
        components::{
            card::{Card, StatCard},
            charts,
        },
        theme::Theme,
    },
};

const EMPTY_DONUT: &str = "No expense data yet";
const EMPTY_TREND: &str = "No trend data yet";

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let bars = &state.renderers.bars;
    // The category section disappears entirely when there is nothing to show.
    let bars_height = if bars.is_empty() {
        0
    } else {
        bars.len() as u16 + 2
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Stat cards
            Constraint::Length(4),           // Insight banner
            Constraint::Min(8),              // Donut + trend
            Constraint::Length(bars_height), // Category bars
        ])
        .split(area);

    render_stats(frame, layout[0], state, theme);
    render_insight(frame, layout[1], state, theme);

    let charts_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(layout[2]);
    render_donut(frame, charts_row[0], state, theme);
    render_trend(frame, charts_row[1], state, theme);

    if !bars.is_empty() {
        render_bars(frame, layout[3], state, theme);
    }
}

fn render_stats(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let stats = &state.renderers.stats;
    let (balance_text, balance_color) = match stats.balance_tone {
        BalanceTone::NonNegative => (stats.balance.text(), theme.text),
        BalanceTone::Negative => (format!("-{}", stats.balance.text()), theme.negative),
    };

    StatCard::new("Balance", balance_text, theme)
        .value_style(Style::default().fg(balance_color))
        .render(frame, cols[0]);
    StatCard::new("Income", stats.income.text(), theme)
        .value_style(Style::default().fg(theme.positive))
        .render(frame, cols[1]);
    StatCard::new("Expenses", stats.expense.text(), theme)
        .value_style(Style::default().fg(theme.negative))
        .render(frame, cols[2]);
}

fn render_insight(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let view = &state.renderers.insight;
    let highlight = match view.tone {
        InsightTone::Warning => theme.warning,
        InsightTone::Praise => theme.positive,
        InsightTone::Neutral => theme.accent,
    };

    let spans: Vec<Span<'_>> = view
        .segments
        .iter()
        .map(|(text, highlighted)| {
            if *highlighted {
                Span::styled(
                    text.as_str(),
                    Style::default().fg(highlight).add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(text.as_str(), Style::default().fg(theme.text))
            }
        })
        .collect();

    let title = if view.source.is_empty() {
        "Insights".to_string()
    } else {
        format!("Insights · {}", view.source)
    };
    Card::new(&title, theme).render_with(
        frame,
        area,
        Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true }),
    );
}

fn render_donut(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card = Card::new("Spending by category", theme);
    let Some(config) = state.renderers.donut.chart() else {
        card.render_with(
            frame,
            area,
            Paragraph::new(Line::from(EMPTY_DONUT))
                .style(Style::default().fg(theme.text_muted))
                .alignment(Alignment::Center),
        );
        return;
    };

    let inner = card.inner(area);
    card.render_frame(frame, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Center label
            Constraint::Length(1), // Strip
            Constraint::Min(0),    // Legend
        ])
        .split(inner);

    let center = match config.hovered.and_then(|i| config.tooltip(i)) {
        Some(tooltip) => format!("{}{tooltip}", config.center_label()),
        None => format!("{} of {}", donut::CENTER_IDLE, format::currency(config.total)),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            center,
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        layout[0],
    );
    frame.render_widget(
        Paragraph::new(charts::donut_strip(config, layout[1].width as usize)),
        layout[1],
    );
    frame.render_widget(
        Paragraph::new(charts::donut_legend(config, theme)),
        layout[2],
    );
}

fn render_trend(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card = Card::new("Monthly trend", theme);
    match state.renderers.trend.chart() {
        Some(config) => card.render_with(frame, area, charts::trend_chart(config, theme)),
        None => card.render_with(
            frame,
            area,
            Paragraph::new(Line::from(EMPTY_TREND))
                .style(Style::default().fg(theme.text_muted))
                .alignment(Alignment::Center),
        ),
    }
}

fn render_bars(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let title = if state.renderers.limits_enabled() {
        "Categories & limits"
    } else {
        "Top categories"
    };
    let card = Card::new(title, theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let label_width = 22usize;
    let amount_width = 26usize;
    let track_width = (inner.width as usize).saturating_sub(label_width + amount_width + 2);

    let lines: Vec<Line<'_>> = state
        .renderers
        .bars
        .iter()
        .map(|row| {
            let name_style = if row.over_limit {
                Style::default().fg(theme.error).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            let mut spans = vec![Span::styled(
                format!("{} {:<width$}", row.icon, row.category, width = label_width - 3),
                name_style,
            )];
            spans.extend(charts::limit_track(row, track_width, theme));
            spans.push(Span::styled(
                format!("  {:>width$}", charts::spent_label(row), width = amount_width),
                Style::default().fg(theme.text_muted),
            ));
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
