//! Terminal drawings for the chart configs produced by `render`.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup},
};

use crate::{
    format,
    render::{bars::BarRow, donut::DonutConfig, trend::TrendConfig},
    ui::theme::Theme,
};

const STRIP_CELL: &str = "█";
const TRACK_EMPTY: &str = "░";
const TRACK_MARKER: &str = "│";

/// One row of colored cells, each slice taking a width proportional to its
/// share. The hovered slice is drawn bold, the rest dimmed.
pub fn donut_strip(config: &DonutConfig, width: usize) -> Line<'static> {
    if width == 0 || config.total <= 0.0 {
        return Line::default();
    }

    let mut spans = Vec::new();
    let mut used = 0usize;
    let last = config.slices.len().saturating_sub(1);
    for (i, slice) in config.slices.iter().enumerate() {
        let cells = if i == last {
            width.saturating_sub(used)
        } else {
            ((slice.percent / 100.0) * width as f64).round() as usize
        };
        let cells = cells.min(width.saturating_sub(used));
        used += cells;

        let mut style = Style::default().fg(slice.color);
        match config.hovered {
            Some(h) if h == i => style = style.add_modifier(Modifier::BOLD),
            Some(_) => style = style.add_modifier(Modifier::DIM),
            None => {}
        }
        spans.push(Span::styled(STRIP_CELL.repeat(cells), style));
    }
    Line::from(spans)
}

/// Legend rows: color swatch, label, amount, share.
pub fn donut_legend(config: &DonutConfig, theme: &Theme) -> Vec<Line<'static>> {
    config
        .slices
        .iter()
        .enumerate()
        .map(|(i, slice)| {
            let marker = if config.hovered == Some(i) { "▸" } else { " " };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.accent)),
                Span::styled("● ", Style::default().fg(slice.color)),
                Span::styled(
                    format!("{:<16}", slice.label),
                    Style::default().fg(theme.text),
                ),
                Span::raw(format::currency(slice.value)),
                Span::styled(
                    format!("  {:.1}%", slice.percent),
                    Style::default().fg(theme.text_muted),
                ),
            ])
        })
        .collect()
}

/// Grouped income/expense bars, one group per month.
pub fn trend_chart<'a>(config: &'a TrendConfig, theme: &Theme) -> BarChart<'a> {
    let max = config.max().max(1.0).ceil() as u64;
    let mut chart = BarChart::default()
        .bar_width(3)
        .bar_gap(0)
        .group_gap(2)
        .max(max)
        .label_style(Style::default().fg(theme.text_muted));

    for (i, label) in config.labels.iter().enumerate() {
        let income = config.income.get(i).copied().unwrap_or_default();
        let expense = config.expense.get(i).copied().unwrap_or_default();
        let bars = [
            trend_bar(income, Style::default().fg(theme.positive)),
            trend_bar(expense, Style::default().fg(theme.negative)),
        ];
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(label.clone()))
                .bars(&bars),
        );
    }
    chart
}

fn trend_bar(value: f64, style: Style) -> Bar<'static> {
    Bar::default()
        .value(value.max(0.0).round() as u64)
        .text_value(format::currency_short(value))
        .style(style)
        .value_style(style.add_modifier(Modifier::REVERSED))
}

/// A fixed-width track filled to `row.fill`, with the limit marker drawn
/// at its position when the row has one.
pub fn limit_track(row: &BarRow, width: usize, theme: &Theme) -> Vec<Span<'static>> {
    if width == 0 {
        return Vec::new();
    }
    let filled = ((row.fill / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    let marker_at = row
        .marker
        .map(|pos| (((pos / 100.0) * width as f64).round() as usize).min(width - 1));

    let mut spans = vec![Span::styled(
        STRIP_CELL.repeat(filled),
        Style::default().fg(row.color),
    )];
    let empty_style = Style::default().fg(theme.border);
    match marker_at {
        Some(at) if at >= filled => {
            spans.push(Span::styled(TRACK_EMPTY.repeat(at - filled), empty_style));
            spans.push(Span::styled(TRACK_MARKER, Style::default().fg(theme.warning)));
            spans.push(Span::styled(
                TRACK_EMPTY.repeat(width - at - 1),
                empty_style,
            ));
        }
        _ => spans.push(Span::styled(
            TRACK_EMPTY.repeat(width - filled),
            empty_style,
        )),
    }
    spans
}

/// `₹1,200.00 / ₹1,000.00` when a limit exists, otherwise just the total.
pub fn spent_label(row: &BarRow) -> String {
    match row.limit {
        Some(limit) => format!(
            "{} / {}",
            format::currency(row.total),
            format::currency(limit)
        ),
        None => format::currency(row.total),
    }
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use super::*;
    use crate::state::CategorySummary;

    fn width_of(spans: &[Span<'_>]) -> usize {
        spans.iter().map(|s| s.content.chars().count()).sum()
    }

    fn row(fill: f64, marker: Option<f64>) -> BarRow {
        BarRow {
            category: "Travel".to_string(),
            icon: "✈️",
            total: 300.0,
            limit: marker.map(|_| 600.0),
            percent: fill,
            fill,
            over_limit: false,
            color: Color::Cyan,
            marker,
        }
    }

    #[test]
    fn track_keeps_its_width_with_and_without_marker() {
        let theme = Theme::default();
        assert_eq!(width_of(&limit_track(&row(50.0, Some(100.0)), 20, &theme)), 20);
        assert_eq!(width_of(&limit_track(&row(100.0, None), 20, &theme)), 20);
        assert_eq!(width_of(&limit_track(&row(0.0, None), 20, &theme)), 20);
    }

    #[test]
    fn strip_fills_requested_width() {
        let config = DonutConfig::from_categories(&[
            CategorySummary {
                category: "Rent".to_string(),
                total: 2.0,
            },
            CategorySummary {
                category: "Travel".to_string(),
                total: 1.0,
            },
        ]);
        let line = donut_strip(&config, 30);
        assert_eq!(width_of(&line.spans), 30);
    }

    #[test]
    fn spent_label_shows_limit() {
        assert_eq!(spent_label(&row(50.0, Some(100.0))), "₹300.00 / ₹600.00");
        assert_eq!(spent_label(&row(50.0, None)), "₹300.00");
    }
}
