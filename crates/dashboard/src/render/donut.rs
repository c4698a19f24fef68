//! Category donut: top five categories plus a synthetic "Other" slice.

use ratatui::style::Color;

use crate::{
    categories, format,
    render::chart::ChartSlot,
    state::{CategorySummary, Summary},
};

pub const TOP_SLICES: usize = 5;
pub const OTHER_LABEL: &str = "Other";
pub const CENTER_IDLE: &str = "100%";

#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    pub color: Color,
    /// Share of the grand total, 0..=100.
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DonutConfig {
    pub slices: Vec<Slice>,
    pub total: f64,
    pub hovered: Option<usize>,
}

impl DonutConfig {
    /// `totals` must be sorted descending.
    pub fn from_categories(totals: &[CategorySummary]) -> Self {
        let total: f64 = totals.iter().map(|c| c.total).sum();
        let slices = slice_values(totals)
            .into_iter()
            .map(|(label, value)| Slice {
                color: categories::color(&label),
                percent: percent_of(value, total),
                label,
                value,
            })
            .collect();
        Self {
            slices,
            total,
            hovered: None,
        }
    }

    pub fn center_label(&self) -> String {
        match self.hovered.and_then(|idx| self.slices.get(idx)) {
            Some(slice) => format!("{}%", slice.percent.round() as i64),
            None => CENTER_IDLE.to_string(),
        }
    }

    /// Tooltip text for a slice: ` ₹1,200.00 (45.3%)`.
    pub fn tooltip(&self, index: usize) -> Option<String> {
        self.slices.get(index).map(|slice| {
            let pct = (slice.percent * 10.0).round() / 10.0;
            format!(" {} ({pct:.1}%)", format::currency(slice.value))
        })
    }
}

/// Top five as-is, everything after folded into one "Other" entry when the
/// remainder is positive.
pub fn slice_values(categories: &[CategorySummary]) -> Vec<(String, f64)> {
    let mut values: Vec<(String, f64)> = categories
        .iter()
        .take(TOP_SLICES)
        .map(|c| (c.category.clone(), c.total))
        .collect();
    let rest: f64 = categories.iter().skip(TOP_SLICES).map(|c| c.total).sum();
    if rest > 0.0 {
        values.push((OTHER_LABEL.to_string(), rest));
    }
    values
}

fn percent_of(value: f64, total: f64) -> f64 {
    if total > 0.0 {
        value / total * 100.0
    } else {
        0.0
    }
}

#[derive(Debug)]
pub struct DonutRenderer {
    slot: ChartSlot<DonutConfig>,
}

impl Default for DonutRenderer {
    fn default() -> Self {
        Self {
            slot: ChartSlot::new("donut"),
        }
    }
}

impl DonutRenderer {
    pub fn render(&mut self, summary: &Summary) {
        if summary.categories.is_empty() {
            self.slot.teardown();
            return;
        }
        self.slot
            .mount(DonutConfig::from_categories(&summary.categories));
    }

    pub fn chart(&self) -> Option<&DonutConfig> {
        self.slot.get().map(|chart| chart.config())
    }

    pub fn slot(&self) -> &ChartSlot<DonutConfig> {
        &self.slot
    }

    /// Hover a slice by index; `None` (or an out-of-range index) un-hovers.
    pub fn hover(&mut self, index: Option<usize>) {
        if let Some(chart) = self.slot.get_mut() {
            let config = chart.config_mut();
            let len = config.slices.len();
            config.hovered = index.filter(|idx| *idx < len);
        }
    }

    pub fn hover_next(&mut self) {
        let next = match self.chart() {
            Some(config) if !config.slices.is_empty() => match config.hovered {
                Some(idx) => Some((idx + 1) % config.slices.len()),
                None => Some(0),
            },
            _ => None,
        };
        self.hover(next);
    }

    pub fn hover_prev(&mut self) {
        let prev = match self.chart() {
            Some(config) if !config.slices.is_empty() => match config.hovered {
                Some(0) | None => Some(config.slices.len() - 1),
                Some(idx) => Some(idx - 1),
            },
            _ => None,
        };
        self.hover(prev);
    }

    pub fn center_label(&self) -> String {
        self.chart()
            .map(DonutConfig::center_label)
            .unwrap_or_else(|| CENTER_IDLE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cats(totals: &[f64]) -> Vec<CategorySummary> {
        totals
            .iter()
            .enumerate()
            .map(|(i, total)| CategorySummary {
                category: format!("Cat{i}"),
                total: *total,
            })
            .collect()
    }

    #[test]
    fn folds_everything_past_five_into_other() {
        let values = slice_values(&cats(&[50.0, 40.0, 30.0, 20.0, 10.0, 7.0, 3.0]));
        assert_eq!(values.len(), 6);
        assert_eq!(values[5], (OTHER_LABEL.to_string(), 10.0));
    }

    #[test]
    fn zero_residual_adds_no_slice() {
        assert_eq!(
            slice_values(&cats(&[50.0, 40.0, 30.0, 20.0, 10.0, 0.0])).len(),
            5
        );
        assert_eq!(slice_values(&cats(&[5.0, 1.0])).len(), 2);
    }

    #[test]
    fn percentages_and_center_label() {
        let mut renderer = DonutRenderer::default();
        let summary = Summary {
            categories: cats(&[75.0, 25.0]),
            ..Summary::default()
        };
        renderer.render(&summary);
        assert_eq!(renderer.center_label(), "100%");

        renderer.hover(Some(1));
        assert_eq!(renderer.center_label(), "25%");
        let tooltip = renderer.chart().and_then(|c| c.tooltip(0));
        assert_eq!(tooltip.as_deref(), Some(" ₹75.00 (75.0%)"));

        renderer.hover(None);
        assert_eq!(renderer.center_label(), "100%");
        renderer.hover(Some(9));
        assert_eq!(renderer.center_label(), "100%");
    }

    #[test]
    fn hover_cycles_through_slices() {
        let mut renderer = DonutRenderer::default();
        renderer.render(&Summary {
            categories: cats(&[3.0, 2.0, 1.0]),
            ..Summary::default()
        });
        renderer.hover_prev();
        assert_eq!(renderer.chart().and_then(|c| c.hovered), Some(2));
        renderer.hover_next();
        assert_eq!(renderer.chart().and_then(|c| c.hovered), Some(0));
    }

    #[test]
    fn rerender_replaces_and_empty_tears_down() {
        let mut renderer = DonutRenderer::default();
        let summary = Summary {
            categories: cats(&[1.0]),
            ..Summary::default()
        };
        renderer.render(&summary);
        renderer.render(&summary);
        assert_eq!(renderer.slot().live_count(), 1);
        assert_eq!(renderer.slot().destroyed(), 1);

        renderer.render(&Summary::default());
        assert!(renderer.chart().is_none());
        assert_eq!(renderer.slot().live_count(), 0);
    }

    #[test]
    fn zero_total_has_zero_percentages() {
        let config = DonutConfig::from_categories(&cats(&[0.0, 0.0]));
        assert!(config.slices.iter().all(|s| s.percent == 0.0));
    }
}
