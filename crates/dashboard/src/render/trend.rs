use crate::{
    format,
    render::chart::ChartSlot,
    state::{Summary, TrendPoint},
};

/// Grouped income/expense bars, one group per month, in server order.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendConfig {
    pub labels: Vec<String>,
    pub income: Vec<f64>,
    pub expense: Vec<f64>,
}

impl TrendConfig {
    pub fn from_points(points: &[TrendPoint]) -> Self {
        Self {
            labels: points.iter().map(|p| format::month_short(&p.month)).collect(),
            income: points.iter().map(|p| p.income).collect(),
            expense: points.iter().map(|p| p.expense).collect(),
        }
    }

    /// Largest value across both series, used for the axis label.
    pub fn max(&self) -> f64 {
        self.income
            .iter()
            .chain(self.expense.iter())
            .copied()
            .fold(0.0, f64::max)
    }
}

#[derive(Debug)]
pub struct TrendRenderer {
    slot: ChartSlot<TrendConfig>,
}

impl Default for TrendRenderer {
    fn default() -> Self {
        Self {
            slot: ChartSlot::new("trend"),
        }
    }
}

impl TrendRenderer {
    pub fn render(&mut self, summary: &Summary) {
        if summary.trend.is_empty() {
            self.slot.teardown();
            return;
        }
        self.slot.mount(TrendConfig::from_points(&summary.trend));
    }

    pub fn chart(&self) -> Option<&TrendConfig> {
        self.slot.get().map(|chart| chart.config())
    }

    pub fn slot(&self) -> &ChartSlot<TrendConfig> {
        &self.slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(month: &str, income: f64, expense: f64) -> TrendPoint {
        TrendPoint {
            month: month.to_string(),
            income,
            expense,
        }
    }

    #[test]
    fn labels_use_short_month_names_in_server_order() {
        let config = TrendConfig::from_points(&[
            point("2025-12", 10.0, 4.0),
            point("2026-01", 8.0, 12.0),
        ]);
        assert_eq!(config.labels, ["Dec", "Jan"]);
        assert_eq!(config.income, [10.0, 8.0]);
        assert_eq!(config.expense, [4.0, 12.0]);
        assert_eq!(config.max(), 12.0);
    }

    #[test]
    fn empty_trend_tears_down_stale_chart() {
        let mut renderer = TrendRenderer::default();
        renderer.render(&Summary {
            trend: vec![point("2026-01", 1.0, 1.0)],
            ..Summary::default()
        });
        assert!(renderer.chart().is_some());

        renderer.render(&Summary::default());
        assert!(renderer.chart().is_none());
        assert_eq!(renderer.slot().destroyed(), 1);
    }
}
