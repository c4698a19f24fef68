//! Projections from [`ViewState`] to what the terminal draws.
//!
//! Renderers never call each other. [`Renderers::fan_out`] is the only place
//! that drives all of them after a refresh.

pub mod bars;
pub mod chart;
pub mod donut;
pub mod insight;
pub mod list;
pub mod months;
pub mod stats;
pub mod trend;

use std::{
    collections::HashSet,
    time::{Duration, Instant},
};

use tracing::debug;

use crate::state::{Insight, TransactionId, ViewState};

use self::{
    bars::BarRow, donut::DonutRenderer, insight::InsightView, list::ListView,
    months::MonthOptions, stats::StatCounters, trend::TrendRenderer,
};

#[derive(Debug)]
pub struct Renderers {
    pub stats: StatCounters,
    pub list: ListView,
    pub donut: DonutRenderer,
    pub trend: TrendRenderer,
    pub bars: Vec<BarRow>,
    pub insight: InsightView,
    pub months: MonthOptions,
    limits_enabled: bool,
}

impl Renderers {
    pub fn new(animation: Duration, limits_enabled: bool) -> Self {
        Self {
            stats: StatCounters::new(animation),
            list: ListView::default(),
            donut: DonutRenderer::default(),
            trend: TrendRenderer::default(),
            bars: Vec::new(),
            insight: InsightView::default(),
            months: MonthOptions::default(),
            limits_enabled,
        }
    }

    pub fn limits_enabled(&self) -> bool {
        self.limits_enabled
    }

    /// Re-projects every view from `state`. Counter baselines are reset
    /// first so each refresh animates up from zero.
    pub fn fan_out(&mut self, state: &ViewState, pending: &HashSet<TransactionId>, now: Instant) {
        self.stats.reset_baselines();
        self.stats.render(&state.summary, now);
        self.render_list(state, pending);
        self.donut.render(&state.summary);
        self.trend.render(&state.summary);
        self.bars = bars::project(&state.summary, &state.limits, self.limits_enabled);
        debug!(
            rows = self.list.rows.len(),
            bars = self.bars.len(),
            "views re-rendered"
        );
    }

    /// Re-projects only the record list, after a filter, search or
    /// pending-delete change.
    pub fn render_list(&mut self, state: &ViewState, pending: &HashSet<TransactionId>) {
        self.list = ListView::project(state, pending);
    }

    pub fn render_insight(&mut self, insight: &Insight) {
        self.insight = InsightView::from_insight(insight);
    }

    pub fn render_months(&mut self, months: &[String]) {
        self.months = MonthOptions::from_months(months);
    }

    /// Advances running animations. Returns `true` while any is running.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.stats.tick(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CategorySummary, Summary, TrendPoint};

    #[test]
    fn fan_out_projects_every_view_from_one_snapshot() {
        let state = ViewState {
            summary: Summary {
                income: 5000.0,
                expense: 1500.0,
                balance: 3500.0,
                categories: vec![CategorySummary {
                    category: "Groceries".to_string(),
                    total: 1500.0,
                }],
                trend: vec![TrendPoint {
                    month: "2026-02".to_string(),
                    income: 5000.0,
                    expense: 1500.0,
                }],
            },
            ..ViewState::default()
        };
        let mut renderers = Renderers::new(Duration::from_millis(600), true);
        let now = Instant::now();
        renderers.fan_out(&state, &HashSet::new(), now);

        assert!(renderers.stats.balance.is_animating());
        assert!(renderers.donut.chart().is_some());
        assert!(renderers.trend.chart().is_some());
        assert_eq!(renderers.bars.len(), 1);
        assert_eq!(renderers.list.empty_message, Some(list::EMPTY_NO_DATA));

        renderers.tick(now + Duration::from_millis(600));
        assert_eq!(renderers.stats.balance.displayed(), 3500.0);
    }

    #[test]
    fn second_fan_out_restarts_counters_from_zero() {
        let state = ViewState {
            summary: Summary {
                balance: 100.0,
                ..Summary::default()
            },
            ..ViewState::default()
        };
        let mut renderers = Renderers::new(Duration::from_millis(600), false);
        let start = Instant::now();
        renderers.fan_out(&state, &HashSet::new(), start);
        renderers.tick(start + Duration::from_secs(1));
        assert_eq!(renderers.stats.balance.baseline(), 100.0);

        renderers.fan_out(&state, &HashSet::new(), start + Duration::from_secs(2));
        assert_eq!(renderers.stats.balance.baseline(), 0.0);
    }
}
