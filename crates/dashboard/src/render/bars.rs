//! Per-category spending bars, scaled against a limit when one is set and
//! against the largest category otherwise.

use ratatui::style::Color;

use crate::{
    categories,
    state::{LimitMap, Summary},
};

pub const ROWS_WITHOUT_LIMITS: usize = 7;
pub const ROWS_WITH_LIMITS: usize = 10;
pub const OVER_LIMIT_COLOR: Color = Color::Rgb(0xef, 0x44, 0x44);
/// Where the limit sits on a limit-scaled track.
pub const LIMIT_MARKER_AT: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct BarRow {
    pub category: String,
    pub icon: &'static str,
    pub total: f64,
    pub limit: Option<f64>,
    /// Unclamped ratio in percent.
    pub percent: f64,
    /// `percent` clamped to 0..=100 for drawing.
    pub fill: f64,
    pub over_limit: bool,
    pub color: Color,
    /// Track position (percent) of the limit marker, if one is drawn.
    pub marker: Option<f64>,
}

pub fn row_count(limits_enabled: bool) -> usize {
    if limits_enabled {
        ROWS_WITH_LIMITS
    } else {
        ROWS_WITHOUT_LIMITS
    }
}

/// Relies on `summary.categories` being sorted descending: the first total
/// is the scale for categories without a limit.
pub fn project(summary: &Summary, limits: &LimitMap, limits_enabled: bool) -> Vec<BarRow> {
    let Some(max) = summary.categories.first().map(|c| c.total) else {
        return Vec::new();
    };

    summary
        .categories
        .iter()
        .take(row_count(limits_enabled))
        .map(|c| {
            let limit = if limits_enabled {
                limits.get(&c.category).copied().filter(|l| *l > 0.0)
            } else {
                None
            };
            let percent = match limit {
                Some(limit) => c.total / limit * 100.0,
                None if max > 0.0 => c.total / max * 100.0,
                None => 0.0,
            };
            let over_limit = limit.is_some_and(|limit| c.total > limit);
            let color = if over_limit {
                OVER_LIMIT_COLOR
            } else {
                categories::lookup(&c.category)
                    .map(|info| info.color)
                    .unwrap_or(categories::FALLBACK_BAR_COLOR)
            };
            let marker = (limit.is_some() && percent < 100.0).then_some(LIMIT_MARKER_AT);

            BarRow {
                category: c.category.clone(),
                icon: categories::icon(&c.category),
                total: c.total,
                limit,
                percent,
                fill: percent.clamp(0.0, 100.0),
                over_limit,
                color,
                marker,
            }
        })
        .collect()
}
