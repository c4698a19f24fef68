//! Animated headline counters (balance, income, expense).
//!
//! Each counter interpolates from its baseline to a new target with an
//! ease-out curve, sampled once per frame. Counters share no state; a newer
//! target simply replaces an animation still in flight.

use std::time::{Duration, Instant};

use crate::{format, state::Summary};

pub const DEFAULT_DURATION: Duration = Duration::from_millis(600);

/// Cubic ease-out: `1 - (1 - t)^3`.
pub fn ease_out(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Animation {
    from: f64,
    to: f64,
    started: Instant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Counter {
    displayed: f64,
    baseline: f64,
    duration: Duration,
    animation: Option<Animation>,
}

impl Counter {
    pub fn new(duration: Duration) -> Self {
        Self {
            displayed: 0.0,
            baseline: 0.0,
            duration,
            animation: None,
        }
    }

    pub fn reset_baseline(&mut self) {
        self.baseline = 0.0;
    }

    pub fn animate_to(&mut self, target: f64, now: Instant) {
        self.animation = Some(Animation {
            from: self.baseline,
            to: target,
            started: now,
        });
    }

    /// Advances the animation to `now`. Returns `true` while still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(animation) = self.animation else {
            return false;
        };

        let progress = if self.duration.is_zero() {
            1.0
        } else {
            let elapsed = now.saturating_duration_since(animation.started);
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
        };

        if progress >= 1.0 {
            self.displayed = animation.to;
            self.baseline = animation.to;
            self.animation = None;
            return false;
        }

        self.displayed = animation.from + (animation.to - animation.from) * ease_out(progress);
        true
    }

    pub fn displayed(&self) -> f64 {
        self.displayed
    }

    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn text(&self) -> String {
        format::currency(self.displayed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BalanceTone {
    #[default]
    NonNegative,
    Negative,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCounters {
    pub balance: Counter,
    pub income: Counter,
    pub expense: Counter,
    /// Follows the sign of the balance target, not the animated value.
    pub balance_tone: BalanceTone,
}

impl StatCounters {
    pub fn new(duration: Duration) -> Self {
        Self {
            balance: Counter::new(duration),
            income: Counter::new(duration),
            expense: Counter::new(duration),
            balance_tone: BalanceTone::default(),
        }
    }

    pub fn reset_baselines(&mut self) {
        self.balance.reset_baseline();
        self.income.reset_baseline();
        self.expense.reset_baseline();
    }

    pub fn render(&mut self, summary: &Summary, now: Instant) {
        self.balance.animate_to(summary.balance, now);
        self.income.animate_to(summary.income, now);
        self.expense.animate_to(summary.expense, now);
        self.balance_tone = if summary.balance >= 0.0 {
            BalanceTone::NonNegative
        } else {
            BalanceTone::Negative
        };
    }

    /// Samples all three counters. Returns `true` if any is still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        let balance = self.balance.tick(now);
        let income = self.income.tick(now);
        let expense = self.expense.tick(now);
        balance || income || expense
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_endpoints() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert!((ease_out(0.5) - 0.875).abs() < 1e-9);
    }

    #[test]
    fn counter_converges_exactly_on_target() {
        let start = Instant::now();
        let mut counter = Counter::new(Duration::from_millis(600));
        counter.animate_to(1000.0, start);

        assert!(counter.tick(start + Duration::from_millis(300)));
        assert!((counter.displayed() - 875.0).abs() < 1e-6);
        assert_eq!(counter.baseline(), 0.0);

        assert!(!counter.tick(start + Duration::from_millis(900)));
        assert_eq!(counter.displayed(), 1000.0);
        assert_eq!(counter.baseline(), 1000.0);
        assert!(!counter.is_animating());
    }

    #[test]
    fn reset_baseline_restarts_from_zero() {
        let start = Instant::now();
        let mut counter = Counter::new(Duration::from_millis(100));
        counter.animate_to(500.0, start);
        counter.tick(start + Duration::from_millis(200));

        counter.reset_baseline();
        counter.animate_to(200.0, start + Duration::from_millis(200));
        counter.tick(start + Duration::from_millis(250));
        // Halfway from 0 (not from 500) towards 200.
        assert!(counter.displayed() < 200.0);
        assert!((counter.displayed() - 200.0 * ease_out(0.5)).abs() < 1e-6);
    }

    #[test]
    fn newer_animation_overtakes_in_flight_one() {
        let start = Instant::now();
        let mut counter = Counter::new(Duration::from_millis(100));
        counter.animate_to(500.0, start);
        counter.tick(start + Duration::from_millis(50));
        counter.animate_to(80.0, start + Duration::from_millis(60));
        counter.tick(start + Duration::from_millis(500));
        assert_eq!(counter.displayed(), 80.0);
    }

    #[test]
    fn balance_tone_follows_sign_of_target() {
        let now = Instant::now();
        let mut stats = StatCounters::new(Duration::ZERO);
        let summary = Summary {
            balance: -1.0,
            ..Summary::default()
        };
        stats.render(&summary, now);
        assert_eq!(stats.balance_tone, BalanceTone::Negative);
        assert!(!stats.tick(now));
        assert_eq!(stats.balance.displayed(), -1.0);
    }
}
