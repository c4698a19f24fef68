//! The refresh orchestrator: concurrent fetch, normalization, and the
//! generation guard that discards stale outcomes.

use serde_json::Value;
use tracing::{debug, info};

use crate::{
    client::Gateway,
    normalize,
    state::{Insight, ViewState},
};

/// Raw payloads of one refresh, each already replaced by its fallback if the
/// request failed.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshOutcome {
    pub month: String,
    pub transactions: Value,
    pub summary: Value,
    pub insight: Value,
    /// `None` when limit support is disabled.
    pub limits: Option<Value>,
    pub months: Value,
}

/// Side outputs of [`RefreshOutcome::apply`] that are not part of the view
/// state.
#[derive(Debug, Clone, PartialEq)]
pub struct Applied {
    pub insight: Option<Insight>,
    pub months: Vec<String>,
}

impl RefreshOutcome {
    /// Writes the normalized snapshot into `state`. Every field is replaced,
    /// so no renderer can observe a mix of two refreshes.
    pub fn apply(&self, state: &mut ViewState) -> Applied {
        state.transactions = normalize::transactions(&self.transactions);
        state.summary = normalize::summary(&self.summary);
        state.limits = self
            .limits
            .as_ref()
            .map(normalize::limits)
            .unwrap_or_default();

        debug!(
            month = %self.month,
            transactions = state.transactions.len(),
            categories = state.summary.categories.len(),
            limits = state.limits.len(),
            "view state replaced"
        );

        Applied {
            insight: normalize::insight(&self.insight),
            months: normalize::months(&self.months),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Orchestrator {
    gateway: Gateway,
    limits_enabled: bool,
}

impl Orchestrator {
    pub fn new(gateway: Gateway, limits_enabled: bool) -> Self {
        Self {
            gateway,
            limits_enabled,
        }
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// Issues the per-month requests together and waits for all of them. A
    /// failed request only affects its own field.
    pub async fn fetch(&self, month: &str) -> RefreshOutcome {
        let limits = async {
            if self.limits_enabled {
                Some(self.gateway.limits().await)
            } else {
                None
            }
        };
        let (transactions, summary, insight, limits) = tokio::join!(
            self.gateway.transactions(month),
            self.gateway.summary(month),
            self.gateway.insights(month),
            limits,
        );
        let months = self.gateway.months().await;
        info!(%month, "refresh fetched");

        RefreshOutcome {
            month: month.to_string(),
            transactions,
            summary,
            insight,
            limits,
            months,
        }
    }
}

/// Monotonic refresh tokens. Only the most recently issued generation is
/// accepted, so a slow response for an old month filter cannot overwrite a
/// newer one.
#[derive(Debug, Default, Clone, Copy)]
pub struct Generations {
    latest: u64,
}

impl Generations {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }

    pub fn accepts(&self, generation: u64) -> bool {
        generation == self.latest
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use serde_json::json;

    use super::*;
    use crate::client::{Method, StubReply, StubTransport};

    fn orchestrator(stub: StubTransport, limits: bool) -> (Orchestrator, Arc<StubTransport>) {
        let stub = Arc::new(stub);
        (Orchestrator::new(Gateway::new(stub.clone()), limits), stub)
    }

    #[tokio::test(start_paused = true)]
    async fn fetches_run_concurrently() {
        let delay = Duration::from_millis(500);
        let stub = StubTransport::new()
            .route_delayed(
                Method::Get,
                "/api/transactions?month=2026-02",
                StubReply::Json(200, json!([])),
                delay,
            )
            .route_delayed(
                Method::Get,
                "/api/summary?month=2026-02",
                StubReply::Json(200, json!({ "income": 1 })),
                delay,
            )
            .route_delayed(
                Method::Get,
                "/api/ai_insights?month=2026-02",
                StubReply::Json(200, json!({ "insight": "ok", "source": "rules" })),
                delay,
            )
            .route_delayed(
                Method::Get,
                "/api/limits",
                StubReply::Json(200, json!({ "Rent": 100 })),
                delay,
            );
        let (orchestrator, _) = orchestrator(stub, true);

        let started = tokio::time::Instant::now();
        let outcome = orchestrator.fetch("2026-02").await;
        assert!(started.elapsed() < delay * 2);
        assert_eq!(outcome.summary, json!({ "income": 1 }));
        assert_eq!(outcome.limits, Some(json!({ "Rent": 100 })));
    }

    #[tokio::test]
    async fn one_failure_does_not_short_circuit_the_rest() {
        let stub = StubTransport::new().route(
            Method::Get,
            "/api/transactions",
            StubReply::Json(
                200,
                json!([{ "id": 1, "type": "expense", "category": "Rent", "amount": 900, "date": "2026-02-01" }]),
            ),
        );
        let (orchestrator, _) = orchestrator(stub, true);
        let outcome = orchestrator.fetch("").await;

        let mut state = ViewState::default();
        let applied = outcome.apply(&mut state);
        assert_eq!(state.transactions.len(), 1);
        assert_eq!(state.summary, Default::default());
        assert!(state.limits.is_empty());
        assert_eq!(
            applied.insight.map(|i| i.insight).as_deref(),
            Some(crate::client::INSIGHT_FALLBACK)
        );
        assert!(applied.months.is_empty());
    }

    #[tokio::test]
    async fn limits_are_skipped_when_disabled() {
        let (orchestrator, stub) = orchestrator(StubTransport::new(), false);
        let outcome = orchestrator.fetch("").await;
        assert_eq!(outcome.limits, None);
        assert_eq!(stub.count(Method::Get, "/api/limits"), 0);
        assert_eq!(stub.count(Method::Get, "/api/months"), 1);
    }

    #[test]
    fn only_latest_generation_is_accepted() {
        let mut generations = Generations::default();
        let first = generations.issue();
        let second = generations.issue();
        assert!(!generations.accepts(first));
        assert!(generations.accepts(second));
    }
}
