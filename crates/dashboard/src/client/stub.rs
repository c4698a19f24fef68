//! In-memory [`Transport`] with canned replies.
//!
//! Compiled into the library (not only under `cfg(test)`) so integration
//! tests can drive the whole refresh/mutation pipeline without a server.

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use serde_json::Value;

use super::{ApiRequest, Method, RawResponse, Transport, TransportError};

#[derive(Debug, Clone)]
pub enum StubReply {
    Json(u16, Value),
    Raw(u16, String),
    /// Simulates a connection failure.
    Unreachable,
}

#[derive(Debug, Clone)]
struct Route {
    reply: StubReply,
    delay: Option<Duration>,
}

/// Routes are keyed by method and [`ApiRequest::target`]; anything
/// unrouted behaves like an unreachable server.
#[derive(Debug, Default)]
pub struct StubTransport {
    routes: Mutex<HashMap<(Method, String), Route>>,
    calls: Mutex<Vec<ApiRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(self, method: Method, target: &str, reply: StubReply) -> Self {
        self.set(method, target, reply);
        self
    }

    /// Like [`StubTransport::route`], but the reply is held back for `delay`.
    pub fn route_delayed(
        self,
        method: Method,
        target: &str,
        reply: StubReply,
        delay: Duration,
    ) -> Self {
        lock(&self.routes).insert(
            (method, target.to_string()),
            Route {
                reply,
                delay: Some(delay),
            },
        );
        self
    }

    /// Replaces the reply for a route.
    pub fn set(&self, method: Method, target: &str, reply: StubReply) {
        lock(&self.routes).insert((method, target.to_string()), Route { reply, delay: None });
    }

    pub fn calls(&self) -> Vec<ApiRequest> {
        lock(&self.calls).clone()
    }

    pub fn count(&self, method: Method, target: &str) -> usize {
        lock(&self.calls)
            .iter()
            .filter(|call| call.method == method && call.target() == target)
            .count()
    }
}

#[async_trait::async_trait]
impl Transport for StubTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError> {
        let target = request.target();
        lock(&self.calls).push(request.clone());
        let route = lock(&self.routes)
            .get(&(request.method, target.clone()))
            .cloned();

        let Some(route) = route else {
            return Err(TransportError::Unreachable(target));
        };
        if let Some(delay) = route.delay {
            tokio::time::sleep(delay).await;
        }

        match route.reply {
            StubReply::Json(status, body) => Ok(RawResponse {
                status,
                body: body.to_string(),
            }),
            StubReply::Raw(status, body) => Ok(RawResponse { status, body }),
            StubReply::Unreachable => Err(TransportError::Unreachable(target)),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
