//! Guarded access to the dashboard REST API.
//!
//! [`Gateway::request`] never fails: transport and parse errors are logged and
//! replaced by a caller-supplied fallback shaped like the expected payload.
//! Write endpoints report success through the `success` field of their body,
//! so error bodies from non-2xx responses are still parsed and returned.

mod http;
mod stub;

use std::sync::Arc;

use api_types::{
    limits::LimitUpsert,
    mutation::MutationResponse,
    transaction::{NewTransaction, TransactionId},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use tracing::{debug, warn};

pub use http::HttpTransport;
pub use stub::{StubReply, StubTransport};

pub const INSIGHT_FALLBACK: &str = "Unable to load AI insights.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            ..Self::get(path)
        }
    }

    pub fn post<T: Serialize>(path: impl Into<String>, body: &T) -> serde_json::Result<Self> {
        Ok(Self {
            method: Method::Post,
            body: Some(serde_json::to_value(body)?),
            ..Self::get(path)
        })
    }

    /// Scopes the request to a `YYYY-MM` month. An empty month means "all
    /// time" and leaves the query untouched.
    pub fn month(mut self, month: &str) -> Self {
        if !month.is_empty() {
            self.query.push(("month".to_string(), month.to_string()));
        }
        self
    }

    /// Path plus query string, e.g. `/api/summary?month=2026-02`.
    pub fn target(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid url: {0}")]
    Url(String),
    #[error("unreachable: {0}")]
    Unreachable(String),
}

/// The network seam. Production uses [`HttpTransport`]; tests use
/// [`StubTransport`].
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError>;
}

#[derive(Clone)]
pub struct Gateway {
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway").finish_non_exhaustive()
    }
}

impl Gateway {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Sends `request` and returns the parsed JSON body, or `fallback` on any
    /// transport/parse failure. A DELETE answered with a non-2xx status is a
    /// failure regardless of its body.
    pub async fn request(&self, request: ApiRequest, fallback: Value) -> Value {
        let target = request.target();
        let response = match self.transport.send(&request).await {
            Ok(response) => response,
            Err(err) => {
                warn!(%target, "request failed, using fallback: {err}");
                return fallback;
            }
        };

        if !response.is_success() {
            if request.method == Method::Delete {
                warn!(%target, status = response.status, "delete rejected");
                return fallback;
            }
            debug!(%target, status = response.status, "error status, reading body");
        }

        match serde_json::from_str::<Value>(&response.body) {
            Ok(value) => value,
            Err(err) => {
                warn!(%target, status = response.status, "unparseable body, using fallback: {err}");
                fallback
            }
        }
    }

    pub async fn transactions(&self, month: &str) -> Value {
        self.request(ApiRequest::get("/api/transactions").month(month), json!([]))
            .await
    }

    pub async fn summary(&self, month: &str) -> Value {
        self.request(
            ApiRequest::get("/api/summary").month(month),
            json!({ "income": 0, "expense": 0, "balance": 0, "categories": [], "trend": [] }),
        )
        .await
    }

    pub async fn insights(&self, month: &str) -> Value {
        self.request(
            ApiRequest::get("/api/ai_insights").month(month),
            json!({ "insight": INSIGHT_FALLBACK, "source": "" }),
        )
        .await
    }

    pub async fn limits(&self) -> Value {
        self.request(ApiRequest::get("/api/limits"), json!({})).await
    }

    pub async fn months(&self) -> Value {
        self.request(ApiRequest::get("/api/months"), json!([])).await
    }

    pub async fn create_transaction(&self, payload: &NewTransaction) -> MutationResponse {
        self.write(ApiRequest::post("/api/transactions", payload))
            .await
    }

    pub async fn delete_transaction(&self, id: TransactionId) -> MutationResponse {
        self.write(Ok(ApiRequest::delete(format!("/api/transactions/{id}"))))
            .await
    }

    pub async fn set_limit(&self, payload: &LimitUpsert) -> MutationResponse {
        self.write(ApiRequest::post("/api/limits", payload)).await
    }

    async fn write(&self, request: serde_json::Result<ApiRequest>) -> MutationResponse {
        let request = match request {
            Ok(request) => request,
            Err(err) => {
                warn!("failed to encode request body: {err}");
                return MutationResponse::default();
            }
        };
        let value = self.request(request, json!({})).await;
        serde_json::from_value(value).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway(stub: StubTransport) -> (Gateway, Arc<StubTransport>) {
        let stub = Arc::new(stub);
        (Gateway::new(stub.clone()), stub)
    }

    #[test]
    fn month_is_omitted_when_empty() {
        assert_eq!(
            ApiRequest::get("/api/summary").month("").target(),
            "/api/summary"
        );
        assert_eq!(
            ApiRequest::get("/api/summary").month("2026-02").target(),
            "/api/summary?month=2026-02"
        );
    }

    #[tokio::test]
    async fn transport_failure_returns_fallback() {
        let (gateway, _) = gateway(StubTransport::new());
        let value = gateway.transactions("").await;
        assert_eq!(value, json!([]));
    }

    #[tokio::test]
    async fn error_status_body_is_surfaced() {
        let (gateway, _) = gateway(StubTransport::new().route(
            Method::Post,
            "/api/transactions",
            StubReply::Json(400, json!({ "error": "Amount must be a positive number" })),
        ));
        let payload = NewTransaction {
            kind: api_types::transaction::TransactionKind::Expense,
            category: "Rent".to_string(),
            amount: "-1".to_string(),
            note: String::new(),
            date: "2026-02-01".to_string(),
        };
        let res = gateway.create_transaction(&payload).await;
        assert!(!res.success);
        assert_eq!(res.error.as_deref(), Some("Amount must be a positive number"));
    }

    #[tokio::test]
    async fn unparseable_error_body_falls_back() {
        let (gateway, _) = gateway(StubTransport::new().route(
            Method::Get,
            "/api/months",
            StubReply::Raw(500, "<html>oops</html>".to_string()),
        ));
        assert_eq!(gateway.months().await, json!([]));
    }

    #[tokio::test]
    async fn delete_with_error_status_is_failure_even_with_body() {
        let (gateway, _) = gateway(StubTransport::new().route(
            Method::Delete,
            "/api/transactions/7",
            StubReply::Json(500, json!({ "success": true })),
        ));
        assert!(!gateway.delete_transaction(7).await.success);
    }

    #[tokio::test]
    async fn delete_success() {
        let (gateway, stub) = gateway(StubTransport::new().route(
            Method::Delete,
            "/api/transactions/7",
            StubReply::Json(200, json!({ "success": true })),
        ));
        assert!(gateway.delete_transaction(7).await.success);
        assert_eq!(stub.count(Method::Delete, "/api/transactions/7"), 1);
    }

    #[tokio::test]
    async fn non_object_write_body_is_failure() {
        let (gateway, _) = gateway(StubTransport::new().route(
            Method::Post,
            "/api/limits",
            StubReply::Json(200, json!([1, 2, 3])),
        ));
        let res = gateway
            .set_limit(&LimitUpsert {
                category: "Rent".to_string(),
                limit: 100.0,
            })
            .await;
        assert_eq!(res, MutationResponse::default());
    }
}
