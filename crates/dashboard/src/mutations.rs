//! Write flows. Each returns a plain outcome; optimistic feedback and the
//! follow-up refresh are the caller's concern.

use api_types::limits::LimitUpsert;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    client::Gateway,
    state::{NewTransaction, TransactionId},
};

pub const MSG_DELETED: &str = "Record deleted";
pub const MSG_DELETE_FAILED: &str = "Could not delete";
pub const MSG_ADDED: &str = "Transaction added!";
pub const MSG_SUBMIT_FAILED: &str = "Something went wrong";
pub const MSG_LIMIT_SAVED: &str = "Limit saved";
pub const MSG_LIMIT_FAILED: &str = "Could not save limit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Failed,
}

pub async fn delete(gateway: &Gateway, id: TransactionId) -> DeleteOutcome {
    let response = gateway.delete_transaction(id).await;
    if response.success {
        info!(id, "transaction deleted");
        DeleteOutcome::Deleted
    } else {
        warn!(id, "delete failed");
        DeleteOutcome::Failed
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added,
    /// Stored, but the server flagged something (e.g. over budget).
    AddedWithWarning(String),
    /// Server error message, or a generic one.
    Failed(String),
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }
}

/// The server validates the payload; nothing is checked here.
pub async fn submit(gateway: &Gateway, payload: &NewTransaction) -> SubmitOutcome {
    let response = gateway.create_transaction(payload).await;
    if !response.success {
        let message = response
            .error
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| MSG_SUBMIT_FAILED.to_string());
        warn!(category = %payload.category, "submit rejected: {message}");
        return SubmitOutcome::Failed(message);
    }

    info!(category = %payload.category, kind = payload.kind.as_str(), "transaction added");
    match response.warning.filter(|w| !w.is_empty()) {
        Some(warning) => SubmitOutcome::AddedWithWarning(warning),
        None => SubmitOutcome::Added,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LimitInputError {
    #[error("Enter a limit amount")]
    Blank,
    #[error("Limit must be a number")]
    NotNumeric,
    #[error("Limit must be greater than zero")]
    NotPositive,
}

/// Client-side check run before any network call.
pub fn parse_limit(input: &str) -> Result<f64, LimitInputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LimitInputError::Blank);
    }
    let value: f64 = trimmed.parse().map_err(|_| LimitInputError::NotNumeric)?;
    if !value.is_finite() {
        return Err(LimitInputError::NotNumeric);
    }
    if value <= 0.0 {
        return Err(LimitInputError::NotPositive);
    }
    Ok(value)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LimitOutcome {
    Saved,
    Failed(String),
}

pub async fn save_limit(gateway: &Gateway, category: &str, limit: f64) -> LimitOutcome {
    let response = gateway
        .set_limit(&LimitUpsert {
            category: category.to_string(),
            limit,
        })
        .await;
    if response.success {
        info!(%category, limit, "limit saved");
        LimitOutcome::Saved
    } else {
        let message = response
            .error
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| MSG_LIMIT_FAILED.to_string());
        warn!(%category, "limit rejected: {message}");
        LimitOutcome::Failed(message)
    }
}
