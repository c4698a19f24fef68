use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub mod transaction {
    use super::*;

    /// Server-assigned transaction id.
    pub type TransactionId = i64;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum TransactionKind {
        Income,
        Expense,
    }

    impl TransactionKind {
        /// Returns the wire string used by the backend.
        pub fn as_str(self) -> &'static str {
            match self {
                Self::Income => "income",
                Self::Expense => "expense",
            }
        }
    }

    /// A single record as returned by `GET /api/transactions`.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Transaction {
        pub id: TransactionId,
        #[serde(rename = "type")]
        pub kind: TransactionKind,
        pub category: String,
        pub amount: f64,
        #[serde(default)]
        pub note: Option<String>,
        /// Calendar date, `YYYY-MM-DD`.
        pub date: String,
    }

    /// Request body for `POST /api/transactions`.
    ///
    /// `amount` is forwarded exactly as typed; the server validates it.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct NewTransaction {
        #[serde(rename = "type")]
        pub kind: TransactionKind,
        pub category: String,
        pub amount: String,
        pub note: String,
        pub date: String,
    }
}

pub mod summary {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    pub struct CategorySummary {
        pub category: String,
        pub total: f64,
    }

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    pub struct TrendPoint {
        /// `YYYY-MM`.
        pub month: String,
        pub income: f64,
        pub expense: f64,
    }

    /// Aggregates returned by `GET /api/summary`.
    ///
    /// `categories` is ordered by `total` descending, `trend` chronologically.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    pub struct Summary {
        pub income: f64,
        pub expense: f64,
        pub balance: f64,
        pub categories: Vec<CategorySummary>,
        pub trend: Vec<TrendPoint>,
    }
}

pub mod insight {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    pub struct Insight {
        pub insight: String,
        #[serde(default)]
        pub source: String,
    }
}

pub mod limits {
    use super::*;

    /// Category name to spending ceiling. A missing key means "no limit set".
    pub type LimitMap = BTreeMap<String, f64>;

    /// Request body for `POST /api/limits`.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct LimitUpsert {
        pub category: String,
        pub limit: f64,
    }
}

pub mod mutation {
    use super::*;

    /// Response body shared by every write endpoint.
    ///
    /// Callers decide success from `success`, never from the HTTP status.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    pub struct MutationResponse {
        #[serde(default)]
        pub success: bool,
        #[serde(default)]
        pub error: Option<String>,
        #[serde(default)]
        pub warning: Option<String>,
    }
}

