//! Shape guards between raw JSON payloads and [`ViewState`](crate::state::ViewState).
//!
//! Every function here is total: malformed input (null, wrong types, missing
//! keys) degrades to empty sequences, zeroes or empty maps.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::{
    format,
    state::{CategorySummary, Insight, LimitMap, Summary, Transaction, TrendPoint},
};

pub fn transactions(value: &Value) -> Vec<Transaction> {
    elements(value, "transaction")
}

pub fn summary(value: &Value) -> Summary {
    let mut categories: Vec<CategorySummary> = value
        .get("categories")
        .map(|v| elements(v, "category"))
        .unwrap_or_default();
    // Renderers use the first element as the scale maximum.
    categories.sort_by(|a, b| b.total.total_cmp(&a.total));

    Summary {
        income: number(value.get("income")),
        expense: number(value.get("expense")),
        balance: number(value.get("balance")),
        categories,
        trend: value
            .get("trend")
            .map(|v| elements::<TrendPoint>(v, "trend point"))
            .unwrap_or_default(),
    }
}

/// Keeps only strictly positive, finite ceilings.
pub fn limits(value: &Value) -> LimitMap {
    let Some(map) = value.as_object() else {
        warn!("limits payload is not an object");
        return LimitMap::new();
    };
    map.iter()
        .filter_map(|(category, limit)| {
            let limit = limit.as_f64().filter(|l| l.is_finite() && *l > 0.0);
            if limit.is_none() {
                warn!(%category, "dropping invalid limit");
            }
            limit.map(|l| (category.clone(), l))
        })
        .collect()
}

/// `None` when the payload carries no insight text; the previous banner is
/// kept in that case.
pub fn insight(value: &Value) -> Option<Insight> {
    let text = value.get("insight").and_then(Value::as_str)?;
    if text.is_empty() {
        return None;
    }
    let source = value
        .get("source")
        .and_then(Value::as_str)
        .unwrap_or_default();
    Some(Insight {
        insight: text.to_string(),
        source: source.to_string(),
    })
}

pub fn months(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .filter(|key| format::is_month_key(key))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn number(value: Option<&Value>) -> f64 {
    value
        .and_then(Value::as_f64)
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

fn elements<T: for<'de> Deserialize<'de>>(value: &Value, what: &str) -> Vec<T> {
    let Some(items) = value.as_array() else {
        warn!("expected an array of {what}, got {}", kind_of(value));
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match T::deserialize(item) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                warn!("dropping malformed {what}: {err}");
                None
            }
        })
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::state::TransactionKind;

    #[test]
    fn summary_coerces_malformed_fields() {
        for raw in [
            json!(null),
            json!([]),
            json!("oops"),
            json!({}),
            json!({ "income": "100", "expense": null, "balance": true, "categories": {}, "trend": 3 }),
        ] {
            let summary = summary(&raw);
            assert_eq!(summary, Summary::default(), "input: {raw}");
        }
    }

    #[test]
    fn summary_keeps_valid_data_and_drops_bad_elements() {
        let raw = json!({
            "income": 5000,
            "expense": 1500.5,
            "balance": -20,
            "categories": [
                { "category": "Travel", "total": 300 },
                { "category": "Groceries", "total": 1200 },
                { "category": 4, "total": 1 },
                null
            ],
            "trend": [
                { "month": "2026-01", "income": 10, "expense": 5 },
                { "month": "2026-02" }
            ]
        });
        let summary = summary(&raw);
        assert_eq!(summary.income, 5000.0);
        assert_eq!(summary.expense, 1500.5);
        assert_eq!(summary.balance, -20.0);
        let names: Vec<_> = summary.categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, ["Groceries", "Travel"]);
        assert_eq!(summary.trend.len(), 1);
        assert_eq!(summary.trend[0].month, "2026-01");
    }

    #[test]
    fn transactions_require_an_array() {
        assert!(transactions(&json!({ "error": "Unauthorized" })).is_empty());
        assert!(transactions(&json!(null)).is_empty());

        let txs = transactions(&json!([
            { "id": 1, "type": "expense", "category": "Rent", "amount": 900, "note": null, "date": "2026-02-01" },
            { "id": 2, "type": "transfer", "category": "Rent", "amount": 1, "date": "2026-02-01" },
            { "id": 3, "type": "income", "category": "Salary", "amount": 5000, "date": "2026-02-02" }
        ]));
        assert_eq!(txs.len(), 2);
        assert_eq!(txs[0].kind, TransactionKind::Expense);
        assert_eq!(txs[0].note, None);
        assert_eq!(txs[1].id, 3);
    }

    #[test]
    fn limits_keep_positive_numbers_only() {
        let limits = limits(&json!({ "Groceries": 1000, "Rent": 0, "Travel": "50", "Health": -3 }));
        assert_eq!(limits.len(), 1);
        assert_eq!(limits.get("Groceries"), Some(&1000.0));
        assert!(super::limits(&json!([1])).is_empty());
    }

    #[test]
    fn insight_and_months() {
        assert_eq!(insight(&json!({ "insight": "" })), None);
        assert_eq!(insight(&json!(null)), None);
        let parsed = insight(&json!({ "insight": "Great job! Saved", "source": "Smart Assistant" }));
        assert_eq!(parsed.map(|i| i.source), Some("Smart Assistant".to_string()));

        assert_eq!(
            months(&json!(["2026-02", "bad", 7, "2026-01"])),
            vec!["2026-02".to_string(), "2026-01".to_string()]
        );
        assert!(months(&json!({})).is_empty());
    }
}
