use std::collections::HashSet;

use crate::{
    categories, format,
    state::{Transaction, TransactionId, TransactionKind, ViewState},
};

pub const EMPTY_NO_DATA: &str = "No transactions yet.";
pub const EMPTY_NO_RESULTS: &str = "No results found.";

#[derive(Debug, Clone, PartialEq)]
pub struct TxRow {
    pub id: TransactionId,
    pub kind: TransactionKind,
    pub icon: &'static str,
    pub category: String,
    pub note: Option<String>,
    /// Signed display amount, e.g. `+₹5,000.00`.
    pub amount: String,
    pub date: String,
    /// A delete is in flight: the row is dimmed and ignores input.
    pub pending: bool,
}

impl TxRow {
    fn from_transaction(tx: &Transaction, pending: bool) -> Self {
        let sign = match tx.kind {
            TransactionKind::Income => '+',
            TransactionKind::Expense => '-',
        };
        Self {
            id: tx.id,
            kind: tx.kind,
            icon: categories::icon(&tx.category),
            category: tx.category.clone(),
            note: tx.note.clone().filter(|note| !note.is_empty()),
            amount: format!("{sign}{}", format::currency(tx.amount)),
            date: format::date(&tx.date),
            pending,
        }
    }

    /// The row's delete affordance; `None` while a delete is already pending.
    pub fn delete_target(&self) -> Option<TransactionId> {
        (!self.pending).then_some(self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListView {
    pub rows: Vec<TxRow>,
    pub count_label: String,
    pub empty_message: Option<&'static str>,
}

impl ListView {
    /// Type filter first, then a case-insensitive search over category and note.
    pub fn project(state: &ViewState, pending: &HashSet<TransactionId>) -> Self {
        let needle = state.search.trim().to_lowercase();
        let rows: Vec<TxRow> = state
            .transactions
            .iter()
            .filter(|tx| state.filter.matches(tx.kind))
            .filter(|tx| matches_search(tx, &needle))
            .map(|tx| TxRow::from_transaction(tx, pending.contains(&tx.id)))
            .collect();

        let empty_message = rows.is_empty().then(|| {
            if needle.is_empty() {
                EMPTY_NO_DATA
            } else {
                EMPTY_NO_RESULTS
            }
        });

        Self {
            count_label: count_label(rows.len()),
            rows,
            empty_message,
        }
    }

    pub fn row(&self, id: TransactionId) -> Option<&TxRow> {
        self.rows.iter().find(|row| row.id == id)
    }
}

/// `needle` must already be lowercase; an empty needle matches everything.
pub fn matches_search(tx: &Transaction, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    tx.category.to_lowercase().contains(needle)
        || tx
            .note
            .as_deref()
            .is_some_and(|note| note.to_lowercase().contains(needle))
}

pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 record".to_string()
    } else {
        format!("{count} records")
    }
}
