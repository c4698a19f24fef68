//! The single view-state snapshot every renderer projects from.
//!
//! Only the refresh path (`RefreshOutcome::apply`) replaces the server-derived
//! fields; UI input only touches `kind`, `filter`, `month` and `search`.

pub use api_types::{
    insight::Insight,
    limits::LimitMap,
    summary::{CategorySummary, Summary, TrendPoint},
    transaction::{NewTransaction, Transaction, TransactionId, TransactionKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    pub const ALL: [TypeFilter; 3] = [Self::All, Self::Income, Self::Expense];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    pub fn matches(self, kind: TransactionKind) -> bool {
        match self {
            Self::All => true,
            Self::Income => kind == TransactionKind::Income,
            Self::Expense => kind == TransactionKind::Expense,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Income,
            Self::Income => Self::Expense,
            Self::Expense => Self::All,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Transaction type selected in the add form.
    pub kind: TransactionKind,
    pub filter: TypeFilter,
    /// `""` for all time, otherwise `YYYY-MM`.
    pub month: String,
    pub search: String,
    pub transactions: Vec<Transaction>,
    pub summary: Summary,
    pub limits: LimitMap,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            kind: TransactionKind::Income,
            filter: TypeFilter::All,
            month: String::new(),
            search: String::new(),
            transactions: Vec::new(),
            summary: Summary::default(),
            limits: LimitMap::new(),
        }
    }
}

impl ViewState {
    /// Limit for `category`, if one is set.
    pub fn limit_for(&self, category: &str) -> Option<f64> {
        self.limits.get(category).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_cycles_and_matches() {
        assert_eq!(TypeFilter::All.next(), TypeFilter::Income);
        assert_eq!(TypeFilter::Expense.next(), TypeFilter::All);
        assert!(TypeFilter::All.matches(TransactionKind::Expense));
        assert!(!TypeFilter::Income.matches(TransactionKind::Expense));
    }
}
