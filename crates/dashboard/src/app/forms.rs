//! Input state for the add form, the limit editor and the month picker.

use crate::{
    categories::{self, CategoryInfo},
    format,
    state::{LimitMap, NewTransaction, TransactionKind},
};

pub const SUBMIT_LABEL: &str = "Add Transaction";
pub const SUBMIT_LABEL_BUSY: &str = "Adding…";
pub const NO_LIMIT_PLACEHOLDER: &str = "No limit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Kind,
    Category,
    Amount,
    Note,
    Date,
}

impl FormField {
    pub const ORDER: [FormField; 5] = [
        Self::Kind,
        Self::Category,
        Self::Amount,
        Self::Note,
        Self::Date,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Kind => "Type",
            Self::Category => "Category",
            Self::Amount => "Amount",
            Self::Note => "Note",
            Self::Date => "Date",
        }
    }

    pub fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// The add-transaction form. The selected type lives in
/// [`ViewState::kind`](crate::state::ViewState), so category choices are
/// always read through it.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub category: usize,
    pub amount: String,
    pub note: String,
    pub date: String,
    pub focus: FormField,
    pub submitting: bool,
}

impl FormState {
    pub fn new(today: String) -> Self {
        Self {
            category: 0,
            amount: String::new(),
            note: String::new(),
            date: today,
            focus: FormField::Kind,
            submitting: false,
        }
    }

    pub fn categories(kind: TransactionKind) -> &'static [CategoryInfo] {
        categories::for_kind(kind)
    }

    pub fn category_name(&self, kind: TransactionKind) -> &'static str {
        Self::categories(kind)
            .get(self.category)
            .map(|info| info.name)
            .unwrap_or("Other")
    }

    /// Called after the type flips: the old index means nothing in the new
    /// catalog.
    pub fn reset_category(&mut self) {
        self.category = 0;
    }

    pub fn cycle_category(&mut self, kind: TransactionKind, forward: bool) {
        let len = Self::categories(kind).len();
        if len == 0 {
            return;
        }
        self.category = if forward {
            (self.category + 1) % len
        } else {
            (self.category + len - 1) % len
        };
    }

    pub fn active_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Amount => Some(&mut self.amount),
            FormField::Note => Some(&mut self.note),
            FormField::Date => Some(&mut self.date),
            FormField::Kind | FormField::Category => None,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            SUBMIT_LABEL_BUSY
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn payload(&self, kind: TransactionKind) -> NewTransaction {
        NewTransaction {
            kind,
            category: self.category_name(kind).to_string(),
            amount: self.amount.trim().to_string(),
            note: self.note.trim().to_string(),
            date: self.date.trim().to_string(),
        }
    }

    /// Clears what the user typed for the last record; type, category and
    /// date stay so the next entry is quick.
    pub fn clear_entries(&mut self) {
        self.amount.clear();
        self.note.clear();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LimitRow {
    pub category: &'static str,
    pub icon: &'static str,
    pub current: Option<f64>,
}

impl LimitRow {
    pub fn current_label(&self) -> String {
        self.current
            .map(format::currency)
            .unwrap_or_else(|| NO_LIMIT_PLACEHOLDER.to_string())
    }
}

/// Limit editor. Lists every expense category, whether or not it has
/// records yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LimitsModal {
    pub selected: usize,
    pub input: String,
}

impl LimitsModal {
    pub fn rows(limits: &LimitMap) -> Vec<LimitRow> {
        categories::EXPENSE
            .iter()
            .map(|info| LimitRow {
                category: info.name,
                icon: info.icon,
                current: limits.get(info.name).copied(),
            })
            .collect()
    }

    pub fn selected_category(&self) -> &'static str {
        categories::EXPENSE
            .get(self.selected)
            .map(|info| info.name)
            .unwrap_or("Other")
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < categories::EXPENSE.len() {
            self.selected += 1;
            self.input.clear();
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.input.clear();
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthPicker {
    pub selected: usize,
}

impl MonthPicker {
    pub fn select_next(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordsUi {
    pub selected: usize,
    pub searching: bool,
}

impl RecordsUi {
    pub fn select_next(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_type_repopulates_categories() {
        let mut form = FormState::new("2026-02-05".to_string());
        form.cycle_category(TransactionKind::Income, true);
        assert_eq!(form.category_name(TransactionKind::Income), "Freelance");

        form.reset_category();
        assert_eq!(form.category_name(TransactionKind::Expense), "Groceries");
        form.cycle_category(TransactionKind::Expense, false);
        assert_eq!(form.category_name(TransactionKind::Expense), "Other");
    }

    #[test]
    fn payload_forwards_raw_amount_and_clear_keeps_date() {
        let mut form = FormState::new("2026-02-05".to_string());
        form.amount = " 12a ".to_string();
        form.note = "lunch".to_string();
        let payload = form.payload(TransactionKind::Expense);
        assert_eq!(payload.amount, "12a");
        assert_eq!(payload.category, "Groceries");

        form.clear_entries();
        assert!(form.amount.is_empty() && form.note.is_empty());
        assert_eq!(form.date, "2026-02-05");
    }

    #[test]
    fn submit_label_tracks_busy_state() {
        let mut form = FormState::new(String::new());
        assert_eq!(form.submit_label(), SUBMIT_LABEL);
        form.submitting = true;
        assert_eq!(form.submit_label(), SUBMIT_LABEL_BUSY);
    }

    #[test]
    fn limit_rows_cover_every_expense_category() {
        let limits = LimitMap::from([("Rent".to_string(), 15000.0)]);
        let rows = LimitsModal::rows(&limits);
        assert_eq!(rows.len(), categories::EXPENSE.len());
        let rent = rows.iter().find(|r| r.category == "Rent");
        assert_eq!(rent.and_then(|r| r.current), Some(15000.0));
        let travel = rows.iter().find(|r| r.category == "Travel");
        assert_eq!(travel.map(LimitRow::current_label).as_deref(), Some(NO_LIMIT_PLACEHOLDER));
    }

    #[test]
    fn field_order_wraps() {
        assert_eq!(FormField::Date.next(), FormField::Kind);
        assert_eq!(FormField::Kind.prev(), FormField::Date);
    }
}
