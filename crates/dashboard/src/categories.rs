//! Static category catalog: display icon and color per category name.

use std::{collections::HashMap, sync::LazyLock};

use api_types::transaction::TransactionKind;
use ratatui::style::Color;

pub const DEFAULT_ICON: &str = "💡";
pub const DEFAULT_COLOR: Color = Color::Rgb(0x8b, 0x93, 0xb8);
/// Used by the category bars when no catalog color exists.
pub const FALLBACK_BAR_COLOR: Color = Color::Rgb(0xff, 0x4d, 0x6d);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: Color,
}

const fn entry(name: &'static str, icon: &'static str, rgb: u32) -> CategoryInfo {
    CategoryInfo {
        name,
        icon,
        color: Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8),
    }
}

pub const INCOME: &[CategoryInfo] = &[
    entry("Salary", "💼", 0x00e5a0),
    entry("Freelance", "🔧", 0x06b6d4),
    entry("Investment", "📈", 0x3b82f6),
    entry("Gift", "🎁", 0xa78bfa),
    entry("Rent Income", "🏠", 0x34d399),
    entry("Business", "🤝", 0xf59e0b),
    entry("Bonus", "🏆", 0xfbbf24),
    entry("Other", "💡", 0x8b93b8),
];

pub const EXPENSE: &[CategoryInfo] = &[
    entry("Groceries", "🛒", 0xf43f5e),
    entry("Food & Dining", "🍽️", 0xfb923c),
    entry("Transport", "🚌", 0xfacc15),
    entry("Rent", "🏠", 0xe879f9),
    entry("Utilities", "💡", 0x60a5fa),
    entry("Health", "🏥", 0x4ade80),
    entry("Entertainment", "🎬", 0xf472b6),
    entry("Education", "📚", 0x818cf8),
    entry("Shopping", "👗", 0xfb7185),
    entry("Travel", "✈️", 0x38bdf8),
    entry("EMI / Loan", "🏦", 0xa78bfa),
    entry("Subscriptions", "📺", 0x34d399),
    entry("Other", "💡", 0x8b93b8),
];

// Expense entries win on duplicate names ("Other").
static REGISTRY: LazyLock<HashMap<&'static str, CategoryInfo>> = LazyLock::new(|| {
    INCOME
        .iter()
        .chain(EXPENSE.iter())
        .map(|info| (info.name, *info))
        .collect()
});

/// Catalog entries offered for a transaction kind, in display order.
pub fn for_kind(kind: TransactionKind) -> &'static [CategoryInfo] {
    match kind {
        TransactionKind::Income => INCOME,
        TransactionKind::Expense => EXPENSE,
    }
}

pub fn lookup(name: &str) -> Option<&'static CategoryInfo> {
    REGISTRY.get(name)
}

pub fn icon(name: &str) -> &'static str {
    lookup(name).map(|info| info.icon).unwrap_or(DEFAULT_ICON)
}

pub fn color(name: &str) -> Color {
    lookup(name).map(|info| info.color).unwrap_or(DEFAULT_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_categories() {
        assert_eq!(icon("Groceries"), "🛒");
        assert_eq!(color("Travel"), Color::Rgb(0x38, 0xbd, 0xf8));
        assert_eq!(icon("Crypto"), DEFAULT_ICON);
        assert_eq!(color("Crypto"), DEFAULT_COLOR);
    }

    #[test]
    fn catalogs_end_with_other() {
        assert_eq!(for_kind(TransactionKind::Income).len(), 8);
        assert_eq!(for_kind(TransactionKind::Expense).len(), 13);
        assert_eq!(INCOME.last().map(|c| c.name), Some("Other"));
        assert_eq!(EXPENSE.last().map(|c| c.name), Some("Other"));
    }
}
