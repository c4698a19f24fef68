//! Display helpers for amounts and dates.
//!
//! The dashboard renders a single locale (en-IN): rupee symbol, two decimal
//! places and lakh/crore digit grouping.

use chrono::NaiveDate;

pub const CURRENCY_SYMBOL: &str = "₹";

/// Formats the absolute value of `amount`, e.g. `₹12,34,567.89`.
///
/// The sign is dropped; callers prefix `+`/`-` where it matters.
#[must_use]
pub fn currency(amount: f64) -> String {
    let paise = to_paise(amount);
    let rupees = paise / 100;
    let fraction = paise % 100;
    format!("{CURRENCY_SYMBOL}{}.{fraction:02}", group_indian(rupees))
}

/// Compact axis label: `₹1.2M`, `₹12K`, `₹950`.
#[must_use]
pub fn currency_short(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{CURRENCY_SYMBOL}0");
    }
    if amount >= 1e6 {
        let millions = (amount / 1e6 * 10.0).round() / 10.0;
        return format!("{CURRENCY_SYMBOL}{millions:.1}M");
    }
    if amount >= 1e3 {
        let thousands = (amount / 1e3).round() as i64;
        return format!("{CURRENCY_SYMBOL}{thousands}K");
    }
    if amount.fract() == 0.0 {
        format!("{CURRENCY_SYMBOL}{}", amount as i64)
    } else {
        format!("{CURRENCY_SYMBOL}{amount}")
    }
}

/// `2026-02-05` -> `05 Feb 2026`. Unparseable input is returned unchanged.
#[must_use]
pub fn date(value: &str) -> String {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.format("%d %b %Y").to_string())
        .unwrap_or_else(|_| value.to_string())
}

/// `2026-02` -> `February 2026`.
#[must_use]
pub fn month_long(key: &str) -> String {
    parse_month(key)
        .map(|date| date.format("%B %Y").to_string())
        .unwrap_or_else(|| key.to_string())
}

/// `2026-02` -> `Feb`.
#[must_use]
pub fn month_short(key: &str) -> String {
    parse_month(key)
        .map(|date| date.format("%b").to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Returns `true` for a `YYYY-MM` key naming a real month.
#[must_use]
pub fn is_month_key(key: &str) -> bool {
    key.len() == 7 && parse_month(key).is_some()
}

fn parse_month(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{key}-01"), "%Y-%m-%d").ok()
}

fn to_paise(amount: f64) -> u64 {
    if !amount.is_finite() {
        return 0;
    }
    (amount.abs() * 100.0).round() as u64
}

fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = left;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();
    format!("{},{last_three}", groups.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_uses_lakh_grouping() {
        assert_eq!(currency(0.0), "₹0.00");
        assert_eq!(currency(999.5), "₹999.50");
        assert_eq!(currency(1000.0), "₹1,000.00");
        assert_eq!(currency(123456.0), "₹1,23,456.00");
        assert_eq!(currency(1234567.891), "₹12,34,567.89");
    }

    #[test]
    fn currency_drops_sign_and_non_finite() {
        assert_eq!(currency(-250.0), "₹250.00");
        assert_eq!(currency(f64::NAN), "₹0.00");
    }

    #[test]
    fn short_labels() {
        assert_eq!(currency_short(950.0), "₹950");
        assert_eq!(currency_short(12_400.0), "₹12K");
        assert_eq!(currency_short(1_250_000.0), "₹1.3M");
        assert_eq!(currency_short(0.0), "₹0");
    }

    #[test]
    fn dates_and_months() {
        assert_eq!(date("2026-02-05"), "05 Feb 2026");
        assert_eq!(date("yesterday"), "yesterday");
        assert_eq!(month_long("2026-02"), "February 2026");
        assert_eq!(month_short("2025-11"), "Nov");
        assert!(is_month_key("2026-12"));
        assert!(!is_month_key("2026-13"));
        assert!(!is_month_key("2026-1"));
    }
}
