use crate::format;

pub const ALL_TIME_LABEL: &str = "All Time";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthOption {
    /// `""` for all time, otherwise `YYYY-MM`.
    pub value: String,
    pub label: String,
}

/// The month selector's choices. "All Time" is always first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthOptions {
    pub options: Vec<MonthOption>,
}

impl Default for MonthOptions {
    fn default() -> Self {
        Self::from_months(&[])
    }
}

impl MonthOptions {
    pub fn from_months(months: &[String]) -> Self {
        let all_time = MonthOption {
            value: String::new(),
            label: ALL_TIME_LABEL.to_string(),
        };
        let options = std::iter::once(all_time)
            .chain(months.iter().map(|month| MonthOption {
                value: month.clone(),
                label: format::month_long(month),
            }))
            .collect();
        Self { options }
    }

    /// Position of `value`; an unknown month maps to "All Time".
    pub fn index_of(&self, value: &str) -> usize {
        self.options
            .iter()
            .position(|option| option.value == value)
            .unwrap_or(0)
    }

    pub fn label_for(&self, value: &str) -> &str {
        self.options
            .get(self.index_of(value))
            .map(|option| option.label.as_str())
            .unwrap_or(ALL_TIME_LABEL)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_time_first_then_long_labels() {
        let options = MonthOptions::from_months(&["2026-02".to_string(), "2026-01".to_string()]);
        assert_eq!(options.len(), 3);
        assert_eq!(options.options[0].label, ALL_TIME_LABEL);
        assert_eq!(options.options[0].value, "");
        assert_eq!(options.options[1].label, "February 2026");
        assert_eq!(options.index_of("2026-01"), 2);
        assert_eq!(options.index_of("1999-01"), 0);
        assert_eq!(options.label_for(""), ALL_TIME_LABEL);
    }
}
