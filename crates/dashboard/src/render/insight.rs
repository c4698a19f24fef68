use crate::state::Insight;

const WARNING_MARK: &str = "Warning:";
const PRAISE_MARK: &str = "Great job!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsightTone {
    #[default]
    Neutral,
    Warning,
    Praise,
}

/// Insight text split into plain and highlighted segments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InsightView {
    /// `(text, highlighted)` pairs in reading order.
    pub segments: Vec<(String, bool)>,
    pub tone: InsightTone,
    pub source: String,
}

impl InsightView {
    /// Highlights every occurrence of `Warning:` and `Great job!`. The tone
    /// follows whichever marker appears first.
    pub fn from_insight(insight: &Insight) -> Self {
        let text = insight.insight.as_str();
        let mut segments = Vec::new();
        let mut tone = InsightTone::Neutral;
        let mut rest = text;

        while let Some((at, mark, mark_tone)) = next_mark(rest) {
            if tone == InsightTone::Neutral {
                tone = mark_tone;
            }
            if at > 0 {
                segments.push((rest[..at].to_string(), false));
            }
            segments.push((mark.to_string(), true));
            rest = &rest[at + mark.len()..];
        }
        if !rest.is_empty() {
            segments.push((rest.to_string(), false));
        }

        Self {
            segments,
            tone,
            source: insight.source.clone(),
        }
    }

    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|(text, _)| text.as_str()).collect()
    }
}

fn next_mark(text: &str) -> Option<(usize, &'static str, InsightTone)> {
    let warning = text
        .find(WARNING_MARK)
        .map(|at| (at, WARNING_MARK, InsightTone::Warning));
    let praise = text
        .find(PRAISE_MARK)
        .map(|at| (at, PRAISE_MARK, InsightTone::Praise));
    match (warning, praise) {
        (Some(w), Some(p)) => Some(if w.0 <= p.0 { w } else { p }),
        (w, p) => w.or(p),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insight(text: &str) -> Insight {
        Insight {
            insight: text.to_string(),
            source: "rules".to_string(),
        }
    }

    #[test]
    fn warning_is_highlighted() {
        let view = InsightView::from_insight(&insight("Warning: Groceries is 80% of spend."));
        assert_eq!(view.tone, InsightTone::Warning);
        assert_eq!(view.segments[0], ("Warning:".to_string(), true));
        assert_eq!(view.segments[1], (" Groceries is 80% of spend.".to_string(), false));
        assert_eq!(view.source, "rules");
    }

    #[test]
    fn praise_in_the_middle() {
        let view = InsightView::from_insight(&insight("Saved 30%. Great job! Keep going."));
        assert_eq!(view.tone, InsightTone::Praise);
        assert_eq!(view.segments.len(), 3);
        assert!(view.segments[1].1);
        assert_eq!(view.plain_text(), "Saved 30%. Great job! Keep going.");
    }

    #[test]
    fn plain_text_has_no_highlight() {
        let view = InsightView::from_insight(&insight("Unable to load AI insights."));
        assert_eq!(view.tone, InsightTone::Neutral);
        assert_eq!(view.segments, [("Unable to load AI insights.".to_string(), false)]);
    }
}
