use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::{AppState, FormField, FormState},
    categories,
    state::TransactionKind,
    ui::{components::hint_spans, overlays::popup, theme::Theme},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let (rect, block) = popup(frame, area, (60, 50), "New transaction", theme);
    let form = &state.form;
    let kind = state.view.kind;

    let mut lines = Vec::new();
    for field in FormField::ORDER {
        let focused = form.focus == field;
        let label_style = if focused {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_muted)
        };
        let mut spans = vec![
            Span::styled(if focused { "› " } else { "  " }, label_style),
            Span::styled(format!("{:<10}", field.label()), label_style),
        ];
        spans.extend(field_value(form, kind, field, focused, theme));
        lines.push(Line::from(spans));
    }

    lines.push(Line::default());
    let button_style = if form.submitting {
        Style::default().fg(theme.dim)
    } else {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    };
    lines.push(Line::from(Span::styled(
        format!(" {} ", form.submit_label()),
        button_style,
    )));
    lines.push(Line::default());
    lines.push(Line::from(hint_spans(
        &[
            ("Tab", "next"),
            ("←/→", "change"),
            ("Enter", "add"),
            ("Esc", "close"),
        ],
        theme,
    )));

    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

fn field_value(
    form: &FormState,
    kind: TransactionKind,
    field: FormField,
    focused: bool,
    theme: &Theme,
) -> Vec<Span<'static>> {
    let text_style = Style::default().fg(theme.text);
    match field {
        FormField::Kind => [TransactionKind::Income, TransactionKind::Expense]
            .into_iter()
            .map(|option| {
                let style = if option == kind {
                    let color = match option {
                        TransactionKind::Income => theme.positive,
                        TransactionKind::Expense => theme.negative,
                    };
                    Style::default().fg(color).add_modifier(Modifier::REVERSED)
                } else {
                    Style::default().fg(theme.dim)
                };
                Span::styled(format!(" {} ", option.as_str()), style)
            })
            .collect(),
        FormField::Category => {
            let name = form.category_name(kind);
            let icon = categories::icon(name);
            vec![Span::styled(format!("‹ {icon} {name} ›"), text_style)]
        }
        FormField::Amount | FormField::Note | FormField::Date => {
            let value = match field {
                FormField::Amount => form.amount.clone(),
                FormField::Note => form.note.clone(),
                _ => form.date.clone(),
            };
            let mut spans = vec![Span::styled(value, text_style)];
            if focused {
                spans.push(Span::styled("▏", Style::default().fg(theme.accent)));
            }
            spans
        }
    }
}
