use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_muted: Color,
    pub dim: Color,
    pub border: Color,
    pub border_focused: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(8, 12, 16),
            surface: Color::Rgb(20, 26, 32),
            text: Color::Rgb(220, 220, 220),
            text_muted: Color::Rgb(139, 147, 184),
            dim: Color::Rgb(110, 110, 120),
            border: Color::Rgb(50, 58, 72),
            border_focused: Color::Rgb(124, 106, 247),
            accent: Color::Rgb(124, 106, 247),
            positive: Color::Rgb(0, 229, 160),
            negative: Color::Rgb(255, 77, 109),
            warning: Color::Rgb(251, 191, 36),
            error: Color::Rgb(239, 68, 68),
        }
    }
}
