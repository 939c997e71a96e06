use ratatui::style::Color;

/// Slice colors for the category breakdown, in display order.
pub const CATEGORY_PALETTE: [Color; 6] = [
    Color::Rgb(0xFF, 0x99, 0x99),
    Color::Rgb(0x66, 0xB3, 0xFF),
    Color::Rgb(0x99, 0xFF, 0x99),
    Color::Rgb(0xFF, 0xCC, 0x99),
    Color::Rgb(0xFF, 0xD7, 0x00),
    Color::Rgb(0xFF, 0x6F, 0x61),
];

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub panel: Color,
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
    pub border_focused: Color,
    pub positive: Color,
    pub warning: Color,
    pub error: Color,
    pub chart: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(8, 12, 16),
            panel: Color::Rgb(20, 26, 32),
            text: Color::Rgb(220, 220, 220),
            dim: Color::Rgb(140, 140, 140),
            accent: Color::Rgb(80, 160, 160),
            border: Color::Rgb(60, 70, 80),
            border_focused: Color::Rgb(80, 160, 160),
            positive: Color::Rgb(100, 190, 120),
            warning: Color::Rgb(220, 180, 80),
            error: Color::Rgb(200, 80, 80),
            chart: Color::Rgb(0x66, 0xB3, 0xFF),
        }
    }
}

impl Theme {
    pub fn category_color(index: usize) -> Color {
        CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()]
    }
}
