use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::ui::theme::Theme;

/// Two-decimal rendering used for every amount on screen.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Bold variant for totals; turns red when `over_budget`.
#[must_use]
pub fn styled_total(amount: f64, over_budget: bool, theme: &Theme) -> Span<'static> {
    let color = if over_budget { theme.error } else { theme.text };
    Span::styled(
        format_amount(amount),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_use_two_decimals() {
        assert_eq!(format_amount(100.0), "100.00");
        assert_eq!(format_amount(3.456), "3.46");
        assert_eq!(format_amount(0.0), "0.00");
    }
}
