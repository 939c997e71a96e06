use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Paragraph},
};

use engine::views::CategoryShare;

use crate::ui::{
    components::{card::Card, money::format_amount},
    theme::Theme,
};

/// Vertical bar chart of `(label, value)` pairs; bar heights follow the
/// values and each bar is annotated with the two-decimal amount.
pub fn render_amount_bars(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    data: &[(String, f64)],
    theme: &Theme,
) {
    let bars: Vec<Bar> = data
        .iter()
        .map(|(label, value)| {
            Bar::default()
                .value(to_bar_value(*value))
                .text_value(format_amount(*value))
                .label(Line::from(label.clone()))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width(area.width, data.len()))
        .bar_gap(1)
        .bar_style(Style::default().fg(theme.chart))
        .value_style(
            Style::default()
                .fg(theme.background)
                .bg(theme.chart)
                .add_modifier(Modifier::BOLD),
        )
        .label_style(Style::default().fg(theme.dim));

    Card::new(title, theme).render_with(frame, area, chart);
}

/// Category breakdown: one line per category with a proportional bar in its
/// palette color and the percentage share.
pub fn render_share_bars(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    shares: &[CategoryShare],
    theme: &Theme,
) {
    let card = Card::new(title, theme);
    let inner = card.inner(area);
    // label, two spaces, bar, percentage and amount columns
    let bar_width = (inner.width as usize).saturating_sub(14 + 2 + 8 + 12).max(4);

    let lines: Vec<Line> = shares
        .iter()
        .enumerate()
        .map(|(index, share)| {
            let color = Theme::category_color(index);
            Line::from(vec![
                Span::styled(
                    format!("{:<14}", share.category),
                    Style::default().fg(theme.text),
                ),
                Span::raw("  "),
                Span::styled(
                    ascii_bar(share.percent, bar_width),
                    Style::default().fg(color),
                ),
                Span::styled(
                    format!(" {:>5.1}%", share.percent),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" {:>11}", format_amount(share.total)),
                    Style::default().fg(theme.dim),
                ),
            ])
        })
        .collect();

    card.render_with(frame, area, Paragraph::new(lines));
}

/// Creates a simple ASCII-based horizontal bar for a percentage.
///
/// Returns a string like `████████░░░░░░░░░░░░`.
#[must_use]
pub fn ascii_bar(percent: f64, width: usize) -> String {
    let ratio = (percent / 100.0).clamp(0.0, 1.0);
    let filled = ((ratio * width as f64).round() as usize).min(width);
    let empty = width.saturating_sub(filled);

    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// Bar heights are in cents so small amounts still get a visible bar.
fn to_bar_value(amount: f64) -> u64 {
    if amount.is_finite() && amount > 0.0 {
        (amount * 100.0).round() as u64
    } else {
        0
    }
}

fn bar_width(available: u16, bars: usize) -> u16 {
    if bars == 0 {
        return 1;
    }
    let per_bar = (available.saturating_sub(2) as usize / bars).saturating_sub(1);
    per_bar.clamp(3, 12) as u16
}
