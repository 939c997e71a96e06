use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use engine::views;

use crate::{
    app::AppState,
    form::{self, Field},
    ui::{
        components::{card::Card, charts, money::styled_total},
        theme::Theme,
    },
};

use super::expenses::field_line;

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();

    let by_category = views::totals_by_category(&state.expenses);
    let shares = views::category_shares(&by_category);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(shares.len().max(1) as u16 + 2), // category breakdown
            Constraint::Length(5),                              // budget
            Constraint::Min(6),                                 // monthly chart
        ])
        .split(area);

    if shares.is_empty() {
        Card::new("Expense Analysis", &theme).render_with(
            frame,
            layout[0],
            Paragraph::new(Line::from(Span::styled(
                "Add an expense to see the breakdown.",
                Style::default().fg(theme.dim),
            ))),
        );
    } else {
        charts::render_share_bars(frame, layout[0], "Expense Analysis", &shares, &theme);
    }

    render_budget(frame, layout[1], state, &theme);
    render_monthly(frame, layout[2], state, &theme);
}

fn render_budget(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let total = views::grand_total(&state.expenses);
    let mut lines = vec![field_line(state, Field::Budget, theme)];
    let mut over = false;

    match form::parse_budget(&state.form.budget) {
        Ok(limit) => {
            over = views::exceeds_budget(total, limit);
            lines.push(Line::from(vec![
                Span::styled("Total expense: ", Style::default().fg(theme.dim)),
                styled_total(total, over, theme),
            ]));
            if let Some(alert) = views::budget_alert(total, limit) {
                lines.push(Line::from(Span::styled(
                    alert,
                    Style::default()
                        .fg(theme.error)
                        .add_modifier(Modifier::BOLD),
                )));
            }
        }
        Err(message) => {
            lines.push(Line::from(Span::styled(
                message,
                Style::default().fg(theme.warning),
            )));
        }
    }

    Card::new("Budget", theme)
        .focused(state.form.focus == Field::Budget)
        .alert(over)
        .render_with(frame, area, Paragraph::new(lines));
}

fn render_monthly(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let data: Vec<(String, f64)> = views::totals_by_month(&state.expenses)
        .into_iter()
        .map(|(month, total)| (month.to_string(), total))
        .collect();

    if data.is_empty() {
        Card::new("Monthly Expense Comparison", theme).render_with(
            frame,
            area,
            Paragraph::new(Line::from(Span::styled(
                "No dated expenses yet.",
                Style::default().fg(theme.dim),
            )))
            .alignment(Alignment::Center),
        );
        return;
    }

    charts::render_amount_bars(frame, area, "Monthly Expense Comparison", &data, theme);
}
