pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{app::AppState, form::Field};

use components::hints::{KeyHint, hint_separator, hints_to_spans};

pub use terminal::TerminalGuard;
pub use theme::Theme;

const GLOBAL_HINTS: [KeyHint; 4] = [
    KeyHint::new("Tab", "next field"),
    KeyHint::new("Ctrl+E", "export csv"),
    KeyHint::new("Ctrl+R", "refresh"),
    KeyHint::new("Esc", "quit"),
];

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let area = frame.area();
    let theme = Theme::default();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title bar
            Constraint::Min(0),    // page
            Constraint::Length(1), // hints
        ])
        .split(area);

    render_title_bar(frame, layout[0], state, &theme);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(layout[1]);
    screens::expenses::render(frame, body[0], state);
    screens::analysis::render(frame, body[1], state);

    render_bottom_bar(frame, layout[2], state, &theme);
    components::toast::render(frame, area, state.toast.as_ref());
}

fn render_title_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let refresh = state
        .last_refresh
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());
    let (status, status_style) = if state.load_error.is_some() {
        ("ERR", Style::default().fg(theme.error))
    } else {
        ("OK", Style::default().fg(theme.positive))
    };

    let line = Line::from(vec![
        Span::styled(
            "Personal Expense Analyzer",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("Rows", Style::default().fg(theme.dim)),
        Span::raw(format!(": {}  ", state.expenses.len())),
        Span::styled("Database", Style::default().fg(theme.dim)),
        Span::raw(format!(": {}  ", state.database_label)),
        Span::styled("Refresh", Style::default().fg(theme.dim)),
        Span::raw(format!(": {refresh}  ")),
        Span::styled(status, status_style),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts = context_hints(state.form.focus, theme);
    parts.push(hint_separator(theme));
    parts.extend(hints_to_spans(&GLOBAL_HINTS, theme));
    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

const ADD_HINTS: [KeyHint; 2] = [
    KeyHint::new("↑/↓", "select row"),
    KeyHint::new("Enter", "add"),
];
const CATEGORY_HINTS: [KeyHint; 2] = [
    KeyHint::new("←/→", "category"),
    KeyHint::new("Enter", "add"),
];
const DELETE_HINTS: [KeyHint; 3] = [
    KeyHint::new("↑/↓", "select row"),
    KeyHint::new("Del", "pick"),
    KeyHint::new("Enter", "delete"),
];
const BUDGET_HINTS: [KeyHint; 1] = [KeyHint::new("Enter", "apply budget")];

/// Hints for the focused field.
fn context_hints(focus: Field, theme: &Theme) -> Vec<Span<'static>> {
    let hints: &[KeyHint] = match focus {
        Field::Category => &CATEGORY_HINTS,
        Field::DeleteId => &DELETE_HINTS,
        Field::Budget => &BUDGET_HINTS,
        _ => &ADD_HINTS,
    };
    hints_to_spans(hints, theme)
}
