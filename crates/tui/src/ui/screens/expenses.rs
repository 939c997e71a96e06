use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
};

use crate::{
    app::AppState,
    form::Field,
    ui::{
        components::{card::Card, money::format_amount},
        theme::Theme,
    },
};

const ADD_FIELDS: [Field; 5] = [
    Field::Date,
    Field::Category,
    Field::Item,
    Field::Quantity,
    Field::Amount,
];

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(ADD_FIELDS.len() as u16 + 3), // form + action line
            Constraint::Length(3),                           // delete by id
            Constraint::Min(5),                              // table
        ])
        .split(area);

    render_add_form(frame, layout[0], state, &theme);
    render_delete(frame, layout[1], state, &theme);
    render_table(frame, layout[2], state, &theme);
}

fn render_add_form(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let focused = state.form.focus.is_add_field();
    let mut lines: Vec<Line> = ADD_FIELDS
        .iter()
        .map(|field| field_line(state, *field, theme))
        .collect();
    lines.push(Line::from(vec![
        Span::styled("Enter", Style::default().fg(theme.accent)),
        Span::styled(" Add Expense", Style::default().fg(theme.dim)),
    ]));

    Card::new("Add Expense", theme)
        .focused(focused)
        .render_with(frame, area, Paragraph::new(lines));
}

fn render_delete(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut line = field_line(state, Field::DeleteId, theme);
    line.spans.push(Span::styled(
        "   Enter Delete Expense",
        Style::default().fg(theme.dim),
    ));
    Card::new("Delete Expense", theme)
        .focused(state.form.focus == Field::DeleteId)
        .footer("Del picks selected row")
        .render_with(frame, area, Paragraph::new(line));
}

fn render_table(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card = Card::new("Expenses List", theme).count(state.expenses.len());

    if state.expenses.is_empty() {
        let message = state
            .load_error
            .as_deref()
            .map(|err| Span::styled(err.to_string(), Style::default().fg(theme.error)))
            .unwrap_or_else(|| {
                Span::styled("No expenses recorded yet.", Style::default().fg(theme.dim))
            });
        card.render_with(frame, area, Paragraph::new(Line::from(message)));
        return;
    }

    let header = Row::new(
        ["ID", "Date", "Category", "Item", "Qty", "Amount", "Total"]
            .into_iter()
            .map(|title| Cell::from(title).style(Style::default().fg(theme.accent))),
    );
    let rows = state.expenses.iter().map(|expense| {
        Row::new(vec![
            Cell::from(expense.id.to_string()),
            Cell::from(expense.date.clone()),
            Cell::from(expense.category.clone()),
            Cell::from(expense.item.clone()),
            Cell::from(expense.quantity.to_string()),
            Cell::from(format_amount(expense.amount)),
            Cell::from(format_amount(expense.total)),
        ])
        .style(Style::default().fg(theme.text))
    });

    let widths = [
        Constraint::Length(5),
        Constraint::Length(10),
        Constraint::Length(13),
        Constraint::Min(8),
        Constraint::Length(5),
        Constraint::Length(10),
        Constraint::Length(10),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(card.block())
        .row_highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    let mut table_state = TableState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}

/// `Label: value` with a cursor on the focused field.
pub(super) fn field_line(state: &AppState, field: Field, theme: &Theme) -> Line<'static> {
    let focused = state.form.focus == field;
    let label_style = if focused {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.dim)
    };
    let value = state.form.value(field);
    let value = if field == Field::Category {
        if focused {
            format!("◀ {value} ▶")
        } else {
            value.to_string()
        }
    } else if focused {
        format!("{value}▏")
    } else {
        value.to_string()
    };

    Line::from(vec![
        Span::styled(format!("{:<18}", field.label()), label_style),
        Span::styled(value, Style::default().fg(theme.text)),
    ])
}
