//! Plain-text rendering of the expense table and its derived views.

use std::fmt::Write;

use engine::{Expense, views};

pub fn expenses_table(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let item_width = expenses
        .iter()
        .map(|expense| expense.item.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>5}  {:<10}  {:<13}  {:<item_width$}  {:>8}  {:>10}  {:>10}",
        "ID", "Date", "Category", "Item", "Quantity", "Amount", "Total"
    );
    for expense in expenses {
        let _ = writeln!(
            out,
            "{:>5}  {:<10}  {:<13}  {:<item_width$}  {:>8}  {:>10.2}  {:>10.2}",
            expense.id,
            expense.date,
            expense.category,
            expense.item,
            expense.quantity,
            expense.amount,
            expense.total
        );
    }
    out
}

pub fn summary(expenses: &[Expense], budget: f64) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Expense analysis");
    let by_category = views::totals_by_category(expenses);
    if by_category.is_empty() {
        let _ = writeln!(out, "  no expenses");
    }
    for share in views::category_shares(&by_category) {
        let _ = writeln!(
            out,
            "  {:<13} {:>10.2}  {:>5.1}%",
            share.category, share.total, share.percent
        );
    }

    let _ = writeln!(out, "\nMonthly expense comparison");
    for (month, total) in views::totals_by_month(expenses) {
        let _ = writeln!(out, "  {month}  {total:>10.2}");
    }

    let total = views::grand_total(expenses);
    let _ = writeln!(out, "\nTotal expense: {total:.2}");
    if let Some(alert) = views::budget_alert(total, budget) {
        let _ = writeln!(out, "{alert}");
    }
    out
}
