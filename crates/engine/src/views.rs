//! Read-only aggregates over the fetched expenses.
//!
//! Every function here is pure: it takes the rows returned by
//! [`Engine::fetch_all`](crate::Engine::fetch_all) and never touches storage.

use std::{collections::BTreeMap, fmt};

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::{Expense, util::DATE_FORMAT};

const DATE_FORMATS: [&str; 2] = [DATE_FORMAT, "%Y/%m/%d"];
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// A calendar month bucket, displayed as `YYYY-MM`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// One slice of the category breakdown.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub total: f64,
    /// Share of the grand total, `0.0..=100.0`.
    pub percent: f64,
}

/// Parse a stored date. Accepts plain dates (`2024-01-05`, `2024/01/05`),
/// date-times and RFC 3339 timestamps; anything else is `None`.
pub fn parse_expense_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(datetime.date());
        }
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|datetime| datetime.date_naive())
}

/// Sum of `total` per category label. Categories without rows are absent.
pub fn totals_by_category(expenses: &[Expense]) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.category.clone()).or_insert(0.0) += expense.total;
    }
    totals
}

/// Sum of `total` per calendar month, ascending.
///
/// Rows whose date does not parse are left out of this view only.
pub fn totals_by_month(expenses: &[Expense]) -> BTreeMap<Month, f64> {
    let mut totals = BTreeMap::new();
    for expense in expenses {
        let Some(date) = parse_expense_date(&expense.date) else {
            tracing::trace!(id = expense.id, date = %expense.date, "skipping unparseable date");
            continue;
        };
        *totals.entry(Month::from_date(date)).or_insert(0.0) += expense.total;
    }
    totals
}

/// Sum of `total` over every row.
pub fn grand_total(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|expense| expense.total).sum()
}

/// Percentage of each category in the breakdown, same order as the input.
pub fn category_shares(totals: &BTreeMap<String, f64>) -> Vec<CategoryShare> {
    let sum: f64 = totals.values().sum();
    totals
        .iter()
        .map(|(category, total)| CategoryShare {
            category: category.clone(),
            total: *total,
            percent: if sum > 0.0 { total / sum * 100.0 } else { 0.0 },
        })
        .collect()
}

/// `true` iff a budget is set (`limit > 0`) and `total` is above it.
pub fn exceeds_budget(total: f64, limit: f64) -> bool {
    limit > 0.0 && total > limit
}

/// The alert shown when spending is above a set budget, `None` otherwise.
pub fn budget_alert(total: f64, limit: f64) -> Option<String> {
    exceeds_budget(total, limit).then(|| {
        format!(
            "Alert! You have exceeded your budget limit of {limit:.2} with total expense of {total:.2}"
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: i64, date: &str, category: &str, quantity: i64, amount: f64) -> Expense {
        Expense {
            id,
            date: date.to_string(),
            category: category.to_string(),
            item: format!("item {id}"),
            quantity,
            amount,
            total: quantity as f64 * amount,
        }
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense(1, "2024-01-05", "Food", 2, 50.0),
            expense(2, "2024-02-10", "Transport", 1, 20.0),
            expense(3, "2024-01-20", "Food", 3, 5.0),
            expense(4, "not a date", "Bills", 1, 80.0),
        ]
    }

    #[test]
    fn category_totals_sum_per_label() {
        let totals = totals_by_category(&sample());
        assert_eq!(totals.len(), 3);
        assert_eq!(totals["Food"], 115.0);
        assert_eq!(totals["Transport"], 20.0);
        assert_eq!(totals["Bills"], 80.0);
        assert!(!totals.contains_key("Shopping"));

        let sum: f64 = totals.values().sum();
        assert_eq!(sum, grand_total(&sample()));
    }

    #[test]
    fn month_totals_skip_bad_dates_only() {
        let rows = sample();
        let totals = totals_by_month(&rows);
        let keys: Vec<String> = totals.keys().map(ToString::to_string).collect();
        assert_eq!(keys, vec!["2024-01", "2024-02"]);
        assert_eq!(totals[&Month::new(2024, 1)], 115.0);
        assert_eq!(totals[&Month::new(2024, 2)], 20.0);

        // the unparseable row still counts everywhere else
        assert_eq!(totals_by_category(&rows)["Bills"], 80.0);
        assert_eq!(grand_total(&rows), 215.0);
    }

    #[test]
    fn months_sort_across_years() {
        let rows = vec![
            expense(1, "2024-01-01", "Food", 1, 1.0),
            expense(2, "2023-12-31", "Food", 1, 2.0),
        ];
        let months: Vec<Month> = totals_by_month(&rows).into_keys().collect();
        assert_eq!(months, vec![Month::new(2023, 12), Month::new(2024, 1)]);
    }

    #[test]
    fn parses_common_date_shapes() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 9);
        assert_eq!(parse_expense_date("2024-03-09"), expected);
        assert_eq!(parse_expense_date("2024/03/09"), expected);
        assert_eq!(parse_expense_date("2024-03-09 18:30:00"), expected);
        assert_eq!(parse_expense_date("2024-03-09T18:30:00+01:00"), expected);
        assert_eq!(parse_expense_date("09.03.2024"), None);
        assert_eq!(parse_expense_date(""), None);
    }

    #[test]
    fn budget_needs_positive_limit() {
        assert!(exceeds_budget(120.0, 100.0));
        assert!(!exceeds_budget(100.0, 100.0));
        assert!(!exceeds_budget(1_000_000.0, 0.0));
        assert!(!exceeds_budget(1_000_000.0, -5.0));
    }

    #[test]
    fn alert_text_names_limit_and_total() {
        assert_eq!(
            budget_alert(120.0, 100.0).as_deref(),
            Some("Alert! You have exceeded your budget limit of 100.00 with total expense of 120.00")
        );
        assert_eq!(budget_alert(80.0, 100.0), None);
        assert_eq!(budget_alert(80.0, 0.0), None);
    }

    #[test]
    fn shares_add_up_to_hundred() {
        let shares = category_shares(&totals_by_category(&sample()));
        let sum: f64 = shares.iter().map(|share| share.percent).sum();
        assert!((sum - 100.0).abs() < 1e-9);
        assert_eq!(shares[0].category, "Bills");

        assert!(category_shares(&BTreeMap::new()).is_empty());
    }
}
