//! Input form state and the checks run before anything reaches the engine.

use chrono::NaiveDate;
use engine::{Category, DATE_FORMAT, MISSING_DETAILS, require_details};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Date,
    Category,
    Item,
    Quantity,
    Amount,
    DeleteId,
    Budget,
}

impl Field {
    const ORDER: [Field; 7] = [
        Self::Date,
        Self::Category,
        Self::Item,
        Self::Quantity,
        Self::Amount,
        Self::DeleteId,
        Self::Budget,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Category => "Category",
            Self::Item => "Item",
            Self::Quantity => "Quantity",
            Self::Amount => "Amount (per item)",
            Self::DeleteId => "ID to delete",
            Self::Budget => "Budget limit",
        }
    }

    /// Fields that belong to the add-expense form.
    pub fn is_add_field(self) -> bool {
        matches!(
            self,
            Self::Date | Self::Category | Self::Item | Self::Quantity | Self::Amount
        )
    }

    fn index(self) -> usize {
        Self::ORDER
            .iter()
            .position(|field| *field == self)
            .unwrap_or_default()
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }
}

/// An add-expense request that passed the form checks.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub category: Category,
    pub item: String,
    pub quantity: i64,
    pub amount: f64,
}

#[derive(Debug, Clone)]
pub struct FormState {
    pub date: String,
    pub category: Category,
    pub item: String,
    pub quantity: String,
    pub amount: String,
    pub delete_id: String,
    pub budget: String,
    pub focus: Field,
}

impl FormState {
    pub fn new(today: NaiveDate, budget: f64) -> Self {
        Self {
            date: today.format(DATE_FORMAT).to_string(),
            category: Category::default(),
            item: String::new(),
            quantity: "1".to_string(),
            amount: String::new(),
            delete_id: String::new(),
            budget: if budget > 0.0 {
                format!("{budget:.2}")
            } else {
                String::new()
            },
            focus: Field::Date,
        }
    }

    /// The text buffer behind the focused field; `None` for the category
    /// selector, which only cycles.
    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::Date => Some(&mut self.date),
            Field::Category => None,
            Field::Item => Some(&mut self.item),
            Field::Quantity => Some(&mut self.quantity),
            Field::Amount => Some(&mut self.amount),
            Field::DeleteId => Some(&mut self.delete_id),
            Field::Budget => Some(&mut self.budget),
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Date => &self.date,
            Field::Category => self.category.as_str(),
            Field::Item => &self.item,
            Field::Quantity => &self.quantity,
            Field::Amount => &self.amount,
            Field::DeleteId => &self.delete_id,
            Field::Budget => &self.budget,
        }
    }

    /// Clear the per-purchase fields after a successful add, keeping date and
    /// category for the next entry.
    pub fn reset_after_add(&mut self) {
        self.item.clear();
        self.quantity = "1".to_string();
        self.amount.clear();
    }

    pub fn validate_add(&self) -> Result<NewExpense, String> {
        let date_raw = self.date.trim();
        let item = self.item.trim();
        let quantity_raw = self.quantity.trim();
        let amount_raw = self.amount.trim();
        if date_raw.is_empty() || item.is_empty() || quantity_raw.is_empty() || amount_raw.is_empty()
        {
            return Err(MISSING_DETAILS.to_string());
        }

        let date = NaiveDate::parse_from_str(date_raw, DATE_FORMAT)
            .map_err(|_| "Date must be YYYY-MM-DD.".to_string())?;
        let quantity = quantity_raw
            .parse::<i64>()
            .map_err(|_| "Quantity must be a whole number.".to_string())?;
        let amount = parse_decimal(amount_raw).ok_or_else(|| "Amount is not a number.".to_string())?;

        require_details(quantity, amount).map_err(|_| MISSING_DETAILS.to_string())?;
        if quantity < 0 {
            return Err("Quantity must be at least 1.".to_string());
        }
        if amount < 0.0 {
            return Err("Amount must not be negative.".to_string());
        }

        Ok(NewExpense {
            date,
            category: self.category,
            item: item.to_string(),
            quantity,
            amount,
        })
    }
}

pub fn parse_delete_id(raw: &str) -> Result<i64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Enter the ID of the expense to delete.".to_string());
    }
    match trimmed.parse::<i64>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err("ID must be a positive whole number.".to_string()),
    }
}

/// Parse the budget field. Empty means no budget.
pub fn parse_budget(raw: &str) -> Result<f64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match parse_decimal(trimmed) {
        Some(limit) if limit >= 0.0 => Ok(limit),
        Some(_) => Err("Budget must not be negative.".to_string()),
        None => Err("Budget is not a number.".to_string()),
    }
}

/// Accepts `.` or `,` as decimal separator.
fn parse_decimal(raw: &str) -> Option<f64> {
    raw.replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        let mut form = FormState::new(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(), 0.0);
        form.item = "Rice".to_string();
        form.quantity = "2".to_string();
        form.amount = "50".to_string();
        form
    }

    #[test]
    fn valid_form_produces_expense() {
        let parsed = filled().validate_add().unwrap();
        assert_eq!(parsed.date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(parsed.category, Category::Food);
        assert_eq!(parsed.item, "Rice");
        assert_eq!(parsed.quantity, 2);
        assert_eq!(parsed.amount, 50.0);
    }

    #[test]
    fn missing_or_zero_fields_warn() {
        let mut form = filled();
        form.item = "  ".to_string();
        assert_eq!(form.validate_add().unwrap_err(), MISSING_DETAILS);

        let mut form = filled();
        form.amount = "0".to_string();
        assert_eq!(form.validate_add().unwrap_err(), MISSING_DETAILS);

        let mut form = filled();
        form.quantity = "0".to_string();
        assert_eq!(form.validate_add().unwrap_err(), MISSING_DETAILS);
    }

    #[test]
    fn malformed_fields_are_rejected() {
        let mut form = filled();
        form.date = "05/01/2024".to_string();
        assert!(form.validate_add().is_err());

        let mut form = filled();
        form.quantity = "1.5".to_string();
        assert!(form.validate_add().is_err());

        let mut form = filled();
        form.amount = "-3".to_string();
        assert!(form.validate_add().is_err());

        let mut form = filled();
        form.amount = "12,50".to_string();
        assert_eq!(form.validate_add().unwrap().amount, 12.5);
    }

    #[test]
    fn delete_id_must_be_positive() {
        assert_eq!(parse_delete_id(" 7 "), Ok(7));
        assert!(parse_delete_id("").is_err());
        assert!(parse_delete_id("0").is_err());
        assert!(parse_delete_id("-2").is_err());
        assert!(parse_delete_id("abc").is_err());
    }

    #[test]
    fn budget_parsing() {
        assert_eq!(parse_budget(""), Ok(0.0));
        assert_eq!(parse_budget("100"), Ok(100.0));
        assert!(parse_budget("-1").is_err());
        assert!(parse_budget("lots").is_err());
    }

    #[test]
    fn focus_cycles_through_every_field() {
        let mut field = Field::Date;
        for _ in 0..Field::ORDER.len() {
            field = field.next();
        }
        assert_eq!(field, Field::Date);
        assert_eq!(Field::Date.prev(), Field::Budget);
        assert!(Field::Amount.is_add_field());
        assert!(!Field::DeleteId.is_add_field());
    }

    #[test]
    fn reset_keeps_date_and_category() {
        let mut form = filled();
        form.category = Category::Bills;
        form.reset_after_add();
        assert_eq!(form.date, "2024-01-05");
        assert_eq!(form.category, Category::Bills);
        assert!(form.item.is_empty());
        assert_eq!(form.quantity, "1");
    }
}
