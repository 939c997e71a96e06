//! The module contains the `Expense` type, one logged purchase.
//!
//! The database columns keep the capitalized names (`Date`, `Category`, ...)
//! so files created by earlier versions of the tracker open unchanged.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::Category;

/// One row of the `expenses` table.
///
/// `date` and `category` are kept as stored: rows written by other tools may
/// carry a date that does not parse or a label outside [`Category`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Expense {
    #[serde(rename = "ID")]
    pub id: i64,
    pub date: String,
    pub category: String,
    pub item: String,
    pub quantity: i64,
    pub amount: f64,
    pub total: f64,
}

impl Expense {
    /// The typed category, `None` for labels outside the fixed set.
    pub fn category_kind(&self) -> Option<Category> {
        Category::try_from(self.category.as_str()).ok()
    }
}

impl From<Model> for Expense {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            date: model.date,
            category: model.category,
            item: model.item,
            quantity: model.quantity,
            amount: model.amount,
            total: model.total,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "Date")]
    pub date: String,
    #[sea_orm(column_name = "Category")]
    pub category: String,
    #[sea_orm(column_name = "Item")]
    pub item: String,
    #[sea_orm(column_name = "Quantity")]
    pub quantity: i64,
    #[sea_orm(column_name = "Amount", column_type = "Double")]
    pub amount: f64,
    #[sea_orm(column_name = "Total", column_type = "Double")]
    pub total: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
