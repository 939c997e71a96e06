use chrono::NaiveDate;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveValue, QueryOrder, prelude::*};

use crate::{
    Category, Expense, ResultEngine, expenses,
    util::{
        DATE_FORMAT, normalize_required_text, validate_amount, validate_id, validate_quantity,
    },
};

use super::Engine;

impl Engine {
    /// Create the `expenses` table if it is missing. Safe to call repeatedly.
    pub async fn ensure_schema(&self) -> ResultEngine<()> {
        Migrator::up(&self.database, None).await.inspect_err(|err| {
            tracing::error!("failed to prepare expenses table: {err}");
        })?;
        Ok(())
    }

    /// Append one expense and return the id the store assigned to it.
    ///
    /// `total` is computed here as `quantity * amount` and stored alongside the
    /// inputs.
    pub async fn insert(
        &self,
        date: NaiveDate,
        category: Category,
        item: &str,
        quantity: i64,
        amount: f64,
    ) -> ResultEngine<i64> {
        let item = normalize_required_text(item, "item")?;
        validate_quantity(quantity)?;
        validate_amount(amount)?;

        let total = quantity as f64 * amount;
        let active = expenses::ActiveModel {
            id: ActiveValue::NotSet,
            date: ActiveValue::Set(date.format(DATE_FORMAT).to_string()),
            category: ActiveValue::Set(category.as_str().to_string()),
            item: ActiveValue::Set(item),
            quantity: ActiveValue::Set(quantity),
            amount: ActiveValue::Set(amount),
            total: ActiveValue::Set(total),
        };
        let result = expenses::Entity::insert(active)
            .exec(&self.database)
            .await?;

        tracing::info!(
            id = result.last_insert_id,
            %category,
            total,
            "expense added"
        );
        Ok(result.last_insert_id)
    }

    /// Every stored expense, oldest first.
    pub async fn fetch_all(&self) -> ResultEngine<Vec<Expense>> {
        let models = expenses::Entity::find()
            .order_by_asc(expenses::Column::Id)
            .all(&self.database)
            .await?;
        tracing::debug!(rows = models.len(), "fetched expenses");
        Ok(models.into_iter().map(Expense::from).collect())
    }

    /// Remove the expense with `id`. Returns `false` when no such row exists,
    /// which is not an error.
    pub async fn delete(&self, id: i64) -> ResultEngine<bool> {
        validate_id(id)?;
        let result = expenses::Entity::delete_by_id(id)
            .exec(&self.database)
            .await?;
        let removed = result.rows_affected > 0;
        if removed {
            tracing::info!(id, "expense deleted");
        } else {
            tracing::debug!(id, "delete ignored, no such expense");
        }
        Ok(removed)
    }
}
