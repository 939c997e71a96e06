use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // `if_not_exists` lets stores created before migrations were tracked
        // open without error.
        manager
            .create_table(
                Table::create()
                    .table(Expenses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Expenses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Expenses::Date).text().not_null())
                    .col(ColumnDef::new(Expenses::Category).text().not_null())
                    .col(ColumnDef::new(Expenses::Item).text().not_null())
                    .col(ColumnDef::new(Expenses::Quantity).integer().not_null())
                    .col(ColumnDef::new(Expenses::Amount).double().not_null())
                    .col(ColumnDef::new(Expenses::Total).double().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Expenses::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Expenses {
    Table,
    Id,
    #[iden = "Date"]
    Date,
    #[iden = "Category"]
    Category,
    #[iden = "Item"]
    Item,
    #[iden = "Quantity"]
    Quantity,
    #[iden = "Amount"]
    Amount,
    #[iden = "Total"]
    Total,
}
