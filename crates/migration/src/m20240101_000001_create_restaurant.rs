//! Create `restaurants` table.
//!
//! Parent of `restaurant_pizzas`; rows are seeded, never created over HTTP.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Restaurants::Table)
                    .if_not_exists()
                    .col(pk_auto(Restaurants::Id))
                    .col(string(Restaurants::Name))
                    .col(string(Restaurants::Address))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Restaurants::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Restaurants { Table, Id, Name, Address }
