//! Migrator registering the pizzeria tables in dependency order.
//! The join table comes last because it references both parents.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_restaurant;
mod m20240101_000002_create_pizza;
mod m20240101_000003_create_restaurant_pizza;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_restaurant::Migration),
            Box::new(m20240101_000002_create_pizza::Migration),
            Box::new(m20240101_000003_create_restaurant_pizza::Migration),
        ]
    }
}
