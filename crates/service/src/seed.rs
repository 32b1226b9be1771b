use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};
use tracing::info;

use models::restaurant_pizza::Price;
use models::{pizza, restaurant, restaurant_pizza};

use crate::errors::ServiceError;

const RESTAURANTS: [(&str, &str); 3] = [
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: [(&str, &str); 3] = [
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// (restaurant index, pizza index, price)
const LINKS: [(usize, usize, f64); 3] = [(0, 0, 1.0), (1, 1, 4.0), (2, 2, 5.0)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub restaurants: usize,
    pub pizzas: usize,
    pub restaurant_pizzas: usize,
}

/// Replace the contents of all three tables with the demo data set, in one transaction.
pub async fn seed(db: &DatabaseConnection) -> Result<SeedReport, ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    restaurant_pizza::Entity::delete_many().exec(&txn).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    restaurant::Entity::delete_many().exec(&txn).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    pizza::Entity::delete_many().exec(&txn).await.map_err(|e| ServiceError::Db(e.to_string()))?;

    let mut restaurants = Vec::with_capacity(RESTAURANTS.len());
    for (name, address) in RESTAURANTS {
        restaurants.push(restaurant::create(&txn, name, address).await?);
    }
    let mut pizzas = Vec::with_capacity(PIZZAS.len());
    for (name, ingredients) in PIZZAS {
        pizzas.push(pizza::create(&txn, name, ingredients).await?);
    }
    for (r, p, price) in LINKS {
        restaurant_pizza::create(&txn, Price::new(price)?, restaurants[r].id, pizzas[p].id).await?;
    }

    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let report = SeedReport { restaurants: restaurants.len(), pizzas: pizzas.len(), restaurant_pizzas: LINKS.len() };
    info!(restaurants = report.restaurants, pizzas = report.pizzas, restaurant_pizzas = report.restaurant_pizzas, "seeded");
    Ok(report)
}
