use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::{pizza, restaurant, restaurant_pizza};

use crate::errors::ServiceError;
use crate::pizzeria::domain::NewRestaurantPizza;

#[async_trait]
pub trait PizzeriaRepository: Send + Sync {
    async fn list_restaurants(&self) -> Result<Vec<restaurant::Model>, ServiceError>;
    async fn find_restaurant(&self, id: i32) -> Result<Option<restaurant::Model>, ServiceError>;
    async fn restaurant_pizzas_with_pizza(&self, restaurant_id: i32) -> Result<Vec<(restaurant_pizza::Model, pizza::Model)>, ServiceError>;
    async fn delete_restaurant_cascade(&self, id: i32) -> Result<bool, ServiceError>;
    async fn list_pizzas(&self) -> Result<Vec<pizza::Model>, ServiceError>;
    async fn insert_restaurant_pizza(&self, new: NewRestaurantPizza) -> Result<(restaurant_pizza::Model, pizza::Model, restaurant::Model), ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmPizzeriaRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmPizzeriaRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl PizzeriaRepository for SeaOrmPizzeriaRepository {
    async fn list_restaurants(&self) -> Result<Vec<restaurant::Model>, ServiceError> {
        crate::db::pizzeria_store::list_restaurants(&self.db).await
    }

    async fn find_restaurant(&self, id: i32) -> Result<Option<restaurant::Model>, ServiceError> {
        crate::db::pizzeria_store::get_restaurant(&self.db, id).await
    }

    async fn restaurant_pizzas_with_pizza(&self, restaurant_id: i32) -> Result<Vec<(restaurant_pizza::Model, pizza::Model)>, ServiceError> {
        crate::db::pizzeria_store::restaurant_pizzas_with_pizza(&self.db, restaurant_id).await
    }

    async fn delete_restaurant_cascade(&self, id: i32) -> Result<bool, ServiceError> {
        crate::db::pizzeria_store::delete_restaurant_cascade(&self.db, id).await
    }

    async fn list_pizzas(&self) -> Result<Vec<pizza::Model>, ServiceError> {
        crate::db::pizzeria_store::list_pizzas(&self.db).await
    }

    async fn insert_restaurant_pizza(&self, new: NewRestaurantPizza) -> Result<(restaurant_pizza::Model, pizza::Model, restaurant::Model), ServiceError> {
        crate::db::pizzeria_store::insert_restaurant_pizza(&self.db, new.price, new.pizza_id, new.restaurant_id).await
    }
}
