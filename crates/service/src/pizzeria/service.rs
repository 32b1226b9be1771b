use std::sync::Arc;
use serde_json::Value;
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::pizzeria::domain::{
    NewRestaurantPizza, PizzaSummary, RestaurantDetail, RestaurantPizzaCreated, RestaurantPizzaEntry, RestaurantSummary,
};
use crate::pizzeria::repository::PizzeriaRepository;

/// Application service for restaurants, pizzas and their price links.
/// Shapes repository rows into the per-endpoint projections.
pub struct PizzeriaService<R: PizzeriaRepository> {
    repo: Arc<R>,
}

impl<R: PizzeriaRepository> Clone for PizzeriaService<R> {
    fn clone(&self) -> Self { Self { repo: self.repo.clone() } }
}

impl<R: PizzeriaRepository> PizzeriaService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn list_restaurants(&self) -> Result<Vec<RestaurantSummary>, ServiceError> {
        let rows = self.repo.list_restaurants().await?;
        Ok(rows.into_iter().map(RestaurantSummary::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_restaurant(&self, id: i32) -> Result<RestaurantDetail, ServiceError> {
        let restaurant = self
            .repo
            .find_restaurant(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Restaurant"))?;
        let restaurant_pizzas = self
            .repo
            .restaurant_pizzas_with_pizza(restaurant.id)
            .await?
            .into_iter()
            .map(|(rp, p)| RestaurantPizzaEntry::from_models(rp, p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RestaurantDetail {
            id: restaurant.id,
            name: restaurant.name,
            address: restaurant.address,
            restaurant_pizzas,
        })
    }

    #[instrument(skip(self))]
    pub async fn delete_restaurant(&self, id: i32) -> Result<(), ServiceError> {
        if self.repo.delete_restaurant_cascade(id).await? {
            Ok(())
        } else {
            Err(ServiceError::not_found("Restaurant"))
        }
    }

    #[instrument(skip(self))]
    pub async fn list_pizzas(&self) -> Result<Vec<PizzaSummary>, ServiceError> {
        let rows = self.repo.list_pizzas().await?;
        Ok(rows.into_iter().map(PizzaSummary::from).collect())
    }

    /// Validate a raw create body, then insert. Unknown ids come back as
    /// `ServiceError::Validation`.
    #[instrument(skip(self, body))]
    pub async fn create_restaurant_pizza(&self, body: &Value) -> Result<RestaurantPizzaCreated, ServiceError> {
        let new = NewRestaurantPizza::from_json(body)?;
        let (rp, pizza, restaurant) = self.repo.insert_restaurant_pizza(new).await?;
        info!(restaurant_pizza_id = rp.id, price = rp.price, "restaurant_pizza_linked");
        RestaurantPizzaCreated::from_models(rp, pizza, restaurant)
    }
}
