use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use tracing::info;

use models::restaurant_pizza::Price;
use models::{pizza, restaurant, restaurant_pizza};

use crate::errors::ServiceError;

pub async fn list_restaurants<C: ConnectionTrait>(db: &C) -> Result<Vec<restaurant::Model>, ServiceError> {
    restaurant::Entity::find()
        .order_by_asc(restaurant::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn get_restaurant<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<restaurant::Model>, ServiceError> {
    restaurant::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Join rows of one restaurant, each paired with its pizza, in insertion order.
pub async fn restaurant_pizzas_with_pizza<C: ConnectionTrait>(
    db: &C,
    restaurant_id: i32,
) -> Result<Vec<(restaurant_pizza::Model, pizza::Model)>, ServiceError> {
    let rows = restaurant_pizza::Entity::find()
        .filter(restaurant_pizza::Column::RestaurantId.eq(restaurant_id))
        .order_by_asc(restaurant_pizza::Column::Id)
        .find_also_related(pizza::Entity)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    rows.into_iter()
        .map(|(rp, p)| match p {
            Some(p) => Ok((rp, p)),
            None => Err(ServiceError::Db(format!("restaurant_pizza {} references a missing pizza", rp.id))),
        })
        .collect()
}

pub async fn list_pizzas<C: ConnectionTrait>(db: &C) -> Result<Vec<pizza::Model>, ServiceError> {
    pizza::Entity::find()
        .order_by_asc(pizza::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Delete a restaurant and its join rows in one transaction.
/// Returns `false` when no restaurant has that id.
pub async fn delete_restaurant_cascade(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let found = restaurant::Entity::find_by_id(id)
        .one(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if found.is_none() {
        txn.rollback().await.map_err(|e| ServiceError::Db(e.to_string()))?;
        return Ok(false);
    }
    let removed = restaurant_pizza::delete_for_restaurant(&txn, id).await?;
    restaurant::Entity::delete_by_id(id)
        .exec(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(restaurant_id = id, restaurant_pizzas_removed = removed, "restaurant_deleted");
    Ok(true)
}

/// Resolve both references and insert the join row in one transaction.
/// An id that resolves to nothing is a validation failure, not a storage fault.
pub async fn insert_restaurant_pizza(
    db: &DatabaseConnection,
    price: Price,
    pizza_id: i32,
    restaurant_id: i32,
) -> Result<(restaurant_pizza::Model, pizza::Model, restaurant::Model), ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let pizza = pizza::Entity::find_by_id(pizza_id)
        .one(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::Validation(format!("pizza {} does not exist", pizza_id)))?;
    let restaurant = restaurant::Entity::find_by_id(restaurant_id)
        .one(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::Validation(format!("restaurant {} does not exist", restaurant_id)))?;
    let created = restaurant_pizza::create(&txn, price, restaurant.id, pizza.id).await?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(restaurant_pizza_id = created.id, restaurant_id, pizza_id, "restaurant_pizza_created");
    Ok((created, pizza, restaurant))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, seeded_db};

    #[tokio::test]
    async fn lists_are_ordered_by_id() -> Result<(), anyhow::Error> {
        let db = seeded_db().await?;
        let first = list_restaurants(&db).await?;
        let second = list_restaurants(&db).await?;
        assert_eq!(first, second);
        assert!(first.windows(2).all(|w| w[0].id < w[1].id));

        let pizzas = list_pizzas(&db).await?;
        assert_eq!(pizzas.len(), 3);
        assert!(pizzas.windows(2).all(|w| w[0].id < w[1].id));
        Ok(())
    }

    #[tokio::test]
    async fn delete_unknown_restaurant_is_false() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        assert!(!delete_restaurant_cascade(&db, 42).await?);
        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_join_rows_but_keeps_pizzas() -> Result<(), anyhow::Error> {
        let db = seeded_db().await?;
        let target = list_restaurants(&db).await?[0].clone();
        assert!(!restaurant_pizzas_with_pizza(&db, target.id).await?.is_empty());

        assert!(delete_restaurant_cascade(&db, target.id).await?);
        assert!(get_restaurant(&db, target.id).await?.is_none());
        assert!(restaurant_pizzas_with_pizza(&db, target.id).await?.is_empty());
        assert_eq!(list_pizzas(&db).await?.len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn insert_rejects_unknown_references() -> Result<(), anyhow::Error> {
        let db = seeded_db().await?;
        let r = list_restaurants(&db).await?[0].clone();
        let p = list_pizzas(&db).await?[0].clone();
        let price = Price::new(5.0)?;

        let err = insert_restaurant_pizza(&db, price, 9999, r.id).await.unwrap_err();
        assert!(err.is_validation());
        let err = insert_restaurant_pizza(&db, price, p.id, 9999).await.unwrap_err();
        assert!(err.is_validation());

        let before = restaurant_pizzas_with_pizza(&db, r.id).await?.len();
        let (rp, pizza, restaurant) = insert_restaurant_pizza(&db, price, p.id, r.id).await?;
        assert_eq!(rp.price, 5.0);
        assert_eq!(pizza, p);
        assert_eq!(restaurant, r);
        assert_eq!(restaurant_pizzas_with_pizza(&db, r.id).await?.len(), before + 1);
        Ok(())
    }
}
