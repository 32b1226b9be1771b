use sea_orm::{entity::prelude::*, Set, ConnectionTrait};
use serde::{Deserialize, Serialize, Serializer};

use crate::{errors, pizza, restaurant};

/// Join row linking a restaurant to a pizza it sells, with that restaurant's price.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "restaurant_pizzas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub price: f64,
    pub restaurant_id: i32,
    pub pizza_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Restaurant,
    Pizza,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Restaurant => Entity::belongs_to(restaurant::Entity)
                .from(Column::RestaurantId)
                .to(restaurant::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
            Relation::Pizza => Entity::belongs_to(pizza::Entity)
                .from(Column::PizzaId)
                .to(pizza::Column::Id)
                .into(),
        }
    }
}

impl Related<restaurant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Restaurant.def()
    }
}

impl Related<pizza::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pizza.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// A validated price, inclusive bounds [`Price::MIN`, `Price::MAX`].
///
/// Serializes as a JSON integer when it has no fractional part, so a price
/// of 15 goes over the wire as `15` rather than `15.0`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    pub const MIN: f64 = 1.0;
    pub const MAX: f64 = 30.0;

    pub fn new(value: f64) -> Result<Self, errors::ModelError> {
        validate_price(value)?;
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract() == 0.0 {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

pub fn validate_price(value: f64) -> Result<(), errors::ModelError> {
    if !value.is_finite() || !(Price::MIN..=Price::MAX).contains(&value) {
        return Err(errors::ModelError::Validation("price must be between 1 and 30".into()));
    }
    Ok(())
}

/// Insert a join row. Callers are expected to have resolved both references.
pub async fn create<C: ConnectionTrait>(
    db: &C,
    price: Price,
    restaurant_id: i32,
    pizza_id: i32,
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        price: Set(price.value()),
        restaurant_id: Set(restaurant_id),
        pizza_id: Set(pizza_id),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Delete every join row owned by `restaurant_id`; returns the number removed.
pub async fn delete_for_restaurant<C: ConnectionTrait>(db: &C, restaurant_id: i32) -> Result<u64, errors::ModelError> {
    let res = Entity::delete_many()
        .filter(Column::RestaurantId.eq(restaurant_id))
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected)
}
