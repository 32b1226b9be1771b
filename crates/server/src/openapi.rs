use utoipa::OpenApi;

use common::types::Health;
use service::pizzeria::{
    CreateRestaurantPizzaRequest, PizzaSummary, RestaurantDetail, RestaurantPizzaCreated, RestaurantPizzaEntry,
    RestaurantSummary,
};

use crate::errors::{ErrorBody, ErrorsBody};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::restaurants::list,
        crate::routes::restaurants::get,
        crate::routes::restaurants::delete,
        crate::routes::pizzas::list,
        crate::routes::restaurant_pizzas::create,
    ),
    components(
        schemas(
            Health,
            RestaurantSummary,
            RestaurantDetail,
            RestaurantPizzaEntry,
            PizzaSummary,
            RestaurantPizzaCreated,
            CreateRestaurantPizzaRequest,
            ErrorBody,
            ErrorsBody,
        )
    ),
    tags(
        (name = "health"),
        (name = "restaurants"),
        (name = "pizzas"),
        (name = "restaurant_pizzas")
    )
)]
pub struct ApiDoc;
