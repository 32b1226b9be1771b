use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use serde_json::Value;
use tracing::{debug, info};

use service::pizzeria::{CreateRestaurantPizzaRequest, RestaurantPizzaCreated};

use crate::errors::{ApiError, ErrorsBody};
use crate::state::ServerState;

/// The body is taken as raw bytes so that a missing, non-JSON or wrongly typed
/// body all fail the same way.
#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    tag = "restaurant_pizzas",
    request_body = CreateRestaurantPizzaRequest,
    responses(
        (status = 201, body = RestaurantPizzaCreated),
        (status = 400, body = ErrorsBody),
        (status = 500, body = ErrorsBody)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<(StatusCode, Json<RestaurantPizzaCreated>), ApiError> {
    let value: Value = serde_json::from_slice(&body).map_err(|e| {
        debug!(error = %e, "restaurant_pizza body is not JSON");
        ApiError::Validation
    })?;
    let created = state.pizzeria.create_restaurant_pizza(&value).await?;
    info!(id = created.id, restaurant_id = created.restaurant_id, pizza_id = created.pizza_id, "created restaurant_pizza");
    Ok((StatusCode::CREATED, Json(created)))
}
