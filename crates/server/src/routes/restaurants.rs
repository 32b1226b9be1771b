use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use service::pizzeria::{RestaurantDetail, RestaurantSummary};

use crate::errors::{ApiError, ErrorBody, ErrorsBody};
use crate::state::ServerState;

/// Ids that do not parse as an integer cannot name a restaurant.
fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>().map_err(|_| ApiError::RestaurantNotFound)
}

#[utoipa::path(
    get,
    path = "/restaurants",
    tag = "restaurants",
    responses(
        (status = 200, body = [RestaurantSummary]),
        (status = 500, body = ErrorsBody)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<RestaurantSummary>>, ApiError> {
    let list = state.pizzeria.list_restaurants().await?;
    info!(count = list.len(), "list restaurants");
    Ok(Json(list))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    tag = "restaurants",
    params(("id" = i32, Path, description = "Restaurant id")),
    responses(
        (status = 200, body = RestaurantDetail),
        (status = 404, body = ErrorBody),
        (status = 500, body = ErrorsBody)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<RestaurantDetail>, ApiError> {
    let id = parse_id(&id)?;
    let detail = state.pizzeria.get_restaurant(id).await?;
    Ok(Json(detail))
}

#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    tag = "restaurants",
    params(("id" = i32, Path, description = "Restaurant id")),
    responses(
        (status = 204, description = "Restaurant and its restaurant_pizzas deleted"),
        (status = 404, body = ErrorBody),
        (status = 500, body = ErrorsBody)
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.pizzeria.delete_restaurant(id).await?;
    info!(restaurant_id = id, "deleted restaurant");
    Ok(StatusCode::NO_CONTENT)
}
