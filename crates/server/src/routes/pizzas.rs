use axum::{extract::State, Json};
use tracing::info;

use service::pizzeria::PizzaSummary;

use crate::errors::{ApiError, ErrorsBody};
use crate::state::ServerState;

#[utoipa::path(
    get,
    path = "/pizzas",
    tag = "pizzas",
    responses(
        (status = 200, body = [PizzaSummary]),
        (status = 500, body = ErrorsBody)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<PizzaSummary>>, ApiError> {
    let list = state.pizzeria.list_pizzas().await?;
    info!(count = list.len(), "list pizzas");
    Ok(Json(list))
}
