use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use offers_shared::{Offer, Offers};
use serde::Deserialize;
use uuid::Uuid;

use crate::{error::AppError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub limit: i64,
    pub offset: i64,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/offers", get(list_offers))
        .route("/users/{user_id}/offers", post(add_offer))
}

/// GET /offers?limit=&offset=
/// Both parameters are required; range checks are left to the service
pub async fn list_offers(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> Result<Json<Offers>, AppError> {
    let offers = state.offers.get_offers(Some(page.limit), Some(page.offset)).await?;
    Ok(Json(Offers::new(offers)))
}

/// POST /users/:user_id/offers
/// Every call gets a fresh request id, so retries are not deduplicated
pub async fn add_offer(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(offer): Json<Offer>,
) -> Result<StatusCode, AppError> {
    let request_id = Uuid::new_v4().to_string();

    let result = state.offers.add(offer, &user_id, &request_id).await?;
    if !result.is_valid {
        tracing::warn!("Offer from {} not stored ({}): {:?}", user_id, request_id, result.errors);
    }

    Ok(StatusCode::OK)
}
