use std::collections::BTreeSet;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use offers_core::CoreError;
use offers_shared::{
    Offer, OfferCategory, OfferSearchCriteria, OfferStatus, Offers, SearchResult, SortBy,
    ValidationError, ValidationResult, ValidationWarning,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{error::AppError, state::AppState};

// ============================================================================
// Request/Response Types
// ============================================================================

fn default_limit() -> i64 {
    20
}

#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

#[derive(Debug, Deserialize)]
pub struct PagingParams {
    #[serde(default = "default_page_size")]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

fn default_page_size() -> usize {
    offers_shared::search::DEFAULT_PAGE_SIZE
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub query: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub category: Option<OfferCategory>,
    pub status: Option<OfferStatus>,
    pub seller_id: Option<String>,
    /// Comma-separated
    pub tags: Option<String>,
    #[serde(default)]
    pub sort_by: SortBy,
    #[serde(default = "default_page_size")]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

impl From<SearchParams> for OfferSearchCriteria {
    fn from(params: SearchParams) -> Self {
        let tags = params.tags.map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect::<BTreeSet<_>>()
        });

        OfferSearchCriteria {
            query: params.query,
            min_price: params.min_price,
            max_price: params.max_price,
            category: params.category,
            status: params.status,
            seller_id: params.seller_id,
            tags,
            sort_by: params.sort_by,
            limit: params.limit,
            offset: params.offset,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRangeParams {
    pub min_price: Decimal,
    pub max_price: Decimal,
    #[serde(default = "default_page_size")]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChangeParams {
    pub new_status: OfferStatus,
    pub account_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountParams {
    pub account_id: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct IssueResponse<C> {
    pub code: C,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResultResponse {
    pub is_valid: bool,
    pub errors: Vec<IssueResponse<ValidationError>>,
    pub warnings: Vec<IssueResponse<ValidationWarning>>,
}

impl From<ValidationResult> for ValidationResultResponse {
    fn from(result: ValidationResult) -> Self {
        Self {
            is_valid: result.is_valid,
            errors: result
                .errors
                .into_iter()
                .map(|code| IssueResponse { code, message: code.message().to_string() })
                .collect(),
            warnings: result
                .warnings
                .into_iter()
                .map(|code| IssueResponse { code, message: code.message().to_string() })
                .collect(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/offers", get(list_offers))
        .route("/api/offers/search", get(search_offers))
        .route("/api/offers/category/{category}", get(offers_by_category))
        .route("/api/offers/active", get(active_offers))
        .route("/api/offers/price-range", get(offers_by_price_range))
        .route("/api/offers/users/{user_id}", post(add_offer))
        .route("/api/offers/{offer_id}/status", put(update_offer_status))
        .route("/api/offers/{offer_id}/activate", post(activate_offer))
        .route("/api/offers/{offer_id}/suspend", post(suspend_offer))
        .route("/api/offers/{offer_id}/expire", post(expire_offer))
}

/// GET /api/offers
pub async fn list_offers(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> Result<Json<Offers>, AppError> {
    let offers = state.offers.get_offers(Some(page.limit), Some(page.offset)).await?;
    Ok(Json(Offers::new(offers)))
}

/// GET /api/offers/search
pub async fn search_offers(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResult>, AppError> {
    let result = state.offers.search_offers(params.into()).await?;
    Ok(Json(result))
}

/// GET /api/offers/category/:category
pub async fn offers_by_category(
    State(state): State<AppState>,
    Path(category): Path<OfferCategory>,
    Query(page): Query<PagingParams>,
) -> Result<Json<Vec<Offer>>, AppError> {
    let offers = state
        .offers
        .get_offers_by_category(category, page.limit, page.offset)
        .await?;
    Ok(Json(offers))
}

/// GET /api/offers/active
pub async fn active_offers(
    State(state): State<AppState>,
    Query(page): Query<PagingParams>,
) -> Result<Json<Vec<Offer>>, AppError> {
    let offers = state.offers.get_active_offers(page.limit, page.offset).await?;
    Ok(Json(offers))
}

/// GET /api/offers/price-range
pub async fn offers_by_price_range(
    State(state): State<AppState>,
    Query(params): Query<PriceRangeParams>,
) -> Result<Json<Vec<Offer>>, AppError> {
    let offers = state
        .offers
        .get_offers_by_price_range(params.min_price, params.max_price, params.limit, params.offset)
        .await?;
    Ok(Json(offers))
}

/// POST /api/offers/users/:user_id
/// 201 with the validation result when stored, 400 when rejected by validation,
/// 403 when the account may not publish
pub async fn add_offer(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(offer): Json<Offer>,
) -> Result<(StatusCode, Json<ValidationResultResponse>), AppError> {
    let request_id = Uuid::new_v4().to_string();

    match state.offers.add(offer, &user_id, &request_id).await {
        Ok(result) if result.is_valid => Ok((StatusCode::CREATED, Json(result.into()))),
        Ok(result) => Ok((StatusCode::BAD_REQUEST, Json(result.into()))),
        Err(CoreError::IncorrectAccountStatus) => {
            Ok((StatusCode::FORBIDDEN, Json(ValidationResult::rejected().into())))
        }
        Err(err) => Err(err.into()),
    }
}

/// PUT /api/offers/:offer_id/status?newStatus=&accountId=
pub async fn update_offer_status(
    State(state): State<AppState>,
    Path(offer_id): Path<i64>,
    Query(params): Query<StatusChangeParams>,
) -> Result<Json<Offer>, Response> {
    change_status(&state, offer_id, params.new_status, &params.account_id).await
}

pub async fn activate_offer(
    State(state): State<AppState>,
    Path(offer_id): Path<i64>,
    Query(params): Query<AccountParams>,
) -> Result<Json<Offer>, Response> {
    change_status(&state, offer_id, OfferStatus::Active, &params.account_id).await
}

pub async fn suspend_offer(
    State(state): State<AppState>,
    Path(offer_id): Path<i64>,
    Query(params): Query<AccountParams>,
) -> Result<Json<Offer>, Response> {
    change_status(&state, offer_id, OfferStatus::Suspended, &params.account_id).await
}

pub async fn expire_offer(
    State(state): State<AppState>,
    Path(offer_id): Path<i64>,
    Query(params): Query<AccountParams>,
) -> Result<Json<Offer>, Response> {
    change_status(&state, offer_id, OfferStatus::Expired, &params.account_id).await
}

async fn change_status(
    state: &AppState,
    offer_id: i64,
    new_status: OfferStatus,
    account_id: &str,
) -> Result<Json<Offer>, Response> {
    let err = match state.offers.update_offer_status(offer_id, new_status, account_id).await {
        Ok(offer) => return Ok(Json(offer)),
        Err(err) => err,
    };

    // rejected transitions answer with a bare status
    let rejected = match &err {
        CoreError::OfferNotFound(_) => Some(StatusCode::NOT_FOUND),
        CoreError::UnauthorizedOfferModification(_) => Some(StatusCode::FORBIDDEN),
        CoreError::OfferValidation(_) => Some(StatusCode::BAD_REQUEST),
        _ => None,
    };

    match rejected {
        Some(status) => {
            tracing::debug!("Status change for offer {} rejected: {}", offer_id, err);
            Err(status.into_response())
        }
        None => Err(AppError::from(err).into_response()),
    }
}
