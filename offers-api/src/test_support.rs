use std::str::FromStr;
use std::sync::Mutex;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use offers_core::{CoreError, CoreResult, OffersService};
use offers_shared::{
    Offer, OfferCategory, OfferSearchCriteria, OfferStatus, SearchResult, ValidationResult,
};
use rust_decimal::Decimal;
use tower::ServiceExt;
use url::Url;

/// Records every call and answers with canned data
#[derive(Default)]
pub struct MockOffersService {
    pub offers: Vec<Offer>,
    pub add_result: ValidationResult,
    pub fail: Option<fn() -> CoreError>,
    pub list_calls: Mutex<Vec<(Option<i64>, Option<i64>)>>,
    pub add_calls: Mutex<Vec<(Offer, String, String)>>,
    pub search_calls: Mutex<Vec<OfferSearchCriteria>>,
    pub status_calls: Mutex<Vec<(i64, OfferStatus, String)>>,
}

impl MockOffersService {
    pub fn returning(offers: Vec<Offer>) -> Self {
        Self {
            offers,
            add_result: ValidationResult::new(vec![], vec![]),
            ..Self::default()
        }
    }

    pub fn failing(fail: fn() -> CoreError) -> Self {
        Self {
            fail: Some(fail),
            ..Self::default()
        }
    }

    fn check(&self) -> CoreResult<()> {
        match self.fail {
            Some(fail) => Err(fail()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl OffersService for MockOffersService {
    async fn get_offers(&self, limit: Option<i64>, offset: Option<i64>) -> CoreResult<Vec<Offer>> {
        self.list_calls.lock().unwrap().push((limit, offset));
        self.check()?;
        Ok(self.offers.clone())
    }

    async fn add(&self, offer: Offer, account_id: &str, request_id: &str) -> CoreResult<ValidationResult> {
        self.add_calls
            .lock()
            .unwrap()
            .push((offer, account_id.to_string(), request_id.to_string()));
        self.check()?;
        Ok(self.add_result.clone())
    }

    async fn search_offers(&self, criteria: OfferSearchCriteria) -> CoreResult<SearchResult> {
        self.search_calls.lock().unwrap().push(criteria);
        self.check()?;
        Ok(SearchResult {
            offers: self.offers.clone(),
            total_count: self.offers.len() as u64,
            has_next: false,
            has_previous: false,
        })
    }

    async fn update_offer_status(
        &self,
        offer_id: i64,
        new_status: OfferStatus,
        account_id: &str,
    ) -> CoreResult<Offer> {
        self.status_calls
            .lock()
            .unwrap()
            .push((offer_id, new_status, account_id.to_string()));
        self.check()?;
        let mut offer = sample_offer(offer_id);
        offer.status = new_status;
        Ok(offer)
    }
}

pub fn sample_offer(id: i64) -> Offer {
    Offer::new(
        id,
        format!("Offer number {}", id),
        "A perfectly ordinary test offer",
        Decimal::from_str("19.99").unwrap(),
        OfferCategory::Other,
        Url::parse("https://example.com/offer.jpg").unwrap(),
        "seller1",
    )
}

pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
