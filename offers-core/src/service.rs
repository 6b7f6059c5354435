use async_trait::async_trait;
use offers_shared::{
    Offer, OfferCategory, OfferSearchCriteria, OfferStatus, SearchResult, ValidationResult,
};
use rust_decimal::Decimal;

use crate::CoreResult;

/// Offer storage, retrieval and lifecycle operations consumed by the HTTP layer.
///
/// Implementations must be safe to share across request handlers.
#[async_trait]
pub trait OffersService: Send + Sync {
    /// A page of offers. `limit` and `offset` are passed through as received;
    /// range checks belong to the implementation.
    async fn get_offers(&self, limit: Option<i64>, offset: Option<i64>) -> CoreResult<Vec<Offer>>;

    /// Add `offer` on behalf of `account_id`. `request_id` is unique per call
    /// and is not derived from the offer or the account.
    async fn add(&self, offer: Offer, account_id: &str, request_id: &str) -> CoreResult<ValidationResult>;

    async fn search_offers(&self, criteria: OfferSearchCriteria) -> CoreResult<SearchResult>;

    async fn update_offer_status(
        &self,
        offer_id: i64,
        new_status: OfferStatus,
        account_id: &str,
    ) -> CoreResult<Offer>;

    async fn get_offers_by_category(
        &self,
        category: OfferCategory,
        limit: usize,
        offset: usize,
    ) -> CoreResult<Vec<Offer>> {
        let criteria = OfferSearchCriteria {
            category: Some(category),
            ..OfferSearchCriteria::page(limit, offset)
        };
        Ok(self.search_offers(criteria).await?.offers)
    }

    async fn get_active_offers(&self, limit: usize, offset: usize) -> CoreResult<Vec<Offer>> {
        let criteria = OfferSearchCriteria {
            status: Some(OfferStatus::Active),
            ..OfferSearchCriteria::page(limit, offset)
        };
        Ok(self.search_offers(criteria).await?.offers)
    }

    async fn get_offers_by_price_range(
        &self,
        min_price: Decimal,
        max_price: Decimal,
        limit: usize,
        offset: usize,
    ) -> CoreResult<Vec<Offer>> {
        let criteria = OfferSearchCriteria {
            min_price: Some(min_price),
            max_price: Some(max_price),
            ..OfferSearchCriteria::page(limit, offset)
        };
        Ok(self.search_offers(criteria).await?.offers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingService {
        seen: Mutex<Vec<OfferSearchCriteria>>,
    }

    #[async_trait]
    impl OffersService for RecordingService {
        async fn get_offers(&self, _limit: Option<i64>, _offset: Option<i64>) -> CoreResult<Vec<Offer>> {
            Ok(vec![])
        }

        async fn add(&self, _offer: Offer, _account_id: &str, _request_id: &str) -> CoreResult<ValidationResult> {
            Ok(ValidationResult::default())
        }

        async fn search_offers(&self, criteria: OfferSearchCriteria) -> CoreResult<SearchResult> {
            self.seen.lock().unwrap().push(criteria);
            Ok(SearchResult {
                offers: vec![],
                total_count: 0,
                has_next: false,
                has_previous: false,
            })
        }

        async fn update_offer_status(&self, offer_id: i64, _s: OfferStatus, _a: &str) -> CoreResult<Offer> {
            Err(crate::CoreError::OfferNotFound(format!("Offer with id {} not found", offer_id)))
        }
    }

    #[tokio::test]
    async fn test_convenience_queries_build_criteria() {
        let service = RecordingService::default();

        service.get_offers_by_category(OfferCategory::Books, 5, 10).await.unwrap();
        service.get_active_offers(20, 0).await.unwrap();
        service
            .get_offers_by_price_range(Decimal::new(10, 0), Decimal::new(50, 0), 3, 1)
            .await
            .unwrap();

        let seen = service.seen.lock().unwrap();
        assert_eq!(seen.len(), 3);

        assert_eq!(seen[0].category, Some(OfferCategory::Books));
        assert_eq!((seen[0].limit, seen[0].offset), (5, 10));

        assert_eq!(seen[1].status, Some(OfferStatus::Active));
        assert_eq!(seen[1].category, None);

        assert_eq!(seen[2].min_price, Some(Decimal::new(10, 0)));
        assert_eq!(seen[2].max_price, Some(Decimal::new(50, 0)));
        assert_eq!((seen[2].limit, seen[2].offset), (3, 1));
    }
}
