use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use offers_core::{CoreError, CoreResult, OffersRepository};
use offers_shared::Offer;
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory offer store keyed by offer id.
///
/// Offers are returned in ascending id order. Adding an offer whose id is
/// already stored replaces the previous version.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOffersRepository {
    offers: Arc<RwLock<BTreeMap<i64, Offer>>>,
}

impl InMemoryOffersRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-populated with the demo catalogue
    pub fn with_demo_offers() -> Self {
        Self::with_offers(crate::seed::demo_offers())
    }

    pub fn with_offers(offers: impl IntoIterator<Item = Offer>) -> Self {
        let offers = offers.into_iter().map(|o| (o.id, o)).collect();
        Self {
            offers: Arc::new(RwLock::new(offers)),
        }
    }

    pub async fn len(&self) -> usize {
        self.offers.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.offers.read().await.is_empty()
    }
}

#[async_trait]
impl OffersRepository for InMemoryOffersRepository {
    async fn add_offer(&self, account_id: &str, offer: Offer) -> CoreResult<()> {
        debug!("Storing offer {} for account {}", offer.id, account_id);
        self.offers.write().await.insert(offer.id, offer);
        Ok(())
    }

    async fn get_offers(&self) -> CoreResult<Vec<Offer>> {
        Ok(self.offers.read().await.values().cloned().collect())
    }

    async fn get_offer_by_id(&self, offer_id: i64) -> CoreResult<Option<Offer>> {
        Ok(self.offers.read().await.get(&offer_id).cloned())
    }

    async fn update_offer(&self, offer: Offer) -> CoreResult<Offer> {
        let mut offers = self.offers.write().await;
        match offers.get_mut(&offer.id) {
            Some(stored) => {
                *stored = offer.clone();
                Ok(offer)
            }
            None => Err(CoreError::OfferNotFound(format!("Offer with id {} not found", offer.id))),
        }
    }
}
