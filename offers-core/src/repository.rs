use async_trait::async_trait;
use offers_shared::{AccountStatus, Offer};

use crate::CoreResult;

/// Repository trait for offer data access
#[async_trait]
pub trait OffersRepository: Send + Sync {
    async fn add_offer(&self, account_id: &str, offer: Offer) -> CoreResult<()>;

    /// All stored offers, in a stable order
    async fn get_offers(&self) -> CoreResult<Vec<Offer>>;

    async fn get_offer_by_id(&self, offer_id: i64) -> CoreResult<Option<Offer>>;

    async fn update_offer(&self, offer: Offer) -> CoreResult<Offer>;
}

/// Lookup of seller account status
#[async_trait]
pub trait AccountStatusClient: Send + Sync {
    async fn get_account_status(&self, account_id: &str) -> CoreResult<AccountStatus>;
}
