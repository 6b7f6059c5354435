use std::sync::Arc;

use async_trait::async_trait;
use offers_core::pagination::paginate;
use offers_core::{AccountStatusClient, CoreError, CoreResult, OffersRepository, OffersService};
use offers_shared::{Offer, OfferSearchCriteria, OfferStatus, SearchResult, ValidationResult};
use tracing::{debug, info, warn};

use crate::search::OfferSearchEngine;
use crate::validation::OfferValidator;

/// Offers service backed by a repository and an account status lookup
pub struct DefaultOffersService {
    repository: Arc<dyn OffersRepository>,
    accounts: Arc<dyn AccountStatusClient>,
    validator: OfferValidator,
    search: OfferSearchEngine,
}

impl DefaultOffersService {
    pub fn new(repository: Arc<dyn OffersRepository>, accounts: Arc<dyn AccountStatusClient>) -> Self {
        Self::with_validator(repository, accounts, OfferValidator::new())
    }

    pub fn with_validator(
        repository: Arc<dyn OffersRepository>,
        accounts: Arc<dyn AccountStatusClient>,
        validator: OfferValidator,
    ) -> Self {
        Self {
            repository,
            accounts,
            validator,
            search: OfferSearchEngine::new(),
        }
    }
}

/// Limit must be positive and offset non-negative when present
fn page_bounds(limit: Option<i64>, offset: Option<i64>) -> CoreResult<(Option<usize>, Option<usize>)> {
    if limit.is_some_and(|l| l <= 0) || offset.is_some_and(|o| o < 0) {
        return Err(CoreError::InvalidPagination);
    }
    let to_usize = |v: i64| usize::try_from(v).map_err(|_| CoreError::InvalidPagination);
    Ok((limit.map(to_usize).transpose()?, offset.map(to_usize).transpose()?))
}

#[async_trait]
impl OffersService for DefaultOffersService {
    #[tracing::instrument(skip(self))]
    async fn get_offers(&self, limit: Option<i64>, offset: Option<i64>) -> CoreResult<Vec<Offer>> {
        let (limit, offset) = page_bounds(limit, offset)?;
        let offers = self.repository.get_offers().await?;
        Ok(paginate(offers, offset, limit))
    }

    #[tracing::instrument(skip(self, offer), fields(offer_id = offer.id))]
    async fn add(&self, offer: Offer, account_id: &str, request_id: &str) -> CoreResult<ValidationResult> {
        let status = self.accounts.get_account_status(account_id).await?;
        if !status.can_publish() {
            warn!("Account {} cannot publish offers: {:?}", account_id, status);
            return Err(CoreError::IncorrectAccountStatus);
        }

        let result = self.validator.validate(&offer);
        if !result.is_valid {
            debug!("Offer {} rejected: {:?}", offer.id, result.errors);
            return Ok(result);
        }

        let offer_id = offer.id;
        self.repository.add_offer(account_id, offer).await?;
        info!("Offer {} added for account {}", offer_id, account_id);
        Ok(result)
    }

    async fn search_offers(&self, criteria: OfferSearchCriteria) -> CoreResult<SearchResult> {
        let offers = self.repository.get_offers().await?;
        Ok(self.search.search(offers, &criteria))
    }

    #[tracing::instrument(skip(self))]
    async fn update_offer_status(
        &self,
        offer_id: i64,
        new_status: OfferStatus,
        account_id: &str,
    ) -> CoreResult<Offer> {
        let offer = self
            .repository
            .get_offer_by_id(offer_id)
            .await?
            .ok_or_else(|| CoreError::OfferNotFound(format!("Offer with id {} not found", offer_id)))?;

        if offer.seller_id != account_id {
            return Err(CoreError::UnauthorizedOfferModification(format!(
                "User {} cannot modify offer {}",
                account_id, offer_id
            )));
        }

        let updated = match new_status {
            OfferStatus::Active => offer.activate(),
            OfferStatus::Suspended => offer.suspend(),
            OfferStatus::Expired => offer.expire(),
            OfferStatus::Draft => offer.to_draft(),
        };

        let result = self.validator.validate(&updated);
        if !result.is_valid {
            return Err(CoreError::OfferValidation(format!(
                "Cannot update offer status: {}",
                result.error_messages().join(", ")
            )));
        }

        let saved = self.repository.update_offer(updated).await?;
        info!("Offer {} moved to {:?}", offer_id, saved.status);
        Ok(saved)
    }
}
