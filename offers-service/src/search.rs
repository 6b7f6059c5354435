use std::cmp::Reverse;

use offers_core::pagination::paginate;
use offers_shared::{Offer, OfferSearchCriteria, SearchResult, SortBy};

/// Filters, sorts and pages an in-memory list of offers
#[derive(Debug, Default, Clone, Copy)]
pub struct OfferSearchEngine;

impl OfferSearchEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn search(&self, offers: Vec<Offer>, criteria: &OfferSearchCriteria) -> SearchResult {
        let mut matched: Vec<Offer> = offers
            .into_iter()
            .filter(|offer| matches(offer, criteria))
            .collect();

        let total_count = matched.len() as u64;
        sort_offers(&mut matched, criteria.sort_by);
        let offers = paginate(matched, Some(criteria.offset), Some(criteria.limit));

        SearchResult {
            offers,
            total_count,
            has_next: (criteria.offset.saturating_add(criteria.limit) as u64) < total_count,
            has_previous: criteria.offset > 0,
        }
    }
}

fn matches(offer: &Offer, criteria: &OfferSearchCriteria) -> bool {
    let query_match = criteria.query.as_deref().map_or(true, |query| {
        let term = query.to_lowercase();
        offer.title.to_lowercase().contains(&term)
            || offer.description.to_lowercase().contains(&term)
            || offer.tags.iter().any(|tag| tag.to_lowercase().contains(&term))
    });

    let price_match = criteria.min_price.map_or(true, |min| offer.price >= min)
        && criteria.max_price.map_or(true, |max| offer.price <= max);

    let category_match = criteria.category.map_or(true, |c| offer.category == c);
    let status_match = criteria.status.map_or(true, |s| offer.status == s);
    let seller_match = criteria
        .seller_id
        .as_deref()
        .map_or(true, |seller| offer.seller_id == seller);

    // any requested tag may match any offer tag
    let tags_match = criteria.tags.as_ref().map_or(true, |wanted| {
        wanted.iter().any(|want| {
            let want = want.to_lowercase();
            offer.tags.iter().any(|tag| tag.to_lowercase().contains(&want))
        })
    });

    query_match && price_match && category_match && status_match && seller_match && tags_match
}

fn sort_offers(offers: &mut [Offer], sort_by: SortBy) {
    match sort_by {
        SortBy::PriceAsc => offers.sort_by_key(|o| o.price),
        SortBy::PriceDesc => offers.sort_by_key(|o| Reverse(o.price)),
        SortBy::CreatedAsc => offers.sort_by_key(|o| o.created_at),
        SortBy::CreatedDesc => offers.sort_by_key(|o| Reverse(o.created_at)),
        SortBy::TitleAsc => offers.sort_by_cached_key(|o| o.title.to_lowercase()),
        SortBy::TitleDesc => offers.sort_by_cached_key(|o| Reverse(o.title.to_lowercase())),
        SortBy::Popularity => offers.sort_by_key(|o| Reverse(o.view_count)),
    }
}
