use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::offer::{Offer, OfferCategory, OfferStatus};

pub const DEFAULT_PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortBy {
    PriceAsc,
    PriceDesc,
    CreatedAsc,
    #[default]
    CreatedDesc,
    TitleAsc,
    TitleDesc,
    /// Most viewed first
    Popularity,
}

/// Filters, ordering and paging for an offer search. Unset filters match everything.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct OfferSearchCriteria {
    pub query: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub category: Option<OfferCategory>,
    pub status: Option<OfferStatus>,
    pub seller_id: Option<String>,
    pub tags: Option<BTreeSet<String>>,
    pub sort_by: SortBy,
    pub limit: usize,
    pub offset: usize,
}

impl Default for OfferSearchCriteria {
    fn default() -> Self {
        Self {
            query: None,
            min_price: None,
            max_price: None,
            category: None,
            status: None,
            seller_id: None,
            tags: None,
            sort_by: SortBy::default(),
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}

impl OfferSearchCriteria {
    pub fn page(limit: usize, offset: usize) -> Self {
        Self {
            limit,
            offset,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub offers: Vec<Offer>,
    /// Matches before paging
    pub total_count: u64,
    pub has_next: bool,
    pub has_previous: bool,
}
