use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use url::Url;

/// Offer lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OfferStatus {
    /// Created but not published
    #[default]
    Draft,
    /// Live and available
    Active,
    /// Temporarily disabled
    Suspended,
    /// Expired or deactivated
    Expired,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OfferCategory {
    Electronics,
    Fashion,
    Home,
    Books,
    Sports,
    Automotive,
    Other,
}

/// A single offer listed by a seller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub category: OfferCategory,
    #[serde(default)]
    pub status: OfferStatus,
    pub image_url: Url,
    pub seller_id: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub view_count: u64,
}

impl Offer {
    /// Create a draft offer with no expiry, tags or views
    pub fn new(
        id: i64,
        title: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        category: OfferCategory,
        image_url: Url,
        seller_id: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: title.into(),
            description: description.into(),
            price,
            category,
            status: OfferStatus::Draft,
            image_url,
            seller_id: seller_id.into(),
            created_at: now,
            updated_at: now,
            expires_at: None,
            tags: BTreeSet::new(),
            view_count: 0,
        }
    }

    /// Check if the offer expired before `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map(|at| at < now).unwrap_or(false)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Active status and not yet expired
    pub fn is_active(&self) -> bool {
        self.status == OfferStatus::Active && !self.is_expired()
    }

    pub fn can_be_modified(&self) -> bool {
        matches!(self.status, OfferStatus::Draft | OfferStatus::Suspended)
    }

    pub fn activate(&self) -> Self {
        self.with_status(OfferStatus::Active)
    }

    pub fn suspend(&self) -> Self {
        self.with_status(OfferStatus::Suspended)
    }

    pub fn expire(&self) -> Self {
        self.with_status(OfferStatus::Expired)
    }

    pub fn to_draft(&self) -> Self {
        self.with_status(OfferStatus::Draft)
    }

    /// Copy of this offer moved to `status`, with a refreshed `updated_at`
    pub fn with_status(&self, status: OfferStatus) -> Self {
        Self {
            status,
            updated_at: Utc::now(),
            ..self.clone()
        }
    }
}

/// A page of offers as returned by list endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Offers {
    pub offers: Vec<Offer>,
}

impl Offers {
    pub fn new(offers: Vec<Offer>) -> Self {
        Self { offers }
    }
}

impl From<Vec<Offer>> for Offers {
    fn from(offers: Vec<Offer>) -> Self {
        Self { offers }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::str::FromStr;

    fn sample() -> Offer {
        Offer::new(
            7,
            "Gaming Laptop",
            "High-performance gaming laptop",
            Decimal::from_str("1299.99").unwrap(),
            OfferCategory::Electronics,
            Url::parse("https://example.com/laptop.jpg").unwrap(),
            "seller1",
        )
    }

    #[test]
    fn test_offer_defaults_on_deserialize() {
        let offer: Offer = serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "Gaming Laptop",
            "description": "High-performance gaming laptop",
            "price": "1299.99",
            "category": "ELECTRONICS",
            "imageUrl": "https://example.com/laptop.jpg",
            "sellerId": "seller1"
        }))
        .unwrap();

        assert_eq!(offer.status, OfferStatus::Draft);
        assert!(offer.expires_at.is_none());
        assert!(offer.tags.is_empty());
        assert_eq!(offer.view_count, 0);
        assert_eq!(offer.price, Decimal::from_str("1299.99").unwrap());
    }

    #[test]
    fn test_offer_serializes_camel_case() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["imageUrl"], "https://example.com/laptop.jpg");
        assert_eq!(value["sellerId"], "seller1");
        assert_eq!(value["status"], "DRAFT");
        assert!(value.get("image_url").is_none());
    }

    #[test]
    fn test_expiry_and_activity() {
        let mut offer = sample().activate();
        assert!(offer.is_active());

        offer.expires_at = Some(Utc::now() - Duration::minutes(1));
        assert!(offer.is_expired());
        assert!(!offer.is_active());
    }

    #[test]
    fn test_status_transitions_refresh_updated_at() {
        let mut offer = sample();
        offer.updated_at = Utc::now() - Duration::days(1);
        let before = offer.updated_at;

        let suspended = offer.suspend();
        assert_eq!(suspended.status, OfferStatus::Suspended);
        assert!(suspended.updated_at > before);
        assert!(suspended.can_be_modified());

        let expired = suspended.expire();
        assert_eq!(expired.status, OfferStatus::Expired);
        assert!(!expired.can_be_modified());
        assert_eq!(expired.to_draft().status, OfferStatus::Draft);
    }

    #[test]
    fn test_offers_wraps_sequence() {
        let offers = Offers::from(vec![sample()]);
        let value = serde_json::to_value(&offers).unwrap();
        assert_eq!(value["offers"].as_array().unwrap().len(), 1);

        let empty = serde_json::to_value(Offers::default()).unwrap();
        assert_eq!(empty, serde_json::json!({ "offers": [] }));
    }
}
