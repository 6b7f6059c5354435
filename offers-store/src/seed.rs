//! Demo catalogue used to populate an empty store.

use chrono::{Duration, Utc};
use offers_shared::{Offer, OfferCategory, OfferStatus};
use rust_decimal::Decimal;
use url::Url;

struct DemoOffer {
    id: i64,
    title: &'static str,
    description: &'static str,
    price_cents: i64,
    category: OfferCategory,
    status: OfferStatus,
    image: &'static str,
    seller: &'static str,
    age: Duration,
    tags: &'static [&'static str],
}

pub fn demo_offers() -> Vec<Offer> {
    let demo = [
        DemoOffer {
            id: 1,
            title: "Gaming Laptop",
            description: "High-performance gaming laptop with RTX graphics card",
            price_cents: 129_999,
            category: OfferCategory::Electronics,
            status: OfferStatus::Active,
            image: "https://example.com/laptop.jpg",
            seller: "seller1",
            age: Duration::days(5),
            tags: &["gaming", "laptop", "rtx", "warranty"],
        },
        DemoOffer {
            id: 2,
            title: "Designer Jeans",
            description: "Premium denim jeans in excellent condition",
            price_cents: 8_999,
            category: OfferCategory::Fashion,
            status: OfferStatus::Active,
            image: "https://example.com/jeans.jpg",
            seller: "seller2",
            age: Duration::days(3),
            tags: &["jeans", "designer", "size32", "condition-excellent"],
        },
        DemoOffer {
            id: 3,
            title: "Cookbook Collection",
            description: "Set of 5 professional cooking books",
            price_cents: 4_550,
            category: OfferCategory::Books,
            status: OfferStatus::Active,
            image: "https://example.com/books.jpg",
            seller: "seller3",
            age: Duration::days(1),
            tags: &["cookbook", "cooking", "professional", "collection"],
        },
        DemoOffer {
            id: 4,
            title: "Bicycle - Draft",
            description: "Mountain bike, needs final photos",
            price_cents: 25_000,
            category: OfferCategory::Sports,
            status: OfferStatus::Draft,
            image: "https://example.com/bike.jpg",
            seller: "seller4",
            age: Duration::hours(2),
            tags: &["bicycle", "mountain", "sports"],
        },
    ];

    let now = Utc::now();
    demo.into_iter()
        .filter_map(|d| {
            let image_url = Url::parse(d.image).ok()?;
            let mut offer = Offer::new(
                d.id,
                d.title,
                d.description,
                Decimal::new(d.price_cents, 2),
                d.category,
                image_url,
                d.seller,
            );
            offer.status = d.status;
            offer.created_at = now - d.age;
            offer.tags = d.tags.iter().map(|t| t.to_string()).collect();
            Some(offer)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalogue_shape() {
        let offers = demo_offers();
        assert_eq!(offers.iter().map(|o| o.id).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(offers.iter().filter(|o| o.status == OfferStatus::Active).count(), 3);
        assert_eq!(offers[0].price, Decimal::new(129_999, 2));
        assert!(offers[0].tags.contains("warranty"));
    }
}
