use chrono::{DateTime, Duration, Utc};
use offers_shared::{
    Offer, OfferCategory, OfferStatus, ValidationError, ValidationResult, ValidationWarning,
};
use rust_decimal::Decimal;

const TITLE_MIN_CHARS: usize = 5;
const TITLE_MAX_CHARS: usize = 100;
const DESCRIPTION_MIN_CHARS: usize = 20;
const DESCRIPTION_MAX_CHARS: usize = 2000;
const SHORT_DESCRIPTION_CHARS: usize = 50;
const MAX_TAGS: usize = 10;
const TAG_MAX_CHARS: usize = 50;

const ELECTRONICS_TAGS: &[&str] = &["warranty", "brand", "model", "condition"];
const AUTOMOTIVE_TAGS: &[&str] = &["make", "model", "year", "mileage"];
const FASHION_TAGS: &[&str] = &["size", "condition", "brand"];

const DEFAULT_BANNED_WORDS: &[&str] = &["spam", "fake", "scam", "fraud", "cheat"];

/// Rule-based offer validation: field checks, business rules,
/// category-specific rules and advisory warnings.
pub struct OfferValidator {
    banned_words: Vec<String>,
}

impl OfferValidator {
    pub fn new() -> Self {
        Self::with_banned_words(DEFAULT_BANNED_WORDS.iter().map(|w| w.to_string()).collect())
    }

    pub fn with_banned_words(banned_words: Vec<String>) -> Self {
        let banned_words = banned_words.into_iter().map(|w| w.to_lowercase()).collect();
        Self { banned_words }
    }

    pub fn validate(&self, offer: &Offer) -> ValidationResult {
        self.validate_at(offer, Utc::now())
    }

    /// Validate with `now` as the reference instant for all time-based rules
    pub fn validate_at(&self, offer: &Offer, now: DateTime<Utc>) -> ValidationResult {
        let mut errors = Vec::new();

        self.check_basic_fields(offer, &mut errors);
        self.check_business_rules(offer, now, &mut errors);
        self.check_category_rules(offer, &mut errors);

        if offer.status == OfferStatus::Active && offer.is_expired_at(now) {
            errors.push(ValidationError::CannotActivateExpiredOffer);
        }

        ValidationResult::new(errors, self.warnings(offer, now))
    }

    fn check_basic_fields(&self, offer: &Offer, errors: &mut Vec<ValidationError>) {
        let title_len = offer.title.chars().count();
        if offer.title.trim().is_empty() {
            errors.push(ValidationError::TitleEmpty);
        } else if title_len < TITLE_MIN_CHARS {
            errors.push(ValidationError::TitleTooShort);
        } else if title_len > TITLE_MAX_CHARS {
            errors.push(ValidationError::TitleTooLong);
        } else if self.contains_banned_word(&offer.title) {
            errors.push(ValidationError::TitleContainsProfanity);
        }

        let description_len = offer.description.chars().count();
        if offer.description.trim().is_empty() {
            errors.push(ValidationError::DescriptionEmpty);
        } else if description_len < DESCRIPTION_MIN_CHARS {
            errors.push(ValidationError::DescriptionTooShort);
        } else if description_len > DESCRIPTION_MAX_CHARS {
            errors.push(ValidationError::DescriptionTooLong);
        } else if self.contains_banned_word(&offer.description) {
            errors.push(ValidationError::DescriptionContainsProfanity);
        }

        if offer.price <= Decimal::ZERO {
            errors.push(ValidationError::PriceInvalid);
        } else if offer.price > Decimal::new(99_999_999, 2) {
            errors.push(ValidationError::PriceTooHigh);
        } else if offer.price < Decimal::new(1, 2) {
            errors.push(ValidationError::PriceTooLow);
        }

        if offer.seller_id.trim().is_empty() {
            errors.push(ValidationError::SellerIdEmpty);
        }
    }

    fn check_business_rules(&self, offer: &Offer, now: DateTime<Utc>, errors: &mut Vec<ValidationError>) {
        if let Some(expires_at) = offer.expires_at {
            if expires_at < now + Duration::hours(1) {
                errors.push(ValidationError::ExpirationTooSoon);
            }
            if expires_at > now + Duration::days(365) {
                errors.push(ValidationError::ExpirationTooFar);
            }
        }

        match offer.status {
            OfferStatus::Active if offer.expires_at.is_none() => {
                errors.push(ValidationError::ActiveOfferNeedsExpiration);
            }
            OfferStatus::Expired if offer.expires_at.is_some_and(|at| at > now) => {
                errors.push(ValidationError::ExpiredOfferFutureExpiration);
            }
            _ => {}
        }

        if offer.tags.len() > MAX_TAGS {
            errors.push(ValidationError::TooManyTags);
        }
        for tag in &offer.tags {
            if tag.chars().count() > TAG_MAX_CHARS {
                errors.push(ValidationError::TagTooLong);
            }
        }
    }

    fn check_category_rules(&self, offer: &Offer, errors: &mut Vec<ValidationError>) {
        match offer.category {
            OfferCategory::Electronics => {
                if offer.price < Decimal::new(10, 0) {
                    errors.push(ValidationError::ElectronicsPriceSuspicious);
                }
                if !has_any_tag(offer, ELECTRONICS_TAGS) {
                    errors.push(ValidationError::ElectronicsMissingRequiredTags);
                }
            }
            OfferCategory::Automotive => {
                if offer.price < Decimal::new(500, 0) && !offer.tags.contains("parts") {
                    errors.push(ValidationError::AutomotivePriceSuspicious);
                }
                if !has_any_tag(offer, AUTOMOTIVE_TAGS) {
                    errors.push(ValidationError::AutomotiveMissingRequiredTags);
                }
            }
            OfferCategory::Fashion => {
                if !has_any_tag(offer, FASHION_TAGS) {
                    errors.push(ValidationError::FashionMissingRequiredTags);
                }
            }
            OfferCategory::Books => {
                if offer.price > Decimal::new(1000, 0) {
                    errors.push(ValidationError::BooksPriceSuspicious);
                }
            }
            OfferCategory::Home | OfferCategory::Sports | OfferCategory::Other => {}
        }
    }

    fn warnings(&self, offer: &Offer, now: DateTime<Utc>) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        if offer.price > Decimal::new(10_000, 0) {
            warnings.push(ValidationWarning::HighPriceWarning);
        }
        if offer.description.chars().count() < SHORT_DESCRIPTION_CHARS {
            warnings.push(ValidationWarning::ShortDescriptionWarning);
        }
        if offer.tags.is_empty() {
            warnings.push(ValidationWarning::NoTagsWarning);
        }
        if offer.expires_at.is_some_and(|at| at < now + Duration::days(7)) {
            warnings.push(ValidationWarning::ExpiresSoonWarning);
        }

        warnings
    }

    fn contains_banned_word(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.banned_words.iter().any(|word| text.contains(word.as_str()))
    }
}

impl Default for OfferValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn has_any_tag(offer: &Offer, wanted: &[&str]) -> bool {
    offer
        .tags
        .iter()
        .any(|tag| wanted.contains(&tag.to_lowercase().as_str()))
}
