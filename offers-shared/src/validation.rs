use serde::{Deserialize, Serialize};

/// Rule violations that block an offer from being stored
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationError {
    TitleEmpty,
    TitleTooShort,
    TitleTooLong,
    TitleContainsProfanity,

    DescriptionEmpty,
    DescriptionTooShort,
    DescriptionTooLong,
    DescriptionContainsProfanity,

    PriceInvalid,
    PriceTooHigh,
    PriceTooLow,

    SellerIdEmpty,

    ExpirationTooSoon,
    ExpirationTooFar,
    ActiveOfferNeedsExpiration,
    ExpiredOfferFutureExpiration,
    CannotActivateExpiredOffer,

    TooManyTags,
    TagTooLong,

    ElectronicsPriceSuspicious,
    ElectronicsMissingRequiredTags,
    AutomotivePriceSuspicious,
    AutomotiveMissingRequiredTags,
    FashionMissingRequiredTags,
    BooksPriceSuspicious,
}

impl ValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::TitleEmpty => "Title cannot be empty",
            ValidationError::TitleTooShort => "Title must be at least 5 characters long",
            ValidationError::TitleTooLong => "Title cannot exceed 100 characters",
            ValidationError::TitleContainsProfanity => "Title contains inappropriate content",
            ValidationError::DescriptionEmpty => "Description cannot be empty",
            ValidationError::DescriptionTooShort => "Description must be at least 20 characters long",
            ValidationError::DescriptionTooLong => "Description cannot exceed 2000 characters",
            ValidationError::DescriptionContainsProfanity => "Description contains inappropriate content",
            ValidationError::PriceInvalid => "Price must be greater than zero",
            ValidationError::PriceTooHigh => "Price cannot exceed 999,999.99",
            ValidationError::PriceTooLow => "Price must be at least 0.01",
            ValidationError::SellerIdEmpty => "Seller ID cannot be empty",
            ValidationError::ExpirationTooSoon => "Expiration date must be at least 1 hour in the future",
            ValidationError::ExpirationTooFar => "Expiration date cannot be more than 1 year in the future",
            ValidationError::ActiveOfferNeedsExpiration => "Active offers must have an expiration date",
            ValidationError::ExpiredOfferFutureExpiration => "Expired offers cannot have future expiration dates",
            ValidationError::CannotActivateExpiredOffer => "Cannot activate an expired offer",
            ValidationError::TooManyTags => "Cannot have more than 10 tags",
            ValidationError::TagTooLong => "Tags cannot exceed 50 characters",
            ValidationError::ElectronicsPriceSuspicious => "Electronics items under $10 require manual review",
            ValidationError::ElectronicsMissingRequiredTags => {
                "Electronics offers should include warranty, brand, model, or condition tags"
            }
            ValidationError::AutomotivePriceSuspicious => "Automotive items under $500 should be marked as parts",
            ValidationError::AutomotiveMissingRequiredTags => {
                "Automotive offers should include make, model, year, or mileage tags"
            }
            ValidationError::FashionMissingRequiredTags => "Fashion offers should include size, condition, or brand tags",
            ValidationError::BooksPriceSuspicious => "Books over $1000 require manual review",
        }
    }
}

/// Advisory findings; never block an offer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationWarning {
    HighPriceWarning,
    ShortDescriptionWarning,
    NoTagsWarning,
    ExpiresSoonWarning,
}

impl ValidationWarning {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationWarning::HighPriceWarning => {
                "This is a high-priced item that may require additional verification"
            }
            ValidationWarning::ShortDescriptionWarning => {
                "Consider adding more details to improve buyer confidence"
            }
            ValidationWarning::NoTagsWarning => "Adding relevant tags will help buyers find your offer",
            ValidationWarning::ExpiresSoonWarning => "This offer expires within 7 days",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    #[serde(default)]
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn new(errors: Vec<ValidationError>, warnings: Vec<ValidationWarning>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// Result carrying no findings but marked invalid, used when the request is refused outright
    pub fn rejected() -> Self {
        Self {
            is_valid: false,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn error_messages(&self) -> Vec<&'static str> {
        self.errors.iter().map(|e| e.message()).collect()
    }

    pub fn warning_messages(&self) -> Vec<&'static str> {
        self.warnings.iter().map(|w| w.message()).collect()
    }
}
