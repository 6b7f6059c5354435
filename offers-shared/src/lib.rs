pub mod offer;
pub mod account;
pub mod search;
pub mod validation;

pub use offer::{Offer, OfferCategory, OfferStatus, Offers};
pub use account::AccountStatus;
pub use search::{OfferSearchCriteria, SearchResult, SortBy};
pub use validation::{ValidationError, ValidationResult, ValidationWarning};
