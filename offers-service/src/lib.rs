pub mod validation;
pub mod search;
pub mod service;

pub use validation::OfferValidator;
pub use search::OfferSearchEngine;
pub use service::DefaultOffersService;
