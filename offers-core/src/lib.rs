pub mod pagination;
pub mod repository;
pub mod service;

pub use repository::{AccountStatusClient, OffersRepository};
pub use service::OffersService;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid pagination parameters")]
    InvalidPagination,
    #[error("Account status does not allow publishing offers")]
    IncorrectAccountStatus,
    #[error("{0}")]
    OfferNotFound(String),
    #[error("{0}")]
    UnauthorizedOfferModification(String),
    #[error("{0}")]
    OfferValidation(String),
    #[error("Internal service error: {0}")]
    Internal(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
