pub mod app_config;
pub mod memory_repo;
pub mod account_client;
pub mod seed;

pub use memory_repo::InMemoryOffersRepository;
pub use account_client::StaticAccountStatusClient;
