use std::sync::Arc;
use offers_core::OffersService;

#[derive(Clone)]
pub struct AppState {
    pub offers: Arc<dyn OffersService>,
}

impl AppState {
    pub fn new(offers: Arc<dyn OffersService>) -> Self {
        Self { offers }
    }
}
