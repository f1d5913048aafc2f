use crate::config::AppConfig;
use crate::services::BookingStore;

pub struct AppState {
    pub store: BookingStore,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            store: BookingStore::new(),
            config,
        }
    }
}
