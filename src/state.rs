use crate::catalog::Catalog;
use crate::config::AppConfig;
use std::time::Duration;

/// What every request handler gets to see. Built once in `main`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub search_delay: Duration,
}

impl AppState {
    pub fn new(catalog: Catalog, config: &AppConfig) -> Self {
        Self {
            catalog,
            search_delay: config.search_delay,
        }
    }
}
