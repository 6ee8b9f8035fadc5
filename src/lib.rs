pub mod client;
pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::config::Config;
use crate::services::search_service::JobSearchService;

#[derive(Clone)]
pub struct AppState {
    pub search_service: JobSearchService,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            search_service: JobSearchService::from_config(config),
        }
    }
}
