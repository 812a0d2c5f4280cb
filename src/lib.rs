pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;
use std::time::Instant;

use config::Config;
use repositories::{AssetRepo, Index};
use services::{SearchCache, SearchService};

#[derive(Clone)]
pub struct AppState {
    pub search_service: SearchService,
    pub assets: AssetRepo,
    pub config: Config,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(index: Index, config: Config) -> Self {
        let search_service = SearchService::new(
            Arc::new(index),
            Arc::from(config.search.scoring.method()),
            SearchCache::new(&config.cache),
        );

        Self {
            search_service,
            assets: AssetRepo::new(config.server.web_root.clone()),
            config,
            start_time: Instant::now(),
        }
    }
}
