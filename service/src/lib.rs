//! Poultry weighing service
//!
//! Application-side collaborator of the schedule engine in `shared`: keeps
//! batches and weighing events in a key-value store, records measurements,
//! and builds reminders and reports from them.

pub mod config;
pub mod error;
pub mod seed;
pub mod services;
pub mod store;

use std::sync::Arc;

pub use crate::config::Config;
pub use error::{AppError, AppResult};

use services::{BatchService, ReportingService, WeighingService};
use store::SharedStore;

/// Services wired to one store and configuration
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub batches: BatchService,
    pub weighings: WeighingService,
    pub reporting: ReportingService,
}

impl AppState {
    pub fn new(store: SharedStore, config: Config) -> Self {
        let config = Arc::new(config);
        let batches = BatchService::new(store.clone(), config.clone());
        let weighings = WeighingService::new(store, config.clone());
        let reporting = ReportingService::new(batches.clone());
        Self {
            config,
            batches,
            weighings,
            reporting,
        }
    }
}
