use std::sync::Arc;

use crate::dashboards::callbacks::{default_registry, CallbackRegistry};
use crate::shared::data::SalesDataset;

/// Shared, read-only state of every request handler
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<SalesDataset>,
    pub callbacks: Arc<CallbackRegistry>,
}

impl AppState {
    pub fn new(dataset: SalesDataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
            callbacks: Arc::new(default_registry()),
        }
    }
}
