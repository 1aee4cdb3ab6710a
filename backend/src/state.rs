use std::sync::Arc;

use crate::{
    config::Config,
    services::{CartStore, ProductStore, SessionManager, SubmissionLog},
};

/// Shared application state: one instance per process, cloned cheaply into
/// every handler. Holding the stores behind `Arc` here (instead of module
/// globals) keeps construction explicit and testable.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionManager>,
    pub products: Arc<ProductStore>,
    pub carts: Arc<CartStore>,
    pub submissions: Arc<SubmissionLog>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            sessions: Arc::new(SessionManager::with_demo_directory(&config)),
            products: Arc::new(ProductStore::with_seed_catalog()),
            carts: Arc::new(CartStore::with_seed_carts()),
            submissions: Arc::new(SubmissionLog::default()),
            config,
        }
    }
}
