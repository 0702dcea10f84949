//! Shared application state for all routes.

use crate::store::AccountStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// The only resource shared across requests.
    pub store: Arc<dyn AccountStore>,
}

impl AppState {
    pub fn new(store: impl AccountStore + 'static) -> Self {
        AppState {
            store: Arc::new(store),
        }
    }
}
