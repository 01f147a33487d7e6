//! Implements a struct that holds the state of the REST server.

use axum::extract::FromRef;

use crate::{CatalogService, CatalogStore};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The service that every route uses to read and change the catalog.
    pub catalog: CatalogService,
}

impl AppState {
    /// Create a new [AppState] that serves the catalog held in `store`.
    pub fn new(store: CatalogStore) -> Self {
        Self {
            catalog: CatalogService::new(store),
        }
    }
}

impl FromRef<AppState> for CatalogService {
    fn from_ref(state: &AppState) -> Self {
        state.catalog.clone()
    }
}
