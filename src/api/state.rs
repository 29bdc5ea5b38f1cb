//! Application state - explicitly constructed service context.
//!
//! No module-level globals: the registry is built once at startup and
//! passed into the router, giving it clear process-lifetime scope.

use std::sync::Arc;

use crate::registry::PersonRegistry;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Known person ids (database stand-in)
    pub registry: Arc<PersonRegistry>,
}

impl AppState {
    pub fn new(registry: Arc<PersonRegistry>) -> Self {
        Self { registry }
    }
}
