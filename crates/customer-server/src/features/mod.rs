//! Feature modules implementing the customer API
//!
//! Each feature is a vertical slice with its own commands, queries and
//! routes:
//!
//! - `commands/` - Write operations (create, update, delete)
//! - `queries/` - Read operations (get, list)
//! - `routes.rs` - HTTP route definitions and error-to-response mapping
//!
//! Handlers are plain `async fn handle(store, request)` functions, so they
//! can be tested directly against an in-memory store without HTTP.

pub mod customers;
pub mod shared;

use axum::Router;

use crate::store::SharedStore;

/// Shared state for all feature routes
#[derive(Clone)]
pub struct FeatureState {
    /// Customer store used by every handler
    pub store: SharedStore,
}

/// Creates the API router with all feature routes mounted
///
/// - `/customers` - Customer management
pub fn router(state: FeatureState) -> Router<()> {
    Router::new().nest("/customers", customers::customers_routes().with_state(state.store))
}
