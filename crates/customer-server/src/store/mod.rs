//! Customer persistence adapter
//!
//! Wraps the backing store behind [`CustomerStore`] so handlers never see
//! driver types. Every operation either yields the store's result or a
//! [`StoreError`], which serializes as `{"error": "<message>"}`.
//!
//! Two backends are provided:
//!
//! - [`postgres::PgCustomerStore`] for deployments
//! - [`memory::InMemoryCustomerStore`] for local runs and tests

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::config::{Config, StoreBackend};
use crate::db;
use crate::error::ServerResult;
use crate::models::{Customer, CustomerPatch, NewCustomer};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryCustomerStore;
pub use postgres::PgCustomerStore;

/// Store handle shared by all request handlers
pub type SharedStore = Arc<dyn CustomerStore>;

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Uniform failure reported by any store operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{error}")]
pub struct StoreError {
    pub error: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Exact-match filter for listing customers
///
/// Every populated field must match; an empty filter matches all records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl CustomerFilter {
    /// Populated conditions as `(column, value)` pairs
    pub fn conditions(&self) -> Vec<(&'static str, &str)> {
        [
            ("first_name", self.first_name.as_deref()),
            ("last_name", self.last_name.as_deref()),
            ("email", self.email.as_deref()),
            ("phone", self.phone.as_deref()),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.map(|v| (column, v)))
        .collect()
    }

    pub fn matches(&self, customer: &Customer) -> bool {
        self.conditions().into_iter().all(|(column, value)| match column {
            "first_name" => customer.first_name == value,
            "last_name" => customer.last_name == value,
            "email" => customer.email == value,
            "phone" => customer.phone.as_deref() == Some(value),
            _ => false,
        })
    }
}

/// Operations the request handlers need from a document store
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// All customers matching the filter, oldest first
    async fn find(&self, filter: &CustomerFilter) -> StoreResult<Vec<Customer>>;

    /// A single customer, or `None` when the id is unknown
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Customer>>;

    /// Persist a new customer and return it with its assigned id
    async fn insert(&self, customer: NewCustomer) -> StoreResult<Customer>;

    /// Apply a partial update
    ///
    /// Returns `false` when no customer has the given id. The updated record
    /// is not returned; callers re-fetch it.
    async fn find_by_id_and_update(&self, id: Uuid, patch: &CustomerPatch) -> StoreResult<bool>;

    /// Delete a customer, returning `false` when it did not exist
    async fn remove(&self, id: Uuid) -> StoreResult<bool>;

    /// Check that the store is reachable
    async fn ping(&self) -> StoreResult<()>;
}

/// Open the store selected by configuration
///
/// For PostgreSQL this creates the pool and applies pending migrations.
pub async fn connect(config: &Config) -> ServerResult<SharedStore> {
    match config.store {
        StoreBackend::Postgres => {
            let pool = db::create_pool(&config.database).await?;
            db::run_migrations(&pool).await?;
            Ok(Arc::new(PgCustomerStore::new(pool)))
        },
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory customer store; data is lost on shutdown");
            Ok(Arc::new(InMemoryCustomerStore::new()))
        },
    }
}
