//! Test helpers and fixtures
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::features::shared::test_helpers::*;
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let store = memory_store();
//!     let customer = TestCustomer::new("Ada", "Lovelace")
//!         .with_phone("555-0100")
//!         .insert(&store)
//!         .await;
//!     // ... test logic ...
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Customer, CustomerPatch, NewCustomer};
use crate::store::{
    CustomerFilter, CustomerStore, InMemoryCustomerStore, SharedStore, StoreError, StoreResult,
};

/// Message carried by every failure of [`UnreachableStore`]
pub const CONNECTION_REFUSED: &str = "connection refused";

/// Fresh, empty in-memory store behind the shared handle type
pub fn memory_store() -> SharedStore {
    Arc::new(InMemoryCustomerStore::new())
}

/// Builder for creating test customers
#[derive(Debug, Clone)]
pub struct TestCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl TestCustomer {
    /// Create a new test customer builder with an email derived from the names
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: format!(
                "{}.{}@example.com",
                first_name.to_lowercase(),
                last_name.to_lowercase()
            ),
            phone: None,
        }
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = Some(phone.to_string());
        self
    }

    /// Insert into the store, panicking on failure
    pub async fn insert(self, store: &SharedStore) -> Customer {
        store
            .insert(NewCustomer {
                first_name: self.first_name,
                last_name: self.last_name,
                email: self.email,
                phone: self.phone,
            })
            .await
            .expect("Failed to insert test customer")
    }
}

/// Store whose every operation fails
pub struct UnreachableStore;

#[async_trait]
impl CustomerStore for UnreachableStore {
    async fn find(&self, _filter: &CustomerFilter) -> StoreResult<Vec<Customer>> {
        Err(StoreError::new(CONNECTION_REFUSED))
    }

    async fn find_by_id(&self, _id: Uuid) -> StoreResult<Option<Customer>> {
        Err(StoreError::new(CONNECTION_REFUSED))
    }

    async fn insert(&self, _customer: NewCustomer) -> StoreResult<Customer> {
        Err(StoreError::new(CONNECTION_REFUSED))
    }

    async fn find_by_id_and_update(&self, _id: Uuid, _patch: &CustomerPatch) -> StoreResult<bool> {
        Err(StoreError::new(CONNECTION_REFUSED))
    }

    async fn remove(&self, _id: Uuid) -> StoreResult<bool> {
        Err(StoreError::new(CONNECTION_REFUSED))
    }

    async fn ping(&self) -> StoreResult<()> {
        Err(StoreError::new(CONNECTION_REFUSED))
    }
}

/// Store that accepts every update but fails any lookup by id
pub struct FailingLookupStore {
    pub inner: SharedStore,
    pub message: &'static str,
}

#[async_trait]
impl CustomerStore for FailingLookupStore {
    async fn find(&self, filter: &CustomerFilter) -> StoreResult<Vec<Customer>> {
        self.inner.find(filter).await
    }

    async fn find_by_id(&self, _id: Uuid) -> StoreResult<Option<Customer>> {
        Err(StoreError::new(self.message))
    }

    async fn insert(&self, customer: NewCustomer) -> StoreResult<Customer> {
        self.inner.insert(customer).await
    }

    async fn find_by_id_and_update(&self, id: Uuid, patch: &CustomerPatch) -> StoreResult<bool> {
        self.inner.find_by_id_and_update(id, patch).await
    }

    async fn remove(&self, id: Uuid) -> StoreResult<bool> {
        self.inner.remove(id).await
    }

    async fn ping(&self) -> StoreResult<()> {
        self.inner.ping().await
    }
}
