//! In-memory customer store
//!
//! Keeps records in a map guarded by an async `RwLock`, listed in insertion
//! order. Useful for running
//! the server without a database and as the backing store in tests.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{CustomerFilter, CustomerStore, StoreResult};
use crate::models::{Customer, CustomerPatch, NewCustomer};

#[derive(Debug, Default)]
pub struct InMemoryCustomerStore {
    records: RwLock<Records>,
}

/// Customers keyed by id, each tagged with its insertion sequence number
#[derive(Debug, Default)]
struct Records {
    next_seq: u64,
    customers: HashMap<Uuid, (u64, Customer)>,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.customers.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.customers.is_empty()
    }
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn find(&self, filter: &CustomerFilter) -> StoreResult<Vec<Customer>> {
        let records = self.records.read().await;
        let mut matched: Vec<&(u64, Customer)> = records
            .customers
            .values()
            .filter(|(_, c)| filter.matches(c))
            .collect();
        matched.sort_by_key(|(seq, _)| *seq);
        Ok(matched.into_iter().map(|(_, c)| c.clone()).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Customer>> {
        Ok(self.records.read().await.customers.get(&id).map(|(_, c)| c.clone()))
    }

    async fn insert(&self, customer: NewCustomer) -> StoreResult<Customer> {
        let now = Utc::now();
        let record = Customer {
            id: Uuid::new_v4(),
            first_name: customer.first_name,
            last_name: customer.last_name,
            email: customer.email,
            phone: customer.phone,
            created_at: now,
            updated_at: now,
        };

        let mut records = self.records.write().await;
        let seq = records.next_seq;
        records.next_seq += 1;
        records.customers.insert(record.id, (seq, record.clone()));
        Ok(record)
    }

    async fn find_by_id_and_update(&self, id: Uuid, patch: &CustomerPatch) -> StoreResult<bool> {
        let mut records = self.records.write().await;
        match records.customers.get_mut(&id) {
            Some((_, customer)) => {
                patch.apply_to(customer);
                customer.updated_at = Utc::now();
                Ok(true)
            },
            None => Ok(false),
        }
    }

    async fn remove(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.records.write().await.customers.remove(&id).is_some())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_customer(first: &str, email: &str) -> NewCustomer {
        NewCustomer {
            first_name: first.to_string(),
            last_name: "Tester".to_string(),
            email: email.to_string(),
            phone: None,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_timestamps() {
        let store = InMemoryCustomerStore::new();
        let created = store.insert(new_customer("Ada", "ada@example.com")).await.unwrap();

        assert_eq!(created.first_name, "Ada");
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(store.len().await, 1);
        assert_eq!(store.find_by_id(created.id).await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn test_find_applies_filter() {
        let store = InMemoryCustomerStore::new();
        store.insert(new_customer("Ada", "ada@example.com")).await.unwrap();
        store.insert(new_customer("Alan", "alan@example.com")).await.unwrap();

        let all = store.find(&CustomerFilter::default()).await.unwrap();
        assert_eq!(all.len(), 2);

        let filter = CustomerFilter {
            email: Some("alan@example.com".to_string()),
            ..Default::default()
        };
        let found = store.find(&filter).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].first_name, "Alan");
    }

    #[tokio::test]
    async fn test_update_unknown_id_reports_no_match() {
        let store = InMemoryCustomerStore::new();
        let patch = CustomerPatch {
            phone: Some("555-0100".to_string()),
            ..Default::default()
        };
        assert!(!store.find_by_id_and_update(Uuid::new_v4(), &patch).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_then_remove() {
        let store = InMemoryCustomerStore::new();
        let created = store.insert(new_customer("Ada", "ada@example.com")).await.unwrap();

        let patch = CustomerPatch {
            phone: Some("555-0100".to_string()),
            ..Default::default()
        };
        assert!(store.find_by_id_and_update(created.id, &patch).await.unwrap());

        let updated = store.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(updated.phone.as_deref(), Some("555-0100"));
        assert_eq!(updated.email, "ada@example.com");
        assert!(updated.updated_at >= created.updated_at);

        assert!(store.remove(created.id).await.unwrap());
        assert!(!store.remove(created.id).await.unwrap());
        assert!(store.is_empty().await);
    }
}
