use serde::{Deserialize, Serialize};

use crate::models::Customer;
use crate::store::{CustomerFilter, SharedStore, StoreError};

/// Query-string filter for listing customers
///
/// Unknown parameters are ignored. Blank values are treated as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCustomersQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ListCustomersError {
    #[error("Failed to list customers: {0}")]
    Store(#[from] StoreError),
}

impl ListCustomersQuery {
    pub fn into_filter(self) -> CustomerFilter {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.trim().is_empty())
        }

        CustomerFilter {
            first_name: present(self.first_name),
            last_name: present(self.last_name),
            email: present(self.email),
            phone: present(self.phone),
        }
    }
}

#[tracing::instrument(skip(store))]
pub async fn handle(
    store: SharedStore,
    query: ListCustomersQuery,
) -> Result<Vec<Customer>, ListCustomersError> {
    let customers = store.find(&query.into_filter()).await?;

    tracing::debug!(count = customers.len(), "Listed customers");

    Ok(customers)
}
