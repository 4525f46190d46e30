use serde::{Deserialize, Serialize};

use crate::features::shared::validation::{parse_customer_id, InvalidCustomerId};
use crate::models::Customer;
use crate::store::{SharedStore, StoreError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetCustomerQuery {
    pub id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GetCustomerError {
    #[error(transparent)]
    InvalidId(#[from] InvalidCustomerId),
    #[error("Record could not be found with provided id")]
    NotFound,
    #[error("Failed to load customer: {0}")]
    Store(#[from] StoreError),
}

#[tracing::instrument(skip(store))]
pub async fn handle(store: SharedStore, query: GetCustomerQuery) -> Result<Customer, GetCustomerError> {
    let id = parse_customer_id(&query.id)?;

    store.find_by_id(id).await?.ok_or(GetCustomerError::NotFound)
}
