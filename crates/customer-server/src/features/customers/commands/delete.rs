use serde::{Deserialize, Serialize};

use crate::features::shared::validation::{parse_customer_id, InvalidCustomerId};
use crate::store::{SharedStore, StoreError};

pub const DELETED_MESSAGE: &str = "Deleted successfully";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteCustomerCommand {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteCustomerResponse {
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteCustomerError {
    #[error(transparent)]
    InvalidId(#[from] InvalidCustomerId),
    #[error("Record could not be found with provided id")]
    NotFound,
    #[error("Failed to delete customer: {0}")]
    Store(#[from] StoreError),
}

#[tracing::instrument(skip(store))]
pub async fn handle(
    store: SharedStore,
    command: DeleteCustomerCommand,
) -> Result<DeleteCustomerResponse, DeleteCustomerError> {
    let id = parse_customer_id(&command.id)?;

    if store.find_by_id(id).await?.is_none() {
        return Err(DeleteCustomerError::NotFound);
    }

    // Removed by a concurrent request since the lookup
    if !store.remove(id).await? {
        return Err(DeleteCustomerError::NotFound);
    }

    tracing::info!(customer_id = %id, "Customer deleted");

    Ok(DeleteCustomerResponse {
        message: DELETED_MESSAGE.to_string(),
    })
}
