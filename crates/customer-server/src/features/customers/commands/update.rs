//! Update customer command
//!
//! Partially updates an existing customer. The body is kept as raw JSON so
//! that keys outside the allow-list can be dropped and values of the wrong
//! type reported per field instead of failing deserialization as a whole.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::features::shared::validation::{
    parse_customer_id, FieldError, InvalidCustomerId, Validator,
};
use crate::models::{Customer, CustomerPatch, UPDATABLE_FIELDS};
use crate::store::{SharedStore, StoreError};

/// Command to update an existing customer
///
/// # Examples
///
/// ```rust,ignore
/// use customer_server::features::customers::commands::UpdateCustomerCommand;
///
/// let body = serde_json::json!({ "lastName": "Byron", "foo": "ignored" });
/// let mut command: UpdateCustomerCommand = serde_json::from_value(body)?;
/// command.id = "0b9e4a6e-3a52-4d0c-9f53-2f5b1a9a8c11".to_string();
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCustomerCommand {
    /// Raw identifier from the request path
    #[serde(skip)]
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Errors that can occur when updating a customer
#[derive(Debug, thiserror::Error)]
pub enum UpdateCustomerError {
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error(
        "No valid parameters were provided to update. Valid parameters are: {}",
        UPDATABLE_FIELDS.join(", ")
    )]
    NoValidParameters,

    #[error(transparent)]
    InvalidId(#[from] InvalidCustomerId),

    #[error("Record could not be found with provided id")]
    NotFound,

    #[error("Failed to update customer: {0}")]
    Store(#[from] StoreError),
}

impl UpdateCustomerCommand {
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Validates the body and builds the patch from allow-listed fields
    ///
    /// # Errors
    ///
    /// - `Validation` - `email` is present but not a well-formed address, or
    ///   an allow-listed field holds something other than a string or null
    /// - `NoValidParameters` - no allow-listed field carries a non-blank value
    pub fn validate(&self) -> Result<CustomerPatch, UpdateCustomerError> {
        let mut v = Validator::new();
        for field in UPDATABLE_FIELDS {
            match (field, self.fields.get(field)) {
                (_, None) => {},
                ("email", Some(Value::String(email))) => {
                    v.optional_email("email", Some(email.as_str()), "Email must be proper format");
                },
                ("email", Some(_)) => {
                    v.fail("email", "Email must be proper format");
                },
                (_, Some(Value::String(_) | Value::Null)) => {},
                (_, Some(_)) => {
                    v.fail(field, &format!("{} must be a string", field));
                },
            }
        }
        v.finish().map_err(UpdateCustomerError::Validation)?;

        let mut patch = CustomerPatch::default();
        for field in UPDATABLE_FIELDS {
            if let Some(Value::String(value)) = self.fields.get(field) {
                if !value.trim().is_empty() {
                    patch.set(field, value.clone());
                }
            }
        }

        if patch.is_empty() {
            return Err(UpdateCustomerError::NoValidParameters);
        }

        Ok(patch)
    }
}

/// Handler function for updating customers
///
/// Applies the patch, then re-reads the record so the response reflects the
/// stored state. The two store calls are not atomic; a concurrent write
/// between them is visible in the returned record.
///
/// # Errors
///
/// Checked in order: body validation, allow-list, identifier, store.
#[tracing::instrument(skip(store, command), fields(customer_id = %command.id))]
pub async fn handle(
    store: SharedStore,
    command: UpdateCustomerCommand,
) -> Result<Customer, UpdateCustomerError> {
    let patch = command.validate()?;
    let id = parse_customer_id(&command.id)?;

    if !store.find_by_id_and_update(id, &patch).await? {
        return Err(UpdateCustomerError::NotFound);
    }

    let customer = store
        .find_by_id(id)
        .await?
        .ok_or(UpdateCustomerError::NotFound)?;

    tracing::info!(customer_id = %customer.id, "Customer updated successfully");

    Ok(customer)
}
