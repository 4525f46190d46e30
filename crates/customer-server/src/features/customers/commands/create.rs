//! Create customer command
//!
//! - Command: the raw request body as a JSON object, so that missing values
//!   and values of the wrong type surface as field errors rather than
//!   deserialization errors
//! - Handler: standalone async function that validates and persists

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::features::shared::validation::{FieldError, Validator};
use crate::models::{Customer, NewCustomer};
use crate::store::{SharedStore, StoreError};

/// Command to create a new customer
///
/// # Examples
///
/// ```rust,ignore
/// use customer_server::features::customers::commands::CreateCustomerCommand;
///
/// let body = serde_json::json!({
///     "firstName": "Ada",
///     "lastName": "Lovelace",
///     "email": "ada@example.com",
/// });
/// let command: CreateCustomerCommand = serde_json::from_value(body)?;
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCustomerCommand {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Errors that can occur when creating a customer
#[derive(Debug, thiserror::Error)]
pub enum CreateCustomerError {
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Failed to save customer: {0}")]
    Store(#[from] StoreError),
}

impl CreateCustomerCommand {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Validates the body and builds the record to insert
    ///
    /// # Errors
    ///
    /// Returns every failed rule, in order:
    /// - `firstName`, `lastName` and `email` must be present and non-blank
    /// - `email` must be a well-formed address
    /// - a field holding something other than a string or null is reported
    ///   once, with the email format message for `email`
    pub fn validate(&self) -> Result<NewCustomer, CreateCustomerError> {
        let mut v = Validator::new();
        for (field, required) in [
            ("firstName", "First name is required"),
            ("lastName", "Last name is required"),
        ] {
            if self.is_mistyped(field) {
                v.fail(field, &format!("{} must be a string", field));
            } else {
                v.not_empty(field, self.text(field), required);
            }
        }

        if self.is_mistyped("email") {
            v.fail("email", "Email must be proper format");
        } else {
            v.not_empty("email", self.text("email"), "Email is required")
                .is_email("email", self.text("email"), "Email must be proper format");
        }

        if self.is_mistyped("phone") {
            v.fail("phone", "phone must be a string");
        }

        v.finish().map_err(CreateCustomerError::Validation)?;

        Ok(NewCustomer {
            first_name: self.text("firstName").unwrap_or_default().to_string(),
            last_name: self.text("lastName").unwrap_or_default().to_string(),
            email: self.text("email").unwrap_or_default().to_string(),
            phone: self
                .text("phone")
                .filter(|p| !p.trim().is_empty())
                .map(str::to_string),
        })
    }

    fn text(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    fn is_mistyped(&self, field: &str) -> bool {
        self.fields
            .get(field)
            .is_some_and(|value| !matches!(value, Value::String(_) | Value::Null))
    }
}

/// Handler function for creating customers
///
/// # Errors
///
/// - `Validation` if any field rule fails; nothing is written
/// - `Store` if the store rejects the insert
#[tracing::instrument(skip(store, command))]
pub async fn handle(
    store: SharedStore,
    command: CreateCustomerCommand,
) -> Result<Customer, CreateCustomerError> {
    let new_customer = command.validate()?;

    let customer = store.insert(new_customer).await?;

    tracing::info!(customer_id = %customer.id, "Customer created successfully");

    Ok(customer)
}
