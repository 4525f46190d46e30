//! Database models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Names of the fields a client may change on an existing customer
pub const UPDATABLE_FIELDS: [&str; 4] = ["firstName", "lastName", "email", "phone"];

/// Customer record as stored and as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for inserting a customer
///
/// The store assigns the identifier and timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// Partial update restricted to [`UPDATABLE_FIELDS`]
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl CustomerPatch {
    /// Set the field named by its API (camelCase) name
    ///
    /// Returns `false` when the name is not in [`UPDATABLE_FIELDS`].
    pub fn set(&mut self, field: &str, value: String) -> bool {
        let slot = match field {
            "firstName" => &mut self.first_name,
            "lastName" => &mut self.last_name,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            _ => return false,
        };
        *slot = Some(value);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
    }

    /// Apply the patch to a record in place
    pub fn apply_to(&self, customer: &mut Customer) {
        if let Some(ref first_name) = self.first_name {
            customer.first_name.clone_from(first_name);
        }
        if let Some(ref last_name) = self.last_name {
            customer.last_name.clone_from(last_name);
        }
        if let Some(ref email) = self.email {
            customer.email.clone_from(email);
        }
        if let Some(ref phone) = self.phone {
            customer.phone = Some(phone.clone());
        }
    }
}
