//! Customer API routes
//!
//! Wires the customer commands and queries to Axum HTTP handlers.
//!
//! # Route Structure
//!
//! - `GET /api/v1/customers` - List customers, optionally filtered by exact field values
//! - `POST /api/v1/customers` - Create a customer
//! - `GET /api/v1/customers/:id` - Get a single customer
//! - `PUT /api/v1/customers/:id` - Partially update a customer
//! - `DELETE /api/v1/customers/:id` - Delete a customer
//!
//! Every failure answers `400 Bad Request`; the body tells the cases apart.
//!
//! # Examples
//!
//! ```rust,ignore
//! use axum::Router;
//! use customer_server::features::customers::routes::customers_routes;
//!
//! let app = Router::new()
//!     .nest("/api/v1/customers", customers_routes())
//!     .with_state(store);
//! ```

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::api::response::{send_json, ErrorBody};
use crate::store::SharedStore;

use super::{
    commands::{
        CreateCustomerCommand, CreateCustomerError, DeleteCustomerCommand, DeleteCustomerError,
        UpdateCustomerCommand, UpdateCustomerError,
    },
    queries::{GetCustomerError, GetCustomerQuery, ListCustomersError, ListCustomersQuery},
};

// ============================================================================
// Router Configuration
// ============================================================================

/// Creates the customers router with all routes configured
pub fn customers_routes() -> Router<SharedStore> {
    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route(
            "/:id",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
}

// ============================================================================
// Command Handlers (Write Operations)
// ============================================================================

/// Create a new customer
///
/// # Endpoint
///
/// `POST /api/v1/customers`
///
/// # Request Body
///
/// ```json
/// {
///   "firstName": "Ada",
///   "lastName": "Lovelace",
///   "email": "ada@example.com",
///   "phone": "555-0100"
/// }
/// ```
///
/// # Response
///
/// - `201 Created` - The stored customer
/// - `400 Bad Request` - Validation, body or store failure
#[tracing::instrument(skip(store, body))]
async fn create_customer(
    State(store): State<SharedStore>,
    body: Result<Json<CreateCustomerCommand>, JsonRejection>,
) -> Result<Response, CustomerApiError> {
    let Json(command) = body?;

    let customer = super::commands::create::handle(store, command).await?;

    Ok(send_json(StatusCode::CREATED, Some(customer)))
}

/// Partially update a customer
///
/// # Endpoint
///
/// `PUT /api/v1/customers/:id`
///
/// # Request Body
///
/// Any subset of `firstName`, `lastName`, `email`, `phone`. Other keys are
/// ignored.
///
/// # Response
///
/// - `203 Non-Authoritative Information` - The customer as stored after the update
/// - `400 Bad Request` - Validation failure, no updatable field, unknown id or store failure
#[tracing::instrument(skip(store, body))]
async fn update_customer(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    body: Result<Json<UpdateCustomerCommand>, JsonRejection>,
) -> Result<Response, CustomerApiError> {
    let Json(mut command) = body?;
    command.id = id;

    let customer = super::commands::update::handle(store, command).await?;

    Ok(send_json(StatusCode::NON_AUTHORITATIVE_INFORMATION, Some(customer)))
}

/// Delete a customer
///
/// # Endpoint
///
/// `DELETE /api/v1/customers/:id`
///
/// # Response
///
/// - `204 No Content` - Deleted
/// - `400 Bad Request` - Unknown id or store failure
#[tracing::instrument(skip(store))]
async fn delete_customer(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Response, CustomerApiError> {
    let response = super::commands::delete::handle(store, DeleteCustomerCommand { id }).await?;

    Ok(send_json(StatusCode::NO_CONTENT, Some(response)))
}

// ============================================================================
// Query Handlers (Read Operations)
// ============================================================================

/// Get a single customer
///
/// # Endpoint
///
/// `GET /api/v1/customers/:id`
#[tracing::instrument(skip(store))]
async fn get_customer(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Response, CustomerApiError> {
    let customer = super::queries::get::handle(store, GetCustomerQuery { id }).await?;

    tracing::debug!(customer_id = %customer.id, "Customer retrieved via API");

    Ok(send_json(StatusCode::OK, Some(customer)))
}

/// List customers
///
/// # Endpoint
///
/// `GET /api/v1/customers?lastName=Lovelace`
///
/// # Query Parameters
///
/// - `firstName`, `lastName`, `email`, `phone` - exact-match filters
#[tracing::instrument(skip(store, query))]
async fn list_customers(
    State(store): State<SharedStore>,
    query: Result<Query<ListCustomersQuery>, QueryRejection>,
) -> Result<Response, CustomerApiError> {
    let Query(query) = query?;

    let customers = super::queries::list::handle(store, query).await?;

    Ok(send_json(StatusCode::OK, Some(customers)))
}

// ============================================================================
// Error Handling
// ============================================================================

/// Unified error type for customer API endpoints
#[derive(Debug)]
enum CustomerApiError {
    /// The request body or query string could not be read
    Request(String),
    CreateError(CreateCustomerError),
    UpdateError(UpdateCustomerError),
    DeleteError(DeleteCustomerError),
    GetError(GetCustomerError),
    ListError(ListCustomersError),
}

impl From<JsonRejection> for CustomerApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Request(rejection.body_text())
    }
}

impl From<QueryRejection> for CustomerApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Request(rejection.body_text())
    }
}

impl From<CreateCustomerError> for CustomerApiError {
    fn from(err: CreateCustomerError) -> Self {
        Self::CreateError(err)
    }
}

impl From<UpdateCustomerError> for CustomerApiError {
    fn from(err: UpdateCustomerError) -> Self {
        Self::UpdateError(err)
    }
}

impl From<DeleteCustomerError> for CustomerApiError {
    fn from(err: DeleteCustomerError) -> Self {
        Self::DeleteError(err)
    }
}

impl From<GetCustomerError> for CustomerApiError {
    fn from(err: GetCustomerError) -> Self {
        Self::GetError(err)
    }
}

impl From<ListCustomersError> for CustomerApiError {
    fn from(err: ListCustomersError) -> Self {
        Self::ListError(err)
    }
}

impl CustomerApiError {
    fn body(self) -> ErrorBody {
        match self {
            // Field rule failures
            CustomerApiError::CreateError(CreateCustomerError::Validation(errors))
            | CustomerApiError::UpdateError(UpdateCustomerError::Validation(errors)) => {
                ErrorBody::fields(errors)
            },

            // Store failures
            CustomerApiError::CreateError(CreateCustomerError::Store(err))
            | CustomerApiError::UpdateError(UpdateCustomerError::Store(err))
            | CustomerApiError::DeleteError(DeleteCustomerError::Store(err))
            | CustomerApiError::GetError(GetCustomerError::Store(err))
            | CustomerApiError::ListError(ListCustomersError::Store(err)) => {
                tracing::error!(error = %err, "Store operation failed");
                ErrorBody::failure(err.error)
            },

            // Malformed request or identifier
            CustomerApiError::Request(message) => ErrorBody::failure(message),
            CustomerApiError::UpdateError(UpdateCustomerError::InvalidId(err))
            | CustomerApiError::DeleteError(DeleteCustomerError::InvalidId(err))
            | CustomerApiError::GetError(GetCustomerError::InvalidId(err)) => {
                ErrorBody::failure(err.to_string())
            },

            // Not found and empty update
            err @ (CustomerApiError::UpdateError(UpdateCustomerError::NoValidParameters)
            | CustomerApiError::UpdateError(UpdateCustomerError::NotFound)
            | CustomerApiError::DeleteError(DeleteCustomerError::NotFound)
            | CustomerApiError::GetError(GetCustomerError::NotFound)) => {
                ErrorBody::message(err.to_string())
            },
        }
    }
}

impl IntoResponse for CustomerApiError {
    fn into_response(self) -> Response {
        if !self.is_store_failure() {
            tracing::warn!(error = %self, "Customer request rejected");
        }
        send_json(StatusCode::BAD_REQUEST, Some(self.body()))
    }
}

impl CustomerApiError {
    fn is_store_failure(&self) -> bool {
        matches!(
            self,
            CustomerApiError::CreateError(CreateCustomerError::Store(_))
                | CustomerApiError::UpdateError(UpdateCustomerError::Store(_))
                | CustomerApiError::DeleteError(DeleteCustomerError::Store(_))
                | CustomerApiError::GetError(GetCustomerError::Store(_))
                | CustomerApiError::ListError(ListCustomersError::Store(_))
        )
    }
}

impl std::fmt::Display for CustomerApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Request(message) => write!(f, "{}", message),
            Self::CreateError(e) => write!(f, "{}", e),
            Self::UpdateError(e) => write!(f, "{}", e),
            Self::DeleteError(e) => write!(f, "{}", e),
            Self::GetError(e) => write!(f, "{}", e),
            Self::ListError(e) => write!(f, "{}", e),
        }
    }
}
