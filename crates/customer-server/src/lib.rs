//! Customer Server Library
//!
//! HTTP server exposing CRUD operations on customer records.
//!
//! # Overview
//!
//! - **API Endpoints**: list, get, create, update and delete under `/api/v1/customers`
//! - **Persistence**: a [`store::CustomerStore`] backed by PostgreSQL (SQLx) or memory
//! - **Configuration**: environment-based configuration management
//! - **Middleware**: CORS and request logging
//!
//! # Architecture
//!
//! Each operation is a vertical slice under `features::customers`:
//!
//! - **Commands** (write operations): create, update, delete
//! - **Queries** (read operations): get, list
//!
//! A handler validates its request, calls the store and returns a typed
//! error; `routes.rs` turns that error into the HTTP response.
//!
//! # Example
//!
//! ```no_run
//! use customer_server::{api, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     api::serve(config).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod features;
pub mod middleware;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use error::{ServerError, ServerResult};
