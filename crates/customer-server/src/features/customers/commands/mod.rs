pub mod create;
pub mod delete;
pub mod update;

pub use create::{CreateCustomerCommand, CreateCustomerError};
pub use delete::{DeleteCustomerCommand, DeleteCustomerError, DeleteCustomerResponse};
pub use update::{UpdateCustomerCommand, UpdateCustomerError};
