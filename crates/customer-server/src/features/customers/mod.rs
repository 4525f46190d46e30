pub mod commands;
pub mod queries;
pub mod routes;

pub use commands::{
    CreateCustomerCommand, CreateCustomerError, DeleteCustomerCommand, DeleteCustomerError,
    DeleteCustomerResponse, UpdateCustomerCommand, UpdateCustomerError,
};

pub use queries::{GetCustomerError, GetCustomerQuery, ListCustomersError, ListCustomersQuery};

pub use routes::customers_routes;
