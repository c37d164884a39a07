// Customers module

pub mod models;

pub use models::{CreateCustomerRequest, Customer, DocumentKind};
