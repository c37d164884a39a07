//! Facturador Invoicing Domain Library
//!
//! This library provides the business rules for a small-business invoicing
//! and inventory system under Dominican fiscal rules: fiscal document types,
//! ITBIS computation, draft validation, and sales reporting. It performs no
//! I/O; the surrounding application submits the payloads this crate builds
//! to a remote API and renders the values it computes.

pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::company;
pub use modules::customers;
pub use modules::inventory;
pub use modules::invoices;
pub use modules::sales;
pub use modules::taxes;
