// Inventory module

pub mod models;

pub use models::{CreateInventoryRequest, InventoryItem};
