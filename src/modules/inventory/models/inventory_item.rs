// Catalog entries the invoice form can pull line items from. An inventory
// item carries the price a product sells at today; the line item created
// from it keeps that price even if the catalog changes later.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};
use crate::modules::invoices::LineItem;

/// A product in the inventory catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Server-assigned item ID
    pub id: i64,

    /// Short lookup code, unique in the catalog
    pub code: String,

    /// Product name
    pub name: String,

    /// Current unit price
    pub price: Decimal,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    /// Build an invoice line item from this catalog entry.
    ///
    /// The invoice form adds catalog products with quantity 1 and lets the
    /// user adjust afterwards.
    pub fn to_line_item(&self, quantity: i32) -> Result<LineItem> {
        LineItem::new(self.name.clone(), self.price, quantity)
    }
}

/// Request payload for creating an inventory item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInventoryRequest {
    pub code: String,
    pub name: String,
    pub price: Decimal,
}

impl CreateInventoryRequest {
    /// Create a validated inventory payload.
    pub fn new(code: impl Into<String>, name: impl Into<String>, price: Decimal) -> Result<Self> {
        let code = code.into();
        let name = name.into();

        if code.trim().is_empty() {
            return Err(AppError::validation("Item code cannot be empty"));
        }

        if name.trim().is_empty() {
            return Err(AppError::validation("Item name cannot be empty"));
        }

        if price < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Item price must be non-negative, got: {}",
                price
            )));
        }

        Ok(Self { code, name, price })
    }
}
