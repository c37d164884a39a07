// A sale is a quick single-item transaction recorded outside the invoicing
// flow, the raw material of the dashboard. Its total is fixed at capture
// time: price × quantity, no tax.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// A recorded sale as returned by the remote API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    /// Server-assigned sale ID
    pub id: i64,

    /// What was sold
    pub item: String,

    pub quantity: i32,

    /// Price per unit
    pub price: Decimal,

    /// price × quantity, fixed at capture time
    pub total: Decimal,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Request payload for recording a sale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSaleRequest {
    pub item: String,
    pub quantity: i32,
    pub price: Decimal,
    pub total: Decimal,
}

impl CreateSaleRequest {
    /// Create a validated sale payload; the total is computed, not taken
    /// from the caller.
    pub fn new(item: impl Into<String>, quantity: i32, price: Decimal) -> Result<Self> {
        let item = item.into();

        if item.trim().is_empty() {
            return Err(AppError::validation("Sale item cannot be empty"));
        }

        if quantity <= 0 {
            return Err(AppError::validation(format!(
                "Sale quantity must be positive, got: {}",
                quantity
            )));
        }

        if price < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Sale price must be non-negative, got: {}",
                price
            )));
        }

        let total = price * Decimal::from(quantity);

        Ok(Self {
            item,
            quantity,
            price,
            total,
        })
    }
}
