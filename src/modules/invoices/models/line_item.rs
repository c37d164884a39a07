// A line item is a single product or service on an invoice. The struct is
// also the wire shape the remote API expects (`{name, price, quantity}`),
// so the field names below are renamed accordingly on serialization.
//
// Items inside a draft are allowed to be momentarily invalid while the user
// edits them; `validate` reports the first fault and the draft validator
// surfaces it with the item's position.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};
use crate::modules::invoices::services::LineItemFault;

/// A single product or service line on an invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Description of the product or service
    pub name: String,

    /// Price per unit
    #[serde(rename = "price")]
    pub unit_price: Decimal,

    /// Quantity of units
    pub quantity: i32,
}

impl LineItem {
    /// Create a validated line item.
    ///
    /// # Arguments
    /// * `name` - Product/service description, must not be blank
    /// * `unit_price` - Must be non-negative
    /// * `quantity` - Must be positive
    pub fn new(name: impl Into<String>, unit_price: Decimal, quantity: i32) -> Result<Self> {
        let item = Self {
            name: name.into(),
            unit_price,
            quantity,
        };

        item.validate()
            .map_err(|fault| AppError::validation(fault.to_string()))?;

        Ok(item)
    }

    /// An empty row as the invoice form creates it, to be filled in by the
    /// user. Not valid for submission until edited.
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            unit_price: Decimal::ZERO,
            quantity: 1,
        }
    }

    /// Check this item against the submission rules.
    pub fn validate(&self) -> std::result::Result<(), LineItemFault> {
        if self.name.trim().is_empty() {
            return Err(LineItemFault::BlankName);
        }

        if self.unit_price < Decimal::ZERO {
            return Err(LineItemFault::NegativePrice);
        }

        if self.quantity <= 0 {
            return Err(LineItemFault::NonPositiveQuantity);
        }

        Ok(())
    }

    /// Line subtotal: unit_price × quantity, unrounded.
    pub fn subtotal(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}
