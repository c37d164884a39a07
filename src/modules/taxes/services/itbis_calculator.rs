use rust_decimal::Decimal;

use crate::core::{AppError, Result};
use crate::modules::invoices::models::InvoiceType;

/// ItbisCalculator handles ITBIS (Dominican value-added tax) amounts.
///
/// The rate is the statutory 18% and is the only tax configuration in the
/// system; it is not adjustable per item or per invoice.
pub struct ItbisCalculator;

impl ItbisCalculator {
    /// The ITBIS rate as a decimal fraction (0.18).
    pub fn rate() -> Decimal {
        Decimal::new(18, 2)
    }

    /// Whether ITBIS is charged on this document type.
    ///
    /// Basic receipts are issued tax-free; every other type is taxed.
    pub fn applies_to(invoice_type: InvoiceType) -> bool {
        !invoice_type.is_tax_exempt()
    }

    /// Calculate the ITBIS amount on a subtotal.
    ///
    /// The result is unrounded; rounding happens at display time. Negative
    /// subtotals are rejected.
    pub fn calculate(subtotal: Decimal) -> Result<Decimal> {
        if subtotal < Decimal::ZERO {
            return Err(AppError::validation("Subtotal cannot be negative"));
        }

        Ok(subtotal * Self::rate())
    }
}
