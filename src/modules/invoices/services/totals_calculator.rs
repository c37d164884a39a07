// The single authoritative implementation of invoice arithmetic. The form's
// live summary, the submission preview, and the printed document layouts
// all derive their figures here; none of them carry their own copy of the
// subtotal/ITBIS/total rules.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::Currency;
use crate::modules::invoices::models::{InvoiceType, LineItem};
use crate::modules::taxes::ItbisCalculator;

/// Monetary totals derived from an invoice's type and items.
///
/// Always recomputed from its inputs, never stored on its own. Values are
/// unrounded; call [`InvoiceTotals::rounded`] when presenting or persisting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InvoiceTotals {
    /// Sum of line subtotals
    pub subtotal: Decimal,
    /// ITBIS charged on the subtotal, zero for tax-exempt types
    pub itbis: Decimal,
    /// subtotal + itbis
    pub total: Decimal,
}

impl InvoiceTotals {
    /// Totals of an empty invoice.
    pub fn zero() -> Self {
        Self {
            subtotal: Decimal::ZERO,
            itbis: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }

    /// Round for display or persistence.
    ///
    /// Subtotal and ITBIS are rounded half-up to the currency scale and the
    /// total is re-derived as their sum, so the printed figures always add
    /// up even when the unrounded parts would round apart.
    pub fn rounded(&self) -> Self {
        let currency = Currency::DOP;
        let subtotal = currency.round(self.subtotal);
        let itbis = currency.round(self.itbis);

        Self {
            subtotal,
            itbis,
            total: subtotal + itbis,
        }
    }
}

/// One row of the printable fiscal document table.
///
/// The fiscal-credit and governmental layouts print net amount and ITBIS
/// per line; tax-exempt documents print the same rows with zero ITBIS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FiscalLine {
    /// Quantity of units
    pub quantity: i32,
    /// Product description
    pub description: String,
    /// Price per unit
    pub unit_price: Decimal,
    /// unit_price × quantity, before tax
    pub net_amount: Decimal,
    /// ITBIS on this line, zero for tax-exempt types
    pub itbis: Decimal,
    /// net_amount + itbis
    pub line_total: Decimal,
}

/// Calculator for invoice totals
pub struct TotalsCalculator;

impl TotalsCalculator {
    /// Compute totals for a document type and its items.
    ///
    /// The subtotal is the sum of line subtotals (zero for an empty list),
    /// ITBIS is zero for tax-exempt types and 18% of the subtotal otherwise,
    /// and the total is their exact sum. The computation is pure and
    /// order-independent: reordering items never changes the result.
    pub fn compute(invoice_type: InvoiceType, items: &[LineItem]) -> InvoiceTotals {
        let subtotal: Decimal = items.iter().map(LineItem::subtotal).sum();

        let itbis = if ItbisCalculator::applies_to(invoice_type) {
            subtotal * ItbisCalculator::rate()
        } else {
            Decimal::ZERO
        };

        InvoiceTotals {
            subtotal,
            itbis,
            total: subtotal + itbis,
        }
    }

    /// Per-line breakdown for the printable document layouts.
    ///
    /// Each row repeats the line's net amount, its ITBIS share and the line
    /// total; summing the rows reproduces [`TotalsCalculator::compute`]
    /// exactly, so the table footer and the stored totals cannot disagree.
    pub fn line_breakdown(invoice_type: InvoiceType, items: &[LineItem]) -> Vec<FiscalLine> {
        let taxed = ItbisCalculator::applies_to(invoice_type);

        items
            .iter()
            .map(|item| {
                let net_amount = item.subtotal();
                let itbis = if taxed {
                    net_amount * ItbisCalculator::rate()
                } else {
                    Decimal::ZERO
                };

                FiscalLine {
                    quantity: item.quantity,
                    description: item.name.clone(),
                    unit_price: item.unit_price,
                    net_amount,
                    itbis,
                    line_total: net_amount + itbis,
                }
            })
            .collect()
    }
}
