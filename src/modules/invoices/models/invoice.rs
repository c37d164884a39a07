// An invoice is a fiscal document of one of five types. The type decides
// which customer fields are required, whether ITBIS applies, and which NCF
// sequence the document consumes. Once persisted by the remote API an
// invoice is immutable; its line items are frozen as part of the record.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line_item::LineItem;
use crate::modules::company::NcfKind;
use crate::modules::customers::Customer;
use crate::modules::invoices::services::{FiscalLine, InvoiceTotals, TotalsCalculator};

/// Fiscal document types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvoiceType {
    /// Invoice for a government institution
    #[serde(rename = "GOVERNMENTAL")]
    Governmental,

    /// Quotation, not a final fiscal document
    #[serde(rename = "QUOTE")]
    Quote,

    /// Final-consumer invoice, anonymous buyer allowed
    #[serde(rename = "ENDCONSUMER")]
    EndConsumer,

    /// Fiscal-credit invoice for registered taxpayers
    #[serde(rename = "CREDIT")]
    Credit,

    /// Plain receipt without tax breakdown
    #[serde(rename = "BASIC")]
    Basic,
}

/// Which customer fields a document type requires before submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRequirements {
    /// A registered customer record must be referenced
    pub needs_customer_reference: bool,
    /// A free-text customer name must be captured
    pub needs_customer_name: bool,
}

impl InvoiceType {
    /// Resolve the customer fields this document type requires.
    ///
    /// Governmental, quote and fiscal-credit documents are issued against a
    /// registered customer; a basic receipt only captures a name; a
    /// final-consumer invoice needs neither.
    pub fn required_fields(&self) -> FieldRequirements {
        match self {
            InvoiceType::Governmental | InvoiceType::Quote | InvoiceType::Credit => {
                FieldRequirements {
                    needs_customer_reference: true,
                    needs_customer_name: false,
                }
            }
            InvoiceType::Basic => FieldRequirements {
                needs_customer_reference: false,
                needs_customer_name: true,
            },
            InvoiceType::EndConsumer => FieldRequirements {
                needs_customer_reference: false,
                needs_customer_name: false,
            },
        }
    }

    /// Whether this document type carries no ITBIS.
    ///
    /// Basic receipts are issued without tax; every other type charges the
    /// statutory 18% on the subtotal.
    pub fn is_tax_exempt(&self) -> bool {
        matches!(self, InvoiceType::Basic)
    }

    /// The NCF sequence this document type consumes, if any.
    ///
    /// Quotes use a plain quote number and basic receipts carry no fiscal
    /// number at all.
    pub fn ncf_kind(&self) -> Option<NcfKind> {
        match self {
            InvoiceType::Credit => Some(NcfKind::CreditoFiscal),
            InvoiceType::EndConsumer => Some(NcfKind::Consumo),
            InvoiceType::Governmental => Some(NcfKind::Gubernamental),
            InvoiceType::Quote | InvoiceType::Basic => None,
        }
    }
}

impl std::fmt::Display for InvoiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvoiceType::Governmental => write!(f, "GOVERNMENTAL"),
            InvoiceType::Quote => write!(f, "QUOTE"),
            InvoiceType::EndConsumer => write!(f, "ENDCONSUMER"),
            InvoiceType::Credit => write!(f, "CREDIT"),
            InvoiceType::Basic => write!(f, "BASIC"),
        }
    }
}

impl std::str::FromStr for InvoiceType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "GOVERNMENTAL" => Ok(InvoiceType::Governmental),
            "QUOTE" => Ok(InvoiceType::Quote),
            "ENDCONSUMER" => Ok(InvoiceType::EndConsumer),
            "CREDIT" => Ok(InvoiceType::Credit),
            "BASIC" => Ok(InvoiceType::Basic),
            _ => Err(format!("Invalid invoice type: {}", s)),
        }
    }
}

/// A persisted invoice as returned by the remote API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Server-assigned invoice ID
    pub id: i64,

    /// Registered customer reference, when the type requires one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,

    /// Full customer record, when the API expands it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,

    /// Free-text customer name for basic receipts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,

    /// Fiscal document type, fixed at creation
    #[serde(rename = "type")]
    pub invoice_type: InvoiceType,

    /// Customer RNC or cédula printed on the document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,

    /// Server-assigned fiscal receipt number, for applicable types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ncf: Option<String>,

    /// Frozen line items
    pub items: Vec<LineItem>,

    /// Server-computed subtotal
    pub subtotal: Decimal,

    /// Server-computed ITBIS amount
    pub taxes: Decimal,

    /// Server-computed total
    pub total: Decimal,

    /// When the invoice was issued
    pub created_at: DateTime<Utc>,
}

impl Invoice {
    /// Re-derive the totals from the frozen items.
    ///
    /// Display layers render from this rather than re-implementing the
    /// arithmetic, so printed documents and the stored record cannot drift.
    pub fn computed_totals(&self) -> InvoiceTotals {
        TotalsCalculator::compute(self.invoice_type, &self.items)
    }

    /// Per-line fiscal breakdown for the printable document layouts.
    pub fn fiscal_lines(&self) -> Vec<FiscalLine> {
        TotalsCalculator::line_breakdown(self.invoice_type, &self.items)
    }

    /// The customer name to print, preferring the registered record.
    pub fn customer_display_name(&self) -> Option<&str> {
        self.customer
            .as_ref()
            .map(|c| c.name.as_str())
            .or(self.customer_name.as_deref())
    }
}
