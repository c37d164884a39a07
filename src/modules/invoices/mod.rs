// Invoices module

pub mod models;
pub mod services;

pub use models::{
    CreateInvoiceRequest, FieldRequirements, Invoice, InvoiceDraft, InvoiceType, LineItem,
};
pub use services::{DraftError, DraftValidator, FiscalLine, InvoiceTotals, LineItemFault, TotalsCalculator};
