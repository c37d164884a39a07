pub mod draft_validator;
pub mod totals_calculator;

pub use draft_validator::{DraftError, DraftValidator, LineItemFault};
pub use totals_calculator::{FiscalLine, InvoiceTotals, TotalsCalculator};
