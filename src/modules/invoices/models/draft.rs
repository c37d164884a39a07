// An invoice draft is the editing-state counterpart of an invoice: the form
// mutates it field by field, totals are recomputed from it on every change,
// and submission turns it into an immutable request payload. A draft that
// fails validation stays exactly as it was; nothing here mutates on error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::invoice::InvoiceType;
use super::line_item::LineItem;
use crate::core::Result;
use crate::modules::invoices::services::{
    DraftError, DraftValidator, InvoiceTotals, TotalsCalculator,
};

/// An invoice being drafted in the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDraft {
    /// Fiscal document type, chosen once at creation
    pub invoice_type: InvoiceType,

    /// Registered customer reference, for types that require one
    pub customer_id: Option<i64>,

    /// Free-text customer name, for basic receipts
    pub customer_name: Option<String>,

    /// Line items in entry order
    pub items: Vec<LineItem>,

    /// Issue date; absent until the user picks one
    pub issue_date: Option<NaiveDate>,
}

impl InvoiceDraft {
    /// Start an empty draft for the given document type.
    pub fn new(invoice_type: InvoiceType) -> Self {
        Self {
            invoice_type,
            customer_id: None,
            customer_name: None,
            items: Vec::new(),
            issue_date: None,
        }
    }

    /// Append a line item.
    pub fn add_item(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Append an empty row for the user to fill in.
    pub fn add_blank_item(&mut self) {
        self.items.push(LineItem::blank());
    }

    /// Remove the item at `index`, returning it if it existed.
    pub fn remove_item(&mut self, index: usize) -> Option<LineItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Point the draft at a registered customer.
    pub fn set_customer(&mut self, customer_id: i64) {
        self.customer_id = Some(customer_id);
    }

    /// Capture a free-text customer name.
    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        self.customer_name = Some(name.into());
    }

    /// Set the issue date.
    pub fn set_issue_date(&mut self, date: NaiveDate) {
        self.issue_date = Some(date);
    }

    /// Current totals for the form's live summary panel.
    pub fn totals(&self) -> InvoiceTotals {
        TotalsCalculator::compute(self.invoice_type, &self.items)
    }

    /// Run the full submission rule set, reporting every violation at once.
    pub fn validate(&self) -> Vec<DraftError> {
        DraftValidator::validate(self)
    }

    /// Validate and build the submission payload.
    ///
    /// On failure the complete error list is returned and the draft is left
    /// untouched, still editable.
    pub fn to_request(&self) -> std::result::Result<CreateInvoiceRequest, Vec<DraftError>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        let Some(created_at) = self.issue_date else {
            return Err(vec![DraftError::MissingIssueDate]);
        };

        Ok(CreateInvoiceRequest {
            invoice_type: self.invoice_type,
            customer_id: self.customer_id,
            customer_name: self
                .customer_name
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string),
            items: self.items.clone(),
            created_at,
        })
    }
}

/// Request payload for creating an invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceRequest {
    /// Fiscal document type
    #[serde(rename = "type")]
    pub invoice_type: InvoiceType,

    /// Registered customer reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,

    /// Free-text customer name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,

    /// Line items, at least one
    pub items: Vec<LineItem>,

    /// Issue date
    pub created_at: NaiveDate,
}

impl CreateInvoiceRequest {
    /// Serialize to the JSON body the remote API consumes.
    pub fn to_json_body(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Totals as the server will compute them, for pre-submission display.
    pub fn expected_totals(&self) -> InvoiceTotals {
        TotalsCalculator::compute(self.invoice_type, &self.items)
    }
}
