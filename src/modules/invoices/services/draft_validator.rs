// Submission rule set for invoice drafts. Every applicable check runs and
// every violation is reported in one pass, so the form can surface the
// complete list instead of making the user fix errors one at a time.

use serde::Serialize;
use tracing::debug;

use crate::modules::invoices::models::InvoiceDraft;

/// A single reason a draft cannot be submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Serialize)]
pub enum DraftError {
    /// The document type requires a registered customer and none is set
    #[error("a registered customer is required for this document type")]
    MissingCustomer,

    /// The document type requires a customer name and it is blank
    #[error("a customer name is required for this document type")]
    MissingCustomerName,

    /// The draft has no line items
    #[error("the invoice must contain at least one item")]
    NoLineItems,

    /// The item at `index` violates the line item rules
    #[error("item {index} is invalid: {fault}")]
    InvalidLineItem { index: usize, fault: LineItemFault },

    /// No issue date has been set
    #[error("an issue date is required")]
    MissingIssueDate,
}

/// What is wrong with an individual line item
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Serialize)]
pub enum LineItemFault {
    #[error("name must not be blank")]
    BlankName,

    #[error("unit price cannot be negative")]
    NegativePrice,

    #[error("quantity must be positive")]
    NonPositiveQuantity,
}

/// Validator for invoice drafts
pub struct DraftValidator;

impl DraftValidator {
    /// Check a draft against the submission rules.
    ///
    /// Returns every violation found; an empty list means the draft is
    /// ready to submit. The draft is never mutated.
    pub fn validate(draft: &InvoiceDraft) -> Vec<DraftError> {
        let mut errors = Vec::new();

        let required = draft.invoice_type.required_fields();

        if required.needs_customer_reference && draft.customer_id.is_none() {
            errors.push(DraftError::MissingCustomer);
        }

        if required.needs_customer_name && is_blank(draft.customer_name.as_deref()) {
            errors.push(DraftError::MissingCustomerName);
        }

        if draft.items.is_empty() {
            errors.push(DraftError::NoLineItems);
        }

        for (index, item) in draft.items.iter().enumerate() {
            if let Err(fault) = item.validate() {
                errors.push(DraftError::InvalidLineItem { index, fault });
            }
        }

        if draft.issue_date.is_none() {
            errors.push(DraftError::MissingIssueDate);
        }

        if !errors.is_empty() {
            debug!(
                invoice_type = %draft.invoice_type,
                error_count = errors.len(),
                "draft rejected"
            );
        }

        errors
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}
