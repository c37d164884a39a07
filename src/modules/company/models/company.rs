// The company profile: identity printed on every document header plus the
// running fiscal sequences. One NCF sequence exists per receipt kind, and
// quotes use a plain counter instead of an NCF.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ncf::{Ncf, NcfKind};
use crate::core::{AppError, Result};
use crate::modules::customers::DocumentKind;
use crate::modules::invoices::InvoiceType;

/// The issuing company as returned by the remote API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: i64,

    /// Legal or trade name printed on documents
    pub name: String,

    /// Company RNC, bare digits
    pub rnc: String,

    pub address: String,

    /// Primary contact phone, bare digits
    pub phone_number: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_phone_number: Option<String>,

    /// Next NCF to assign to a governmental invoice
    #[serde(rename = "nextGovernmentalNCF")]
    pub next_governmental_ncf: Ncf,

    /// Next NCF to assign to a fiscal-credit invoice
    #[serde(rename = "nextCreditNCF")]
    pub next_credit_ncf: Ncf,

    /// Next NCF to assign to a final-consumer invoice
    #[serde(rename = "nextEndConsumerNCF")]
    pub next_end_consumer_ncf: Ncf,

    /// Next quote number
    pub next_quote_number: i64,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Company {
    /// The NCF the next invoice of this type would receive, if the type
    /// consumes one.
    pub fn next_ncf_for(&self, invoice_type: InvoiceType) -> Option<Ncf> {
        invoice_type.ncf_kind().map(|kind| self.next_ncf(kind))
    }

    fn next_ncf(&self, kind: NcfKind) -> Ncf {
        match kind {
            NcfKind::Gubernamental => self.next_governmental_ncf,
            NcfKind::CreditoFiscal => self.next_credit_ncf,
            NcfKind::Consumo => self.next_end_consumer_ncf,
        }
    }

    /// Consume the current NCF of the given kind, advancing the sequence.
    ///
    /// Returns the number that was assigned. Fails when the sequence is
    /// exhausted, leaving the profile unchanged.
    pub fn advance_ncf(&mut self, kind: NcfKind) -> Result<Ncf> {
        let current = self.next_ncf(kind);
        let next = current.next()?;

        match kind {
            NcfKind::Gubernamental => self.next_governmental_ncf = next,
            NcfKind::CreditoFiscal => self.next_credit_ncf = next,
            NcfKind::Consumo => self.next_end_consumer_ncf = next,
        }

        Ok(current)
    }

    /// Consume the current quote number, advancing the counter.
    pub fn take_quote_number(&mut self) -> i64 {
        let current = self.next_quote_number;
        self.next_quote_number += 1;
        current
    }
}

/// Request payload for saving the company profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompanyRequest {
    pub name: String,
    pub rnc: String,
    pub address: String,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_phone_number: Option<String>,
    #[serde(rename = "nextGovernmentalNCF")]
    pub next_governmental_ncf: Ncf,
    #[serde(rename = "nextCreditNCF")]
    pub next_credit_ncf: Ncf,
    #[serde(rename = "nextEndConsumerNCF")]
    pub next_end_consumer_ncf: Ncf,
    pub next_quote_number: i64,
}

impl UpdateCompanyRequest {
    /// Check the profile before submission.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Company name cannot be empty"));
        }

        let (kind, _) = DocumentKind::parse(&self.rnc)?;
        if kind != DocumentKind::Rnc {
            return Err(AppError::validation(format!(
                "Company RNC must have 9 digits, got: {}",
                self.rnc
            )));
        }

        if self.address.trim().is_empty() {
            return Err(AppError::validation("Company address cannot be empty"));
        }

        if self.phone_number.trim().is_empty() {
            return Err(AppError::validation("Company phone number cannot be empty"));
        }

        if self.next_quote_number < 1 {
            return Err(AppError::validation(format!(
                "Next quote number must be at least 1, got: {}",
                self.next_quote_number
            )));
        }

        // Each sequence must hold an NCF of its own kind
        for (field, ncf, expected) in [
            ("nextGovernmentalNCF", self.next_governmental_ncf, NcfKind::Gubernamental),
            ("nextCreditNCF", self.next_credit_ncf, NcfKind::CreditoFiscal),
            ("nextEndConsumerNCF", self.next_end_consumer_ncf, NcfKind::Consumo),
        ] {
            if ncf.kind() != expected {
                return Err(AppError::validation(format!(
                    "{} must be a kind {} NCF, got: {}",
                    field,
                    expected.code(),
                    ncf
                )));
            }
        }

        Ok(())
    }
}
