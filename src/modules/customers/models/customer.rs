// Customer records for the document types that invoice a registered buyer.
// The identifying document is an RNC (company taxpayer number, 9 digits) or
// a cédula (personal id, 11 digits); both are stored as bare digits and may
// arrive with separators from the form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::phone::unmask_phone;
use crate::core::{AppError, Result};

/// Kind of taxpayer document identifying a customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Registro Nacional de Contribuyentes, 9 digits
    Rnc,
    /// Cédula de identidad, 11 digits
    Cedula,
}

impl DocumentKind {
    /// Classify and normalize a document value.
    ///
    /// Dashes and spaces are tolerated on input; the returned string is the
    /// bare-digit storage form.
    pub fn parse(document: &str) -> Result<(DocumentKind, String)> {
        let trimmed = document.trim();

        if trimmed.is_empty() {
            return Err(AppError::validation("Document cannot be empty"));
        }

        let digits: String = trimmed
            .chars()
            .filter(|c| !matches!(c, '-' | ' '))
            .collect();

        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(AppError::validation(format!(
                "Document must contain only digits, got: {}",
                trimmed
            )));
        }

        match digits.len() {
            9 => Ok((DocumentKind::Rnc, digits)),
            11 => Ok((DocumentKind::Cedula, digits)),
            other => Err(AppError::validation(format!(
                "Document must be an RNC (9 digits) or cédula (11 digits), got {} digits",
                other
            ))),
        }
    }
}

/// A registered customer as returned by the remote API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Server-assigned customer ID
    pub id: i64,

    /// Customer or business name
    pub name: String,

    /// RNC or cédula, bare digits
    pub document: String,

    /// Contact phone, bare digits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Which kind of document identifies this customer.
    pub fn document_kind(&self) -> Result<DocumentKind> {
        DocumentKind::parse(&self.document).map(|(kind, _)| kind)
    }
}

/// Request payload for creating a customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    pub name: String,
    pub document: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl CreateCustomerRequest {
    /// Create a validated customer payload.
    ///
    /// The document is normalized to bare digits and the phone, when given,
    /// is stored unmasked.
    pub fn new(
        name: impl Into<String>,
        document: &str,
        phone: Option<&str>,
        address: Option<&str>,
    ) -> Result<Self> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(AppError::validation("Customer name cannot be empty"));
        }

        let (_, document) = DocumentKind::parse(document)?;

        let phone = phone
            .map(unmask_phone)
            .filter(|digits| !digits.is_empty());

        let address = address
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string);

        Ok(Self {
            name,
            document,
            phone,
            address,
        })
    }
}
