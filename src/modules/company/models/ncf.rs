// NCF (Número de Comprobante Fiscal) handling. An NCF is an 11-character
// fiscal receipt number: a serie letter, a two-digit kind code and an
// eight-digit sequence, e.g. `B0100000001`. The company keeps one running
// sequence per kind; the server stamps the next value onto each applicable
// invoice.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{AppError, Result};

/// Kind of fiscal receipt, the two-digit code inside an NCF
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NcfKind {
    /// 01 — crédito fiscal, deductible by registered taxpayers
    CreditoFiscal,
    /// 02 — consumo, final-consumer receipts
    Consumo,
    /// 15 — gubernamental, government institutions
    Gubernamental,
}

impl NcfKind {
    /// The two-digit code as printed inside the NCF.
    pub fn code(&self) -> &'static str {
        match self {
            NcfKind::CreditoFiscal => "01",
            NcfKind::Consumo => "02",
            NcfKind::Gubernamental => "15",
        }
    }

    /// Resolve a kind from its two-digit code.
    pub fn from_code(code: &str) -> Result<Self> {
        match code {
            "01" => Ok(NcfKind::CreditoFiscal),
            "02" => Ok(NcfKind::Consumo),
            "15" => Ok(NcfKind::Gubernamental),
            _ => Err(AppError::validation(format!("Unknown NCF kind code: {}", code))),
        }
    }
}

/// A fiscal receipt number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Ncf {
    /// Serie letter, `B` for standard sequences
    serie: char,
    kind: NcfKind,
    /// Running sequence, 1 to 99_999_999
    sequence: u32,
}

const MAX_NCF_SEQUENCE: u32 = 99_999_999;

impl Ncf {
    /// Create an NCF from its parts.
    pub fn new(serie: char, kind: NcfKind, sequence: u32) -> Result<Self> {
        if !serie.is_ascii_uppercase() {
            return Err(AppError::validation(format!(
                "NCF serie must be an uppercase letter, got: {}",
                serie
            )));
        }

        if sequence == 0 || sequence > MAX_NCF_SEQUENCE {
            return Err(AppError::validation(format!(
                "NCF sequence must be between 1 and {}, got: {}",
                MAX_NCF_SEQUENCE, sequence
            )));
        }

        Ok(Self {
            serie,
            kind,
            sequence,
        })
    }

    pub fn serie(&self) -> char {
        self.serie
    }

    pub fn kind(&self) -> NcfKind {
        self.kind
    }

    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    /// The NCF that follows this one in the sequence.
    ///
    /// Fails when the eight-digit sequence is exhausted; at that point the
    /// tax authority must authorize a new range.
    pub fn next(&self) -> Result<Self> {
        if self.sequence >= MAX_NCF_SEQUENCE {
            return Err(AppError::validation(format!(
                "NCF sequence exhausted for serie {} kind {}",
                self.serie,
                self.kind.code()
            )));
        }

        Ok(Self {
            sequence: self.sequence + 1,
            ..*self
        })
    }
}

impl fmt::Display for Ncf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{:08}", self.serie, self.kind.code(), self.sequence)
    }
}

impl std::str::FromStr for Ncf {
    type Err = AppError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let value = s.trim();

        if value.len() != 11 || !value.is_ascii() {
            return Err(AppError::validation(format!(
                "NCF must be 11 characters (serie + kind + sequence), got: {}",
                value
            )));
        }

        let serie = value.chars().next().filter(|c| c.is_ascii_uppercase());
        let kind = NcfKind::from_code(&value[1..3])?;
        let sequence: u32 = value[3..11]
            .parse()
            .map_err(|_| AppError::validation(format!("NCF sequence must be numeric: {}", value)))?;

        match serie {
            Some(serie) => Ncf::new(serie, kind, sequence),
            None => Err(AppError::validation(format!(
                "NCF serie must be an uppercase letter: {}",
                value
            ))),
        }
    }
}

impl From<Ncf> for String {
    fn from(ncf: Ncf) -> Self {
        ncf.to_string()
    }
}

impl TryFrom<String> for Ncf {
    type Error = AppError;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
