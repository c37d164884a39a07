use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies with their decimal precision rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Dominican Peso (2 decimal places)
    DOP,
}

impl Currency {
    /// Returns the decimal scale for this currency
    pub fn scale(&self) -> u32 {
        match self {
            Currency::DOP => 2,
        }
    }

    /// Rounds a decimal value to the appropriate scale for this currency.
    ///
    /// Rounding is half-up, matching how amounts are rounded on printed
    /// documents. Intermediate arithmetic stays unrounded; callers round
    /// once, when an amount leaves the calculation layer.
    pub fn round(&self, amount: Decimal) -> Decimal {
        amount.round_dp_with_strategy(self.scale(), RoundingStrategy::MidpointAwayFromZero)
    }

    /// Validates that a decimal value has the correct scale for this currency
    pub fn validate_amount(&self, amount: Decimal) -> Result<(), String> {
        let scale = amount.scale();
        let expected_scale = self.scale();

        if scale > expected_scale {
            return Err(format!(
                "{} amounts must have at most {} decimal places, got {}",
                self, expected_scale, scale
            ));
        }

        if amount < Decimal::ZERO {
            return Err(format!("{} amount cannot be negative", self));
        }

        Ok(())
    }

    /// Returns the smallest unit for this currency
    pub fn smallest_unit(&self) -> Decimal {
        match self {
            Currency::DOP => Decimal::new(1, 2), // 0.01
        }
    }

    /// Formats an amount for display, e.g. `RD$ 1,234.56`.
    ///
    /// Thousands are comma-grouped and exactly two decimal places are
    /// rendered, the same presentation the front-end uses everywhere.
    pub fn format_amount(&self, amount: Decimal) -> String {
        let rounded = self.round(amount);
        let sign = if rounded.is_sign_negative() { "-" } else { "" };
        let text = rounded.abs().to_string();

        let (units, fraction) = match text.split_once('.') {
            Some((units, fraction)) => (units.to_string(), format!("{:0<2}", fraction)),
            None => (text, "00".to_string()),
        };

        format!("{} {}{}.{}", self.symbol(), sign, group_thousands(&units), fraction)
    }

    /// Returns the display symbol for this currency
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::DOP => "RD$",
        }
    }
}

fn group_thousands(units: &str) -> String {
    let digits: Vec<char> = units.chars().collect();
    let mut grouped = String::with_capacity(units.len() + units.len() / 3);

    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    grouped
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::DOP => write!(f, "DOP"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DOP" => Ok(Currency::DOP),
            _ => Err(format!("Invalid currency: {}", s)),
        }
    }
}

impl TryFrom<String> for Currency {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<&str> for Currency {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
