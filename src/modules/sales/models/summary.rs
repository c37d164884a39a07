// Aggregate shapes the dashboard renders: a period summary, per-day and
// per-month groupings, and the month-over-month comparison.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::sale::Sale;

/// Totals for a set of sales
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    /// Sum of sale totals
    pub total_amount: Decimal,

    /// Number of sales
    pub sales_count: i64,

    /// total_amount / sales_count, rounded to the currency scale
    pub average_ticket: Decimal,
}

impl SalesSummary {
    /// Summary of an empty period.
    pub fn empty() -> Self {
        Self {
            total_amount: Decimal::ZERO,
            sales_count: 0,
            average_ticket: Decimal::ZERO,
        }
    }
}

/// Sales aggregated for one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySales {
    pub date: NaiveDate,
    pub total_amount: Decimal,
    pub sales_count: i64,
    /// The day's sales, newest first
    pub sales: Vec<Sale>,
}

/// Sales aggregated for one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySales {
    pub year: i32,
    /// 1-based calendar month
    pub month: u32,
    pub total_amount: Decimal,
    pub sales_count: i64,
}

/// Direction of the month-over-month movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthStatus {
    Increase,
    Decrease,
}

/// Month-over-month comparison for the dashboard header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthComparison {
    /// current total − previous total
    pub growth: Decimal,

    /// Growth relative to the previous month, in percent
    pub growth_percentage: Decimal,

    #[serde(rename = "growthStatus")]
    pub status: GrowthStatus,
}
