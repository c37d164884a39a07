use std::collections::BTreeMap;

use chrono::Datelike;
use rust_decimal::Decimal;
use tracing::debug;

use crate::core::Currency;
use crate::modules::sales::models::{
    DailySales, GrowthStatus, MonthComparison, MonthlySales, Sale, SalesSummary,
};

/// Service for aggregating recorded sales into dashboard figures.
///
/// All aggregations are pure functions over a slice of sales; the caller
/// decides which period the slice covers.
pub struct SalesReport;

impl SalesReport {
    /// Summarize a set of sales.
    ///
    /// The average ticket is total / count rounded to the currency scale;
    /// an empty slice yields an all-zero summary rather than dividing.
    pub fn summarize(sales: &[Sale]) -> SalesSummary {
        if sales.is_empty() {
            return SalesSummary::empty();
        }

        let total_amount: Decimal = sales.iter().map(|s| s.total).sum();
        let sales_count = sales.len() as i64;
        let average_ticket = Currency::DOP.round(total_amount / Decimal::from(sales_count));

        SalesSummary {
            total_amount,
            sales_count,
            average_ticket,
        }
    }

    /// Group sales by calendar day, most recent day first.
    ///
    /// Within a day, sales are ordered newest first, the way the dashboard
    /// lists them.
    pub fn group_by_day(sales: &[Sale]) -> Vec<DailySales> {
        let mut days: BTreeMap<chrono::NaiveDate, Vec<Sale>> = BTreeMap::new();

        for sale in sales {
            days.entry(sale.created_at.date_naive())
                .or_default()
                .push(sale.clone());
        }

        let groups: Vec<DailySales> = days
            .into_iter()
            .rev()
            .map(|(date, mut day_sales)| {
                day_sales.sort_by(|a, b| b.created_at.cmp(&a.created_at));

                let total_amount = day_sales.iter().map(|s| s.total).sum();
                let sales_count = day_sales.len() as i64;

                DailySales {
                    date,
                    total_amount,
                    sales_count,
                    sales: day_sales,
                }
            })
            .collect();

        debug!(days = groups.len(), "grouped sales by day");

        groups
    }

    /// Total sales per calendar month, oldest first.
    pub fn monthly_totals(sales: &[Sale]) -> Vec<MonthlySales> {
        let mut months: BTreeMap<(i32, u32), (Decimal, i64)> = BTreeMap::new();

        for sale in sales {
            let key = (sale.created_at.year(), sale.created_at.month());
            let entry = months.entry(key).or_insert((Decimal::ZERO, 0));
            entry.0 += sale.total;
            entry.1 += 1;
        }

        months
            .into_iter()
            .map(|((year, month), (total_amount, sales_count))| MonthlySales {
                year,
                month,
                total_amount,
                sales_count,
            })
            .collect()
    }

    /// Compare two month summaries for the dashboard header.
    ///
    /// Growth is the absolute difference of totals. The percentage is
    /// relative to the previous month; a previous month with no sales
    /// reports 100% when the current month sold anything and 0% otherwise.
    pub fn compare_months(current: &SalesSummary, previous: &SalesSummary) -> MonthComparison {
        let growth = current.total_amount - previous.total_amount;

        let growth_percentage = if previous.total_amount > Decimal::ZERO {
            Currency::DOP.round(growth / previous.total_amount * Decimal::ONE_HUNDRED)
        } else if current.total_amount > Decimal::ZERO {
            Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };

        let status = if growth >= Decimal::ZERO {
            GrowthStatus::Increase
        } else {
            GrowthStatus::Decrease
        };

        MonthComparison {
            growth,
            growth_percentage,
            status,
        }
    }
}
