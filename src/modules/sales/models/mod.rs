mod sale;
mod summary;

pub use sale::{CreateSaleRequest, Sale};
pub use summary::{DailySales, GrowthStatus, MonthComparison, MonthlySales, SalesSummary};
