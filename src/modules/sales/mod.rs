// Sales module

pub mod models;
pub mod services;

pub use models::{
    CreateSaleRequest, DailySales, GrowthStatus, MonthComparison, MonthlySales, Sale, SalesSummary,
};
pub use services::SalesReport;
