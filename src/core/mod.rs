pub mod currency;
pub mod error;
pub mod phone;

pub use currency::Currency;
pub use error::{AppError, Result};
