// Company module

pub mod models;

pub use models::{Company, Ncf, NcfKind, UpdateCompanyRequest};
