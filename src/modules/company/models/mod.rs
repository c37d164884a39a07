mod company;
mod ncf;

pub use company::{Company, UpdateCompanyRequest};
pub use ncf::{Ncf, NcfKind};
