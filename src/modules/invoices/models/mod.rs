mod draft;
mod invoice;
mod line_item;

pub use draft::{CreateInvoiceRequest, InvoiceDraft};
pub use invoice::{FieldRequirements, Invoice, InvoiceType};
pub use line_item::LineItem;
