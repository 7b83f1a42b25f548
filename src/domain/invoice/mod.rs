pub mod entities;
pub mod errors;
pub mod money_words;
pub mod ports;
pub mod services;
pub mod validator;
pub mod value_objects;

pub use entities::{Invoice, InvoiceFigures, InvoiceWithParties, NewInvoice};
pub use errors::{InvoiceEntityError, InvoiceError, InvoiceRejection, PartyRole};
pub use money_words::{amount_in_words, hungarian_cardinal};
pub use ports::InvoiceRepository;
pub use services::InvoiceCatalog;
pub use validator::{CheckedInvoice, InvoiceDraft, InvoiceValidator, MAX_PAYMENT_DAYS};
pub use value_objects::{InvoiceNumber, InvoiceStatus, PaymentMethod, VatRate};
