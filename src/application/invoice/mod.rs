pub mod cancel_invoice;
pub mod create_invoice;
pub mod get_invoice_details;
pub mod list_invoices;
pub mod update_invoice;

pub use cancel_invoice::{CancelInvoiceCommand, CancelInvoiceUseCase};
pub use create_invoice::{CreateInvoiceCommand, CreateInvoiceResponse, CreateInvoiceUseCase};
pub use get_invoice_details::{
  GetInvoiceDetailsCommand, GetInvoiceDetailsUseCase, InvoiceDetailsResponse, InvoiceFiguresDto,
  PartyDetailsDto,
};
pub use list_invoices::{InvoiceListItemDto, ListInvoicesResponse, ListInvoicesUseCase};
pub use update_invoice::{UpdateInvoiceCommand, UpdateInvoiceUseCase};
