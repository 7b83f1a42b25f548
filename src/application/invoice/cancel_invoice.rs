use std::sync::Arc;

use crate::domain::invoice::{InvoiceCatalog, InvoiceError};

#[derive(Debug)]
pub struct CancelInvoiceCommand {
  pub invoice_id: i64,
}

pub struct CancelInvoiceUseCase {
  invoice_catalog: Arc<InvoiceCatalog>,
}

impl CancelInvoiceUseCase {
  pub fn new(invoice_catalog: Arc<InvoiceCatalog>) -> Self {
    Self { invoice_catalog }
  }

  pub async fn execute(&self, command: CancelInvoiceCommand) -> Result<(), InvoiceError> {
    self.invoice_catalog.cancel(command.invoice_id).await
  }
}
