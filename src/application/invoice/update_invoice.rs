use std::sync::Arc;

use crate::domain::invoice::{InvoiceCatalog, InvoiceDraft, InvoiceError};

#[derive(Debug)]
pub struct UpdateInvoiceCommand {
  pub invoice_id: i64,
  pub draft: InvoiceDraft,
}

pub struct UpdateInvoiceUseCase {
  invoice_catalog: Arc<InvoiceCatalog>,
}

impl UpdateInvoiceUseCase {
  pub fn new(invoice_catalog: Arc<InvoiceCatalog>) -> Self {
    Self { invoice_catalog }
  }

  pub async fn execute(&self, command: UpdateInvoiceCommand) -> Result<(), InvoiceError> {
    self
      .invoice_catalog
      .update(command.invoice_id, &command.draft)
      .await?;
    Ok(())
  }
}
