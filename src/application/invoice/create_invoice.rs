use serde::Serialize;
use std::sync::Arc;

use crate::domain::invoice::{InvoiceCatalog, InvoiceDraft, InvoiceError};

#[derive(Debug)]
pub struct CreateInvoiceCommand {
  pub draft: InvoiceDraft,
}

#[derive(Debug, Serialize)]
pub struct CreateInvoiceResponse {
  pub id: i64,
}

pub struct CreateInvoiceUseCase {
  invoice_catalog: Arc<InvoiceCatalog>,
}

impl CreateInvoiceUseCase {
  pub fn new(invoice_catalog: Arc<InvoiceCatalog>) -> Self {
    Self { invoice_catalog }
  }

  pub async fn execute(
    &self,
    command: CreateInvoiceCommand,
  ) -> Result<CreateInvoiceResponse, InvoiceError> {
    let invoice = self.invoice_catalog.create(&command.draft).await?;
    Ok(CreateInvoiceResponse { id: invoice.id })
  }
}
