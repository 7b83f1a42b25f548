use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;

use crate::domain::invoice::{InvoiceCatalog, InvoiceError, InvoiceWithParties};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceListItemDto {
  pub id: i64,
  pub number: String,
  pub issuer_id: i64,
  pub issuer_name: String,
  pub client_id: i64,
  pub client_name: String,
  pub date: NaiveDate,
  pub fulfillment_date: NaiveDate,
  pub due_date: NaiveDate,
  pub total: Decimal,
  pub vat: u32,
  pub payment_method: String,
  pub canceled: bool,
  pub gross_amount: Decimal,
}

impl TryFrom<&InvoiceWithParties> for InvoiceListItemDto {
  type Error = InvoiceError;

  fn try_from(row: &InvoiceWithParties) -> Result<Self, Self::Error> {
    let invoice = &row.invoice;
    let figures = invoice
      .figures()
      .map_err(|e| InvoiceError::Internal(format!("Invoice {}: {}", invoice.id, e)))?;

    Ok(Self {
      id: invoice.id,
      number: invoice.number.to_string(),
      issuer_id: invoice.issuer_id,
      issuer_name: row.issuer.name.to_string(),
      client_id: invoice.client_id,
      client_name: row.client.name.to_string(),
      date: invoice.date,
      fulfillment_date: invoice.fulfillment_date,
      due_date: invoice.due_date,
      total: invoice.total,
      vat: invoice.vat.value(),
      payment_method: invoice.payment_method.as_str().to_string(),
      canceled: invoice.is_canceled(),
      gross_amount: figures.gross_amount,
    })
  }
}

#[derive(Debug, Serialize)]
pub struct ListInvoicesResponse {
  pub invoices: Vec<InvoiceListItemDto>,
}

pub struct ListInvoicesUseCase {
  invoice_catalog: Arc<InvoiceCatalog>,
}

impl ListInvoicesUseCase {
  pub fn new(invoice_catalog: Arc<InvoiceCatalog>) -> Self {
    Self { invoice_catalog }
  }

  pub async fn execute(&self) -> Result<ListInvoicesResponse, InvoiceError> {
    let invoices = self.invoice_catalog.list().await?;

    Ok(ListInvoicesResponse {
      invoices: invoices
        .iter()
        .map(InvoiceListItemDto::try_from)
        .collect::<Result<_, _>>()?,
    })
  }
}
