use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;

use crate::domain::client::Client;
use crate::domain::invoice::{InvoiceCatalog, InvoiceError, InvoiceWithParties};

#[derive(Debug)]
pub struct GetInvoiceDetailsCommand {
  pub invoice_id: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyDetailsDto {
  pub id: i64,
  pub name: String,
  pub address: String,
  pub tax_number: String,
}

impl From<&Client> for PartyDetailsDto {
  fn from(client: &Client) -> Self {
    Self {
      id: client.id,
      name: client.name.value().to_string(),
      address: client.address.value().to_string(),
      tax_number: client.tax_number.value().to_string(),
    }
  }
}

/// Net, VAT and gross amounts as printed on the document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceFiguresDto {
  pub net_amount: Decimal,
  pub vat_amount: Decimal,
  pub gross_amount: Decimal,
  pub gross_amount_rounded: u64,
  pub gross_amount_in_words: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDetailsResponse {
  pub id: i64,
  pub number: String,
  pub issuer_id: i64,
  pub client_id: i64,
  pub issuer: PartyDetailsDto,
  pub client: PartyDetailsDto,
  pub date: NaiveDate,
  pub fulfillment_date: NaiveDate,
  pub due_date: NaiveDate,
  pub total: Decimal,
  pub vat: u32,
  pub payment_method: String,
  pub canceled: bool,
  pub figures: InvoiceFiguresDto,
}

impl TryFrom<&InvoiceWithParties> for InvoiceDetailsResponse {
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
      client_id: invoice.client_id,
      issuer: PartyDetailsDto::from(&row.issuer),
      client: PartyDetailsDto::from(&row.client),
      date: invoice.date,
      fulfillment_date: invoice.fulfillment_date,
      due_date: invoice.due_date,
      total: invoice.total,
      vat: invoice.vat.value(),
      payment_method: invoice.payment_method.as_str().to_string(),
      canceled: invoice.is_canceled(),
      figures: InvoiceFiguresDto {
        net_amount: figures.net_amount,
        vat_amount: figures.vat_amount,
        gross_amount: figures.gross_amount,
        gross_amount_rounded: figures.gross_amount_rounded,
        gross_amount_in_words: figures.gross_amount_in_words,
      },
    })
  }
}

pub struct GetInvoiceDetailsUseCase {
  invoice_catalog: Arc<InvoiceCatalog>,
}

impl GetInvoiceDetailsUseCase {
  pub fn new(invoice_catalog: Arc<InvoiceCatalog>) -> Self {
    Self { invoice_catalog }
  }

  pub async fn execute(
    &self,
    command: GetInvoiceDetailsCommand,
  ) -> Result<InvoiceDetailsResponse, InvoiceError> {
    let invoice = self.invoice_catalog.get(command.invoice_id).await?;
    InvoiceDetailsResponse::try_from(&invoice)
  }
}
