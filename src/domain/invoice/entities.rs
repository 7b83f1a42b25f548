use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::domain::client::Client;

use super::errors::InvoiceEntityError;
use super::money_words::amount_in_words;
use super::validator::CheckedInvoice;
use super::value_objects::{InvoiceNumber, InvoiceStatus, PaymentMethod, VatRate};

// Invoice - stored record; money figures are derived on read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
  pub id: i64,
  pub number: InvoiceNumber,
  pub issuer_id: i64,
  pub client_id: i64,
  pub date: NaiveDate,
  pub fulfillment_date: NaiveDate,
  pub due_date: NaiveDate,
  pub total: Decimal,
  pub vat: VatRate,
  pub payment_method: PaymentMethod,
  pub status: InvoiceStatus,
}

impl Invoice {
  /// Replaces every mutable field with the checked edit.
  ///
  /// The payment method is kept when the edit does not carry a known one.
  pub fn apply_edit(&mut self, edit: CheckedInvoice) -> Result<(), InvoiceEntityError> {
    if !self.status.is_editable() {
      return Err(InvoiceEntityError::NotEditable);
    }

    self.number = edit.number;
    self.issuer_id = edit.issuer_id;
    self.client_id = edit.client_id;
    self.date = edit.date;
    self.fulfillment_date = edit.fulfillment_date;
    self.due_date = edit.due_date;
    self.total = edit.total;
    self.vat = edit.vat;
    if let Some(method) = edit.payment_method {
      self.payment_method = method;
    }

    Ok(())
  }

  /// Stornó: the one-way Active -> Canceled transition
  pub fn cancel(&mut self) -> Result<(), InvoiceEntityError> {
    if !self.status.can_transition_to(InvoiceStatus::Canceled) {
      return Err(InvoiceEntityError::AlreadyCanceled);
    }
    self.status = InvoiceStatus::Canceled;
    Ok(())
  }

  pub fn is_canceled(&self) -> bool {
    self.status.is_canceled()
  }

  pub fn figures(&self) -> Result<InvoiceFigures, InvoiceEntityError> {
    InvoiceFigures::calculate(self.total, self.vat)
  }
}

/// Invoice data ready to be inserted; the storage assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInvoice {
  pub number: InvoiceNumber,
  pub issuer_id: i64,
  pub client_id: i64,
  pub date: NaiveDate,
  pub fulfillment_date: NaiveDate,
  pub due_date: NaiveDate,
  pub total: Decimal,
  pub vat: VatRate,
  pub payment_method: PaymentMethod,
}

impl NewInvoice {
  pub fn from_checked(checked: CheckedInvoice) -> Self {
    Self {
      number: checked.number,
      issuer_id: checked.issuer_id,
      client_id: checked.client_id,
      date: checked.date,
      fulfillment_date: checked.fulfillment_date,
      due_date: checked.due_date,
      total: checked.total,
      vat: checked.vat,
      payment_method: checked.payment_method.unwrap_or(PaymentMethod::BankTransfer),
    }
  }
}

// Invoice Figures - Calculated, not persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceFigures {
  pub net_amount: Decimal,
  pub vat_amount: Decimal,
  pub gross_amount: Decimal,
  pub gross_amount_rounded: u64,
  pub gross_amount_in_words: String,
}

/// Largest gross amount the document can spell out in words
pub const MAX_GROSS_AMOUNT: u64 = 999_999_999_999;

impl InvoiceFigures {
  /// Derives the VAT breakdown, failing when the gross amount does not fit
  /// `0..=MAX_GROSS_AMOUNT`.
  pub fn calculate(total: Decimal, vat: VatRate) -> Result<Self, InvoiceEntityError> {
    let net_amount = round2(total);
    let vat_amount = total
      .checked_mul(Decimal::from(vat.value()))
      .and_then(|amount| amount.checked_div(Decimal::ONE_HUNDRED))
      .map(round2)
      .ok_or(InvoiceEntityError::AmountOutOfRange)?;
    let gross_amount = total
      .checked_add(vat_amount)
      .map(round2)
      .ok_or(InvoiceEntityError::AmountOutOfRange)?;
    let gross_amount_rounded = gross_amount
      .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
      .to_u64()
      .filter(|amount| *amount <= MAX_GROSS_AMOUNT)
      .ok_or(InvoiceEntityError::AmountOutOfRange)?;

    Ok(Self {
      net_amount,
      vat_amount,
      gross_amount,
      gross_amount_rounded,
      gross_amount_in_words: amount_in_words(gross_amount_rounded),
    })
  }
}

/// Two decimal places, half away from zero, always printed with two decimals
fn round2(value: Decimal) -> Decimal {
  let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
  rounded.rescale(2);
  rounded
}

/// Invoice joined with both referenced clients, used by every read path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceWithParties {
  pub invoice: Invoice,
  pub issuer: Client,
  pub client: Client,
}
