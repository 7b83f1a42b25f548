use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::collections::HashSet;
use std::str::FromStr;

use super::entities::InvoiceFigures;
use super::errors::InvoiceRejection;
use super::value_objects::{InvoiceNumber, PaymentMethod, VatRate};

lazy_static! {
  static ref ISO_DATE: Regex = Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap();
}

/// Longest allowed gap between the issue date and the payment deadline
pub const MAX_PAYMENT_DAYS: i64 = 30;

/// Candidate invoice as received from a caller.
///
/// Every field is kept as text regardless of how the caller encoded it, so the
/// validator is the only place that decides what a well-formed value is.
/// Blank strings count as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceDraft {
  pub number: Option<String>,
  pub issuer_id: Option<String>,
  pub client_id: Option<String>,
  pub date: Option<String>,
  pub fulfillment_date: Option<String>,
  pub due_date: Option<String>,
  pub total: Option<String>,
  pub vat: Option<String>,
  pub payment_method: Option<String>,
}

/// A draft that passed every rule of its path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedInvoice {
  pub number: InvoiceNumber,
  pub issuer_id: i64,
  pub client_id: i64,
  pub date: NaiveDate,
  pub fulfillment_date: NaiveDate,
  pub due_date: NaiveDate,
  pub total: Decimal,
  pub vat: VatRate,
  /// Always set on the create path. On the edit path it is only set when the
  /// caller sent one of the known methods.
  pub payment_method: Option<PaymentMethod>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Path {
  Create,
  Edit,
}

/// Stop-on-first-error rule checker for invoice payloads.
pub struct InvoiceValidator;

impl InvoiceValidator {
  /// Validates a new invoice. `existing_numbers` is the set of numbers already
  /// in use; matching is exact and case-sensitive.
  pub fn validate_new(
    draft: &InvoiceDraft,
    existing_numbers: &HashSet<String>,
  ) -> Result<CheckedInvoice, InvoiceRejection> {
    let checked = Self::check(draft, Path::Create)?;
    if existing_numbers.contains(checked.number.value()) {
      return Err(InvoiceRejection::NumberTaken);
    }
    Ok(checked)
  }

  /// Validates the edit of an existing invoice.
  ///
  /// The edit path accepts a zero total, skips the fulfillment date ordering
  /// and does not insist on a payment method.
  pub fn validate_edit(draft: &InvoiceDraft) -> Result<CheckedInvoice, InvoiceRejection> {
    Self::check(draft, Path::Edit)
  }

  fn check(draft: &InvoiceDraft, path: Path) -> Result<CheckedInvoice, InvoiceRejection> {
    let number = InvoiceNumber::new(draft.number.as_deref().unwrap_or_default())?;

    let date = parse_date(&draft.date, InvoiceRejection::InvalidDate)?;
    let fulfillment_date = parse_date(
      &draft.fulfillment_date,
      InvoiceRejection::InvalidFulfillmentDate,
    )?;
    let due_date = parse_date(&draft.due_date, InvoiceRejection::InvalidDueDate)?;

    let issuer_id = present(&draft.issuer_id)?;
    let client_id = present(&draft.client_id)?;
    let total = present(&draft.total)?;
    let vat = present(&draft.vat)?;
    let payment_method = match path {
      Path::Create => Some(present(&draft.payment_method)?),
      Path::Edit => non_blank(&draft.payment_method),
    };

    let issuer_id = parse_id(issuer_id)?;
    let client_id = parse_id(client_id)?;

    let total = Decimal::from_str(total).map_err(|_| InvoiceRejection::InvalidTotal)?;
    match path {
      Path::Create if total <= Decimal::ZERO => return Err(InvoiceRejection::TotalNotPositive),
      Path::Edit if total < Decimal::ZERO => return Err(InvoiceRejection::NegativeTotal),
      _ => {}
    }

    let vat = parse_vat(vat)?;

    // The gross amount has to fit the range the document can print
    InvoiceFigures::calculate(total, vat).map_err(|_| InvoiceRejection::InvalidTotal)?;

    if path == Path::Create && fulfillment_date > date {
      return Err(InvoiceRejection::FulfillmentAfterIssue);
    }

    let payment_days = (due_date - date).num_days();
    if !(0..=MAX_PAYMENT_DAYS).contains(&payment_days) {
      return Err(InvoiceRejection::DueDateOutOfRange);
    }

    let payment_method = match (path, payment_method) {
      (Path::Create, Some(method)) => Some(PaymentMethod::from_str(method)?),
      (Path::Edit, Some(method)) => PaymentMethod::from_str(method).ok(),
      (_, None) => None,
    };

    Ok(CheckedInvoice {
      number,
      issuer_id,
      client_id,
      date,
      fulfillment_date,
      due_date,
      total,
      vat,
      payment_method,
    })
  }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
  value
    .as_deref()
    .map(str::trim)
    .filter(|value| !value.is_empty())
}

fn present(value: &Option<String>) -> Result<&str, InvoiceRejection> {
  non_blank(value).ok_or(InvoiceRejection::MissingField)
}

fn parse_date(
  value: &Option<String>,
  rejection: InvoiceRejection,
) -> Result<NaiveDate, InvoiceRejection> {
  let value = value.as_deref().unwrap_or_default();
  if !ISO_DATE.is_match(value) {
    return Err(rejection);
  }
  NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| rejection)
}

fn parse_id(value: &str) -> Result<i64, InvoiceRejection> {
  value
    .parse::<i64>()
    .map_err(|_| InvoiceRejection::InvalidClientReference)
}

fn parse_vat(value: &str) -> Result<VatRate, InvoiceRejection> {
  let rate = Decimal::from_str(value).map_err(|_| InvoiceRejection::InvalidVat)?;
  if rate < Decimal::ZERO {
    return Err(InvoiceRejection::NegativeVat);
  }
  if !rate.fract().is_zero() {
    return Err(InvoiceRejection::FractionalVat);
  }
  rate
    .to_u32()
    .map(VatRate::new)
    .ok_or(InvoiceRejection::InvalidVat)
}
