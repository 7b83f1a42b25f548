use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::InvoiceRejection;

// Invoice Number - free text chosen by the issuer, unique across all invoices
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceNumber(String);

impl InvoiceNumber {
  pub fn new(value: &str) -> Result<Self, InvoiceRejection> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
      return Err(InvoiceRejection::MissingNumber);
    }
    if trimmed.starts_with('-') {
      return Err(InvoiceRejection::NegativeNumber);
    }
    Ok(Self(trimmed.to_string()))
  }

  pub fn value(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for InvoiceNumber {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// Invoice Status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
  Active,
  Canceled,
}

impl InvoiceStatus {
  pub fn from_canceled_flag(canceled: bool) -> Self {
    if canceled {
      InvoiceStatus::Canceled
    } else {
      InvoiceStatus::Active
    }
  }

  pub fn can_transition_to(&self, new_status: InvoiceStatus) -> bool {
    // Canceled is terminal
    matches!(
      (self, new_status),
      (InvoiceStatus::Active, InvoiceStatus::Canceled)
    )
  }

  pub fn is_editable(&self) -> bool {
    matches!(self, InvoiceStatus::Active)
  }

  pub fn is_canceled(&self) -> bool {
    matches!(self, InvoiceStatus::Canceled)
  }
}

// Payment Method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
  #[serde(rename = "Átutalás")]
  BankTransfer,
  #[serde(rename = "Bankkártya")]
  Card,
  #[serde(rename = "Készpénz")]
  Cash,
}

impl PaymentMethod {
  pub const ALL: [PaymentMethod; 3] = [
    PaymentMethod::BankTransfer,
    PaymentMethod::Card,
    PaymentMethod::Cash,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      PaymentMethod::BankTransfer => "Átutalás",
      PaymentMethod::Card => "Bankkártya",
      PaymentMethod::Cash => "Készpénz",
    }
  }
}

impl FromStr for PaymentMethod {
  type Err = InvoiceRejection;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    PaymentMethod::ALL
      .into_iter()
      .find(|method| method.as_str() == s.trim())
      .ok_or(InvoiceRejection::InvalidPaymentMethod)
  }
}

impl fmt::Display for PaymentMethod {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// VAT Rate - whole percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VatRate(u32);

impl VatRate {
  pub fn new(percent: u32) -> Self {
    Self(percent)
  }

  pub fn value(&self) -> u32 {
    self.0
  }
}

impl fmt::Display for VatRate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}%", self.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_invoice_number() {
    assert!(InvoiceNumber::new("SZ-2025-001").is_ok());
    assert_eq!(
      InvoiceNumber::new("   "),
      Err(InvoiceRejection::MissingNumber)
    );
    assert_eq!(
      InvoiceNumber::new("-12"),
      Err(InvoiceRejection::NegativeNumber)
    );
    assert_eq!(InvoiceNumber::new(" SZ-1 ").unwrap().to_string(), "SZ-1");
  }

  #[test]
  fn test_invoice_status_transitions() {
    assert!(InvoiceStatus::Active.can_transition_to(InvoiceStatus::Canceled));
    assert!(!InvoiceStatus::Canceled.can_transition_to(InvoiceStatus::Active));
    assert!(!InvoiceStatus::Canceled.can_transition_to(InvoiceStatus::Canceled));
    assert!(!InvoiceStatus::Active.can_transition_to(InvoiceStatus::Active));

    assert!(InvoiceStatus::Active.is_editable());
    assert!(!InvoiceStatus::Canceled.is_editable());
  }

  #[test]
  fn test_payment_method() {
    assert_eq!(
      PaymentMethod::from_str("Készpénz").unwrap(),
      PaymentMethod::Cash
    );
    assert_eq!(
      PaymentMethod::from_str("Átutalás").unwrap(),
      PaymentMethod::BankTransfer
    );
    assert_eq!(
      PaymentMethod::from_str("készpénz"),
      Err(InvoiceRejection::InvalidPaymentMethod)
    );
    assert_eq!(
      serde_json::to_string(&PaymentMethod::Card).unwrap(),
      "\"Bankkártya\""
    );
  }
}
