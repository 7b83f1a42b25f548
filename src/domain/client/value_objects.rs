use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::ClientRejection;

lazy_static! {
  // Letters of any script (so every Hungarian accented letter), spaces,
  // hyphens, and the period of company forms such as "Kft." or "Bt."
  static ref CLIENT_NAME: Regex = Regex::new(r"^[\p{L} .-]+$").unwrap();
  static ref TAX_NUMBER: Regex = Regex::new(r"^[0-9]+$").unwrap();
  static ref NEGATIVE_NUMBER: Regex = Regex::new(r"-[0-9]").unwrap();
}

fn required(value: &str) -> Result<&str, ClientRejection> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    return Err(ClientRejection::MissingField);
  }
  Ok(trimmed)
}

// Client Name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientName(String);

impl ClientName {
  pub fn new(value: &str) -> Result<Self, ClientRejection> {
    let trimmed = required(value)?;
    if !CLIENT_NAME.is_match(trimmed) {
      return Err(ClientRejection::InvalidName);
    }
    Ok(Self(trimmed.to_string()))
  }

  pub fn value(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for ClientName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

// Client Address - free text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientAddress(String);

impl ClientAddress {
  pub fn new(value: &str) -> Result<Self, ClientRejection> {
    let trimmed = required(value)?;
    if NEGATIVE_NUMBER.is_match(trimmed) {
      return Err(ClientRejection::InvalidAddress);
    }
    Ok(Self(trimmed.to_string()))
  }

  pub fn value(&self) -> &str {
    &self.0
  }
}

// Tax Number (adószám) - digits only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxNumber(String);

impl TaxNumber {
  pub fn new(value: &str) -> Result<Self, ClientRejection> {
    let trimmed = required(value)?;
    if !TAX_NUMBER.is_match(trimmed) {
      return Err(ClientRejection::InvalidTaxNumber);
    }
    Ok(Self(trimmed.to_string()))
  }

  pub fn value(&self) -> &str {
    &self.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_client_name() {
    assert!(ClientName::new("Teszt Kft.").is_ok());
    assert!(ClientName::new("Árvíztűrő Tükörfúrógép Zrt.").is_ok());
    assert!(ClientName::new("Kovács-Nagy Ödön").is_ok());
    assert_eq!(ClientName::new(" "), Err(ClientRejection::MissingField));
    assert_eq!(ClientName::new("Cég 2000"), Err(ClientRejection::InvalidName));
    assert_eq!(ClientName::new("A&B Bt."), Err(ClientRejection::InvalidName));
  }

  #[test]
  fn test_tax_number() {
    assert_eq!(TaxNumber::new(" 12345678 ").unwrap().value(), "12345678");
    assert_eq!(
      TaxNumber::new("12345678-1-42"),
      Err(ClientRejection::InvalidTaxNumber)
    );
    assert_eq!(TaxNumber::new(""), Err(ClientRejection::MissingField));
  }

  #[test]
  fn test_address() {
    assert!(ClientAddress::new("Budapest, Fő utca 1.").is_ok());
    assert!(ClientAddress::new("Szeged, Kossuth-Lajos sgt. 5").is_ok());
    assert_eq!(
      ClientAddress::new("Debrecen, Piac u. -5"),
      Err(ClientRejection::InvalidAddress)
    );
    assert_eq!(ClientAddress::new("\t"), Err(ClientRejection::MissingField));
  }
}
