use serde::{Deserialize, Serialize};

use super::value_objects::{ClientAddress, ClientName, TaxNumber};

// Client - a billing party, acts as issuer or customer on invoices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
  pub id: i64,
  pub name: ClientName,
  pub address: ClientAddress,
  pub tax_number: TaxNumber,
}

/// Registration data; the storage assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClient {
  pub name: ClientName,
  pub address: ClientAddress,
  pub tax_number: TaxNumber,
}

impl NewClient {
  pub fn new(name: ClientName, address: ClientAddress, tax_number: TaxNumber) -> Self {
    Self {
      name,
      address,
      tax_number,
    }
  }
}
