use serde::Deserialize;
use serde_json::Value;

use crate::application::client::RegisterClientCommand;
use crate::domain::invoice::InvoiceDraft;

/// Text form of a loosely typed JSON field.
///
/// Strings are taken as they are and numbers in their JSON spelling, so
/// `10000` and `"10000"` end up identical. `null` counts as missing; any other
/// JSON value is kept in its serialized form so the validator rejects it with
/// the message of the field.
fn text(value: Option<Value>) -> Option<String> {
  match value? {
    Value::Null => None,
    Value::String(s) => Some(s),
    Value::Number(n) => Some(n.to_string()),
    other => Some(other.to_string()),
  }
}

/// Request body for creating or editing an invoice
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRequest {
  #[serde(default)]
  pub number: Option<Value>,
  #[serde(default)]
  pub issuer_id: Option<Value>,
  #[serde(default)]
  pub client_id: Option<Value>,
  #[serde(default)]
  pub date: Option<Value>,
  #[serde(default)]
  pub fulfillment_date: Option<Value>,
  #[serde(default)]
  pub due_date: Option<Value>,
  #[serde(default)]
  pub total: Option<Value>,
  #[serde(default)]
  pub vat: Option<Value>,
  #[serde(default)]
  pub payment_method: Option<Value>,
}

impl From<InvoiceRequest> for InvoiceDraft {
  fn from(request: InvoiceRequest) -> Self {
    InvoiceDraft {
      number: text(request.number),
      issuer_id: text(request.issuer_id),
      client_id: text(request.client_id),
      date: text(request.date),
      fulfillment_date: text(request.fulfillment_date),
      due_date: text(request.due_date),
      total: text(request.total),
      vat: text(request.vat),
      payment_method: text(request.payment_method),
    }
  }
}

/// Request body for registering a client
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRequest {
  #[serde(default)]
  pub name: Option<Value>,
  #[serde(default)]
  pub address: Option<Value>,
  #[serde(default)]
  pub tax_number: Option<Value>,
}

impl From<ClientRequest> for RegisterClientCommand {
  fn from(request: ClientRequest) -> Self {
    RegisterClientCommand {
      name: text(request.name).unwrap_or_default(),
      address: text(request.address).unwrap_or_default(),
      tax_number: text(request.tax_number).unwrap_or_default(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_numbers_and_strings_normalize_alike() {
    let as_numbers: InvoiceRequest = serde_json::from_value(json!({
      "number": "SZ-1",
      "issuerId": 1,
      "clientId": 2,
      "total": 10000,
      "vat": 27,
    }))
    .unwrap();
    let as_strings: InvoiceRequest = serde_json::from_value(json!({
      "number": "SZ-1",
      "issuerId": "1",
      "clientId": "2",
      "total": "10000",
      "vat": "27",
    }))
    .unwrap();

    assert_eq!(InvoiceDraft::from(as_numbers), InvoiceDraft::from(as_strings));
  }

  #[test]
  fn test_camel_case_fields_and_missing_values() {
    let request: InvoiceRequest = serde_json::from_value(json!({
      "fulfillmentDate": "2025-01-01",
      "dueDate": null,
      "paymentMethod": "Készpénz",
      "total": 99.5,
    }))
    .unwrap();
    let draft = InvoiceDraft::from(request);

    assert_eq!(draft.fulfillment_date.as_deref(), Some("2025-01-01"));
    assert_eq!(draft.due_date, None);
    assert_eq!(draft.number, None);
    assert_eq!(draft.payment_method.as_deref(), Some("Készpénz"));
    assert_eq!(draft.total.as_deref(), Some("99.5"));
  }

  #[test]
  fn test_client_request_tax_number_as_number() {
    let request: ClientRequest = serde_json::from_value(json!({
      "name": "Teszt Kft.",
      "taxNumber": 12345678,
    }))
    .unwrap();
    let command = RegisterClientCommand::from(request);

    assert_eq!(command.name, "Teszt Kft.");
    assert_eq!(command.address, "");
    assert_eq!(command.tax_number, "12345678");
  }
}
