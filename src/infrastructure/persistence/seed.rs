use chrono::{Local, NaiveDate};

use crate::domain::client::{ClientError, ClientRegistry};
use crate::domain::invoice::{InvoiceCatalog, InvoiceDraft, InvoiceError, PaymentMethod};

const DEMO_CLIENTS: [(&str, &str, &str); 3] = [
  ("Teszt Cég Kft.", "Budapest, Fő utca 1.", "12345678142"),
  ("Minta Bt.", "Debrecen, Kossuth u. 5.", "87654321234"),
  ("Demo Zrt.", "Szeged, Petőfi tér 3.", "23456789356"),
];

const INVOICES_PER_CUSTOMER: usize = 3;

/// Fills an empty database with three clients and, issued by the first one,
/// three invoices for each of the other two.
///
/// Returns the number of invoices created; zero when clients already exist.
pub async fn seed_demo_data(
  clients: &ClientRegistry,
  catalog: &InvoiceCatalog,
) -> Result<usize, InvoiceError> {
  let existing = clients.list().await.map_err(seed_failure)?;
  if !existing.is_empty() {
    tracing::debug!("Skipping demo data, {} clients present", existing.len());
    return Ok(0);
  }

  let mut registered = Vec::with_capacity(DEMO_CLIENTS.len());
  for (name, address, tax_number) in DEMO_CLIENTS {
    let client = clients
      .register(name, address, tax_number)
      .await
      .map_err(seed_failure)?;
    registered.push(client);
  }

  let today = Local::now().date_naive();
  let issuer = &registered[0];
  let mut count = 0;
  for customer in &registered[1..] {
    for _ in 0..INVOICES_PER_CUSTOMER {
      count += 1;
      catalog
        .create(&demo_invoice(count, issuer.id, customer.id, today))
        .await?;
    }
  }

  tracing::info!("Seeded {} demo clients and {} invoices", registered.len(), count);
  Ok(count)
}

fn demo_invoice(n: usize, issuer_id: i64, client_id: i64, today: NaiveDate) -> InvoiceDraft {
  let date = today.format("%Y-%m-%d").to_string();
  InvoiceDraft {
    number: Some(format!("SZAMLA-2025-{}", n)),
    issuer_id: Some(issuer_id.to_string()),
    client_id: Some(client_id.to_string()),
    date: Some(date.clone()),
    fulfillment_date: Some(date.clone()),
    due_date: Some(date),
    total: Some((10_000 + n * 1_000).to_string()),
    vat: Some("27".to_string()),
    payment_method: Some(PaymentMethod::BankTransfer.as_str().to_string()),
  }
}

fn seed_failure(error: ClientError) -> InvoiceError {
  InvoiceError::Internal(format!("Failed to seed demo clients: {}", error))
}
