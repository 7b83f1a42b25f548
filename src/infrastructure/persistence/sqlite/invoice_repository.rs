use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{FromRow, SqlitePool};
use std::str::FromStr;

use crate::domain::client::{Client, ClientAddress, ClientName, ClientRejection, TaxNumber};
use crate::domain::invoice::{
  Invoice, InvoiceError, InvoiceNumber, InvoiceRepository, InvoiceStatus, InvoiceWithParties,
  NewInvoice, PaymentMethod, VatRate,
};

const INVOICE_COLUMNS: &str = "id, number, issuer_id, client_id, date, fulfillment_date, \
                               due_date, total, vat, payment_method, canceled";

#[derive(Debug, FromRow)]
struct InvoiceRow {
  id: i64,
  number: String,
  issuer_id: i64,
  client_id: i64,
  date: NaiveDate,
  fulfillment_date: NaiveDate,
  due_date: NaiveDate,
  total: String,
  vat: i64,
  payment_method: String,
  canceled: bool,
}

impl TryFrom<InvoiceRow> for Invoice {
  type Error = InvoiceError;

  fn try_from(row: InvoiceRow) -> Result<Self, Self::Error> {
    let total = Decimal::from_str(&row.total)
      .map_err(|e| InvoiceError::Internal(format!("Failed to parse invoice total: {}", e)))?;
    let vat = u32::try_from(row.vat)
      .map_err(|e| InvoiceError::Internal(format!("Failed to parse VAT rate: {}", e)))?;
    let payment_method = PaymentMethod::from_str(&row.payment_method).map_err(|_| {
      InvoiceError::Internal(format!("Unknown payment method: {}", row.payment_method))
    })?;

    Ok(Invoice {
      id: row.id,
      number: InvoiceNumber::new(&row.number)?,
      issuer_id: row.issuer_id,
      client_id: row.client_id,
      date: row.date,
      fulfillment_date: row.fulfillment_date,
      due_date: row.due_date,
      total,
      vat: VatRate::new(vat),
      payment_method,
      status: InvoiceStatus::from_canceled_flag(row.canceled),
    })
  }
}

#[derive(Debug, FromRow)]
struct InvoiceWithPartiesRow {
  #[sqlx(flatten)]
  invoice: InvoiceRow,
  issuer_name: String,
  issuer_address: String,
  issuer_tax_number: String,
  client_name: String,
  client_address: String,
  client_tax_number: String,
}

fn party(id: i64, name: &str, address: &str, tax_number: &str) -> Result<Client, InvoiceError> {
  let invalid =
    |e: ClientRejection| InvoiceError::Internal(format!("Invalid stored client {}: {}", id, e));
  Ok(Client {
    id,
    name: ClientName::new(name).map_err(invalid)?,
    address: ClientAddress::new(address).map_err(invalid)?,
    tax_number: TaxNumber::new(tax_number).map_err(invalid)?,
  })
}

impl TryFrom<InvoiceWithPartiesRow> for InvoiceWithParties {
  type Error = InvoiceError;

  fn try_from(row: InvoiceWithPartiesRow) -> Result<Self, Self::Error> {
    let issuer = party(
      row.invoice.issuer_id,
      &row.issuer_name,
      &row.issuer_address,
      &row.issuer_tax_number,
    )?;
    let client = party(
      row.invoice.client_id,
      &row.client_name,
      &row.client_address,
      &row.client_tax_number,
    )?;

    Ok(InvoiceWithParties {
      invoice: row.invoice.try_into()?,
      issuer,
      client,
    })
  }
}

const JOINED_SELECT: &str = r#"
            SELECT i.id, i.number, i.issuer_id, i.client_id, i.date, i.fulfillment_date,
                   i.due_date, i.total, i.vat, i.payment_method, i.canceled,
                   s.name AS issuer_name, s.address AS issuer_address,
                   s.tax_number AS issuer_tax_number,
                   c.name AS client_name, c.address AS client_address,
                   c.tax_number AS client_tax_number
            FROM invoices i
            JOIN clients s ON s.id = i.issuer_id
            JOIN clients c ON c.id = i.client_id
            "#;

fn map_write_error(e: sqlx::Error, number: &str) -> InvoiceError {
  if let sqlx::Error::Database(db_err) = &e {
    if db_err.is_unique_violation() {
      return InvoiceError::DuplicateNumber(number.to_string());
    }
  }
  InvoiceError::Database(e)
}

pub struct SqliteInvoiceRepository {
  pool: SqlitePool,
}

impl SqliteInvoiceRepository {
  pub fn new(pool: SqlitePool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl InvoiceRepository for SqliteInvoiceRepository {
  async fn create(&self, invoice: NewInvoice) -> Result<Invoice, InvoiceError> {
    let query = format!(
      r#"
            INSERT INTO invoices (
                number, issuer_id, client_id, date, fulfillment_date,
                due_date, total, vat, payment_method, canceled
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, 0)
            RETURNING {}
            "#,
      INVOICE_COLUMNS
    );

    let row = sqlx::query_as::<_, InvoiceRow>(&query)
      .bind(invoice.number.value())
      .bind(invoice.issuer_id)
      .bind(invoice.client_id)
      .bind(invoice.date)
      .bind(invoice.fulfillment_date)
      .bind(invoice.due_date)
      .bind(invoice.total.to_string())
      .bind(i64::from(invoice.vat.value()))
      .bind(invoice.payment_method.as_str())
      .fetch_one(&self.pool)
      .await
      .map_err(|e| map_write_error(e, invoice.number.value()))?;

    row.try_into()
  }

  async fn update(&self, invoice: &Invoice) -> Result<Invoice, InvoiceError> {
    let query = format!(
      r#"
            UPDATE invoices
            SET number = ?2, issuer_id = ?3, client_id = ?4, date = ?5,
                fulfillment_date = ?6, due_date = ?7, total = ?8, vat = ?9,
                payment_method = ?10
            WHERE id = ?1 AND canceled = 0
            RETURNING {}
            "#,
      INVOICE_COLUMNS
    );

    let row = sqlx::query_as::<_, InvoiceRow>(&query)
      .bind(invoice.id)
      .bind(invoice.number.value())
      .bind(invoice.issuer_id)
      .bind(invoice.client_id)
      .bind(invoice.date)
      .bind(invoice.fulfillment_date)
      .bind(invoice.due_date)
      .bind(invoice.total.to_string())
      .bind(i64::from(invoice.vat.value()))
      .bind(invoice.payment_method.as_str())
      .fetch_optional(&self.pool)
      .await
      .map_err(|e| map_write_error(e, invoice.number.value()))?;

    match row {
      Some(row) => row.try_into(),
      None => {
        tracing::warn!("Invoice {} not found or canceled during update", invoice.id);
        Err(InvoiceError::NotFound(invoice.id))
      }
    }
  }

  async fn mark_canceled(&self, id: i64) -> Result<bool, InvoiceError> {
    let result = sqlx::query("UPDATE invoices SET canceled = 1 WHERE id = ?1 AND canceled = 0")
      .bind(id)
      .execute(&self.pool)
      .await?;

    Ok(result.rows_affected() > 0)
  }

  async fn find_by_id(&self, id: i64) -> Result<Option<Invoice>, InvoiceError> {
    let query = format!("SELECT {} FROM invoices WHERE id = ?1", INVOICE_COLUMNS);
    let row = sqlx::query_as::<_, InvoiceRow>(&query)
      .bind(id)
      .fetch_optional(&self.pool)
      .await?;

    row.map(|r| r.try_into()).transpose()
  }

  async fn find_with_parties(&self, id: i64) -> Result<Option<InvoiceWithParties>, InvoiceError> {
    let query = format!("{} WHERE i.id = ?1", JOINED_SELECT);
    let row = sqlx::query_as::<_, InvoiceWithPartiesRow>(&query)
      .bind(id)
      .fetch_optional(&self.pool)
      .await?;

    row.map(|r| r.try_into()).transpose()
  }

  async fn find_all_with_parties(&self) -> Result<Vec<InvoiceWithParties>, InvoiceError> {
    let query = format!("{} ORDER BY i.id ASC", JOINED_SELECT);
    let rows = sqlx::query_as::<_, InvoiceWithPartiesRow>(&query)
      .fetch_all(&self.pool)
      .await?;

    rows.into_iter().map(|r| r.try_into()).collect()
  }

  async fn list_numbers(&self) -> Result<Vec<String>, InvoiceError> {
    let numbers = sqlx::query_scalar::<_, String>("SELECT number FROM invoices")
      .fetch_all(&self.pool)
      .await?;

    Ok(numbers)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::infrastructure::persistence::sqlite::memory_pool;
  use rust_decimal_macros::dec;

  async fn seed_clients(pool: &SqlitePool) -> (i64, i64) {
    let issuer = sqlx::query_scalar::<_, i64>(
      "INSERT INTO clients (name, address, tax_number) VALUES ('Teszt Kft.', 'Budapest', '1') RETURNING id",
    )
    .fetch_one(pool)
    .await
    .unwrap();
    let customer = sqlx::query_scalar::<_, i64>(
      "INSERT INTO clients (name, address, tax_number) VALUES ('Vevő Bt.', 'Szeged', '2') RETURNING id",
    )
    .fetch_one(pool)
    .await
    .unwrap();
    (issuer, customer)
  }

  fn new_invoice(number: &str, issuer_id: i64, client_id: i64) -> NewInvoice {
    NewInvoice {
      number: InvoiceNumber::new(number).unwrap(),
      issuer_id,
      client_id,
      date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
      fulfillment_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
      due_date: NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
      total: dec!(10000.50),
      vat: VatRate::new(27),
      payment_method: PaymentMethod::Card,
    }
  }

  #[tokio::test]
  async fn test_create_and_read_back() {
    let pool = memory_pool().await;
    let (issuer, customer) = seed_clients(&pool).await;
    let repo = SqliteInvoiceRepository::new(pool);

    let created = repo.create(new_invoice("SZ-1", issuer, customer)).await.unwrap();
    assert_eq!(created.total, dec!(10000.50));
    assert_eq!(created.payment_method, PaymentMethod::Card);
    assert_eq!(created.status, InvoiceStatus::Active);

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found, created);

    let joined = repo.find_with_parties(created.id).await.unwrap().unwrap();
    assert_eq!(joined.invoice, created);
    assert_eq!(joined.issuer.name.value(), "Teszt Kft.");
    assert_eq!(joined.client.address.value(), "Szeged");
    assert_eq!(joined.client.tax_number.value(), "2");

    assert!(repo.find_by_id(404).await.unwrap().is_none());
    assert!(repo.find_with_parties(404).await.unwrap().is_none());
  }

  #[tokio::test]
  async fn test_duplicate_number_is_reported() {
    let pool = memory_pool().await;
    let (issuer, customer) = seed_clients(&pool).await;
    let repo = SqliteInvoiceRepository::new(pool);

    repo.create(new_invoice("SZ-1", issuer, customer)).await.unwrap();
    let result = repo.create(new_invoice("SZ-1", issuer, customer)).await;
    assert!(matches!(result, Err(InvoiceError::DuplicateNumber(ref n)) if n == "SZ-1"));

    // Case-sensitive
    repo.create(new_invoice("sz-1", issuer, customer)).await.unwrap();
    let mut numbers = repo.list_numbers().await.unwrap();
    numbers.sort();
    assert_eq!(numbers, ["SZ-1", "sz-1"]);
  }

  #[tokio::test]
  async fn test_unknown_client_is_refused_by_storage() {
    let pool = memory_pool().await;
    let (issuer, _) = seed_clients(&pool).await;
    let repo = SqliteInvoiceRepository::new(pool);

    let result = repo.create(new_invoice("SZ-1", issuer, 999)).await;
    assert!(matches!(result, Err(InvoiceError::Database(_))));
  }

  #[tokio::test]
  async fn test_mark_canceled_only_once() {
    let pool = memory_pool().await;
    let (issuer, customer) = seed_clients(&pool).await;
    let repo = SqliteInvoiceRepository::new(pool);
    let invoice = repo.create(new_invoice("SZ-1", issuer, customer)).await.unwrap();

    assert!(repo.mark_canceled(invoice.id).await.unwrap());
    assert!(!repo.mark_canceled(invoice.id).await.unwrap());
    assert!(!repo.mark_canceled(999).await.unwrap());

    let stored = repo.find_by_id(invoice.id).await.unwrap().unwrap();
    assert!(stored.is_canceled());
  }

  #[tokio::test]
  async fn test_update_skips_canceled_invoice() {
    let pool = memory_pool().await;
    let (issuer, customer) = seed_clients(&pool).await;
    let repo = SqliteInvoiceRepository::new(pool);
    let mut invoice = repo.create(new_invoice("SZ-1", issuer, customer)).await.unwrap();

    invoice.total = dec!(42);
    invoice.payment_method = PaymentMethod::Cash;
    let updated = repo.update(&invoice).await.unwrap();
    assert_eq!(updated.total, dec!(42));
    assert_eq!(updated.payment_method, PaymentMethod::Cash);

    repo.mark_canceled(invoice.id).await.unwrap();
    let result = repo.update(&invoice).await;
    assert!(matches!(result, Err(InvoiceError::NotFound(_))));
  }

  #[tokio::test]
  async fn test_list_joins_parties_in_insertion_order() {
    let pool = memory_pool().await;
    let (issuer, customer) = seed_clients(&pool).await;
    let repo = SqliteInvoiceRepository::new(pool);

    repo.create(new_invoice("B", issuer, customer)).await.unwrap();
    repo.create(new_invoice("A", customer, issuer)).await.unwrap();

    let rows = repo.find_all_with_parties().await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].invoice.number.value(), "B");
    assert_eq!(rows[1].issuer.name.value(), "Vevő Bt.");
    assert_eq!(rows[1].client.name.value(), "Teszt Kft.");
  }
}
