use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

use crate::domain::client::{
  Client, ClientAddress, ClientError, ClientName, ClientRepository, NewClient, TaxNumber,
};

#[derive(Debug, FromRow)]
struct ClientRow {
  id: i64,
  name: String,
  address: String,
  tax_number: String,
}

impl TryFrom<ClientRow> for Client {
  type Error = ClientError;

  fn try_from(row: ClientRow) -> Result<Self, Self::Error> {
    Ok(Client {
      id: row.id,
      name: ClientName::new(&row.name)?,
      address: ClientAddress::new(&row.address)?,
      tax_number: TaxNumber::new(&row.tax_number)?,
    })
  }
}

pub struct SqliteClientRepository {
  pool: SqlitePool,
}

impl SqliteClientRepository {
  pub fn new(pool: SqlitePool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl ClientRepository for SqliteClientRepository {
  async fn create(&self, client: NewClient) -> Result<Client, ClientError> {
    let row = sqlx::query_as::<_, ClientRow>(
      r#"
            INSERT INTO clients (name, address, tax_number)
            VALUES (?1, ?2, ?3)
            RETURNING id, name, address, tax_number
            "#,
    )
    .bind(client.name.value())
    .bind(client.address.value())
    .bind(client.tax_number.value())
    .fetch_one(&self.pool)
    .await
    .map_err(|e| {
      if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
          return ClientError::DuplicateIdentity;
        }
      }
      ClientError::Database(e)
    })?;

    row.try_into()
  }

  async fn find_by_id(&self, id: i64) -> Result<Option<Client>, ClientError> {
    let row = sqlx::query_as::<_, ClientRow>(
      r#"
            SELECT id, name, address, tax_number
            FROM clients
            WHERE id = ?1
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    row.map(|r| r.try_into()).transpose()
  }

  async fn find_all(&self) -> Result<Vec<Client>, ClientError> {
    let rows = sqlx::query_as::<_, ClientRow>(
      r#"
            SELECT id, name, address, tax_number
            FROM clients
            ORDER BY id ASC
            "#,
    )
    .fetch_all(&self.pool)
    .await?;

    rows.into_iter().map(|r| r.try_into()).collect()
  }

  async fn count_invoices(&self, id: i64) -> Result<i64, ClientError> {
    let count = sqlx::query_scalar::<_, i64>(
      r#"
            SELECT COUNT(*) FROM invoices
            WHERE issuer_id = ?1 OR client_id = ?1
            "#,
    )
    .bind(id)
    .fetch_one(&self.pool)
    .await?;

    Ok(count)
  }

  async fn delete(&self, id: i64) -> Result<bool, ClientError> {
    let result = sqlx::query("DELETE FROM clients WHERE id = ?1")
      .bind(id)
      .execute(&self.pool)
      .await;

    match result {
      Ok(done) => Ok(done.rows_affected() > 0),
      // An invoice referencing the client was written after the count check
      Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
        let invoice_count = self.count_invoices(id).await?;
        tracing::warn!("Client {} deletion blocked by foreign key", id);
        Err(ClientError::HasDependentInvoices {
          client_id: id,
          invoice_count,
        })
      }
      Err(e) => Err(e.into()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::infrastructure::persistence::sqlite::memory_pool;

  fn new_client(name: &str, tax_number: &str) -> NewClient {
    NewClient::new(
      ClientName::new(name).unwrap(),
      ClientAddress::new("Budapest, Fő utca 1.").unwrap(),
      TaxNumber::new(tax_number).unwrap(),
    )
  }

  #[tokio::test]
  async fn test_create_and_find_client() {
    let repo = SqliteClientRepository::new(memory_pool().await);

    let created = repo.create(new_client("Teszt Kft.", "12345678")).await.unwrap();
    assert_eq!(created.name.value(), "Teszt Kft.");
    assert_eq!(created.address.value(), "Budapest, Fő utca 1.");

    let found = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(found, Some(created));
    assert_eq!(repo.find_by_id(999).await.unwrap(), None);
  }

  #[tokio::test]
  async fn test_unique_name_and_tax_number() {
    let repo = SqliteClientRepository::new(memory_pool().await);
    repo.create(new_client("Teszt Kft.", "12345678")).await.unwrap();

    let result = repo.create(new_client("Teszt Kft.", "11111111")).await;
    assert!(matches!(result, Err(ClientError::DuplicateIdentity)));

    let result = repo.create(new_client("Másik Kft.", "12345678")).await;
    assert!(matches!(result, Err(ClientError::DuplicateIdentity)));

    assert_eq!(repo.find_all().await.unwrap().len(), 1);
  }

  #[tokio::test]
  async fn test_find_all_in_insertion_order() {
    let repo = SqliteClientRepository::new(memory_pool().await);
    repo.create(new_client("Zebra Kft.", "1")).await.unwrap();
    repo.create(new_client("Alma Bt.", "2")).await.unwrap();

    let names: Vec<_> = repo
      .find_all()
      .await
      .unwrap()
      .into_iter()
      .map(|c| c.name.value().to_string())
      .collect();
    assert_eq!(names, ["Zebra Kft.", "Alma Bt."]);
  }

  #[tokio::test]
  async fn test_count_and_delete() {
    let pool = memory_pool().await;
    let repo = SqliteClientRepository::new(pool.clone());
    let issuer = repo.create(new_client("Kiállító Kft.", "1")).await.unwrap();
    let customer = repo.create(new_client("Vevő Kft.", "2")).await.unwrap();
    let idle = repo.create(new_client("Pihenő Kft.", "3")).await.unwrap();

    sqlx::query(
      r#"
            INSERT INTO invoices (number, issuer_id, client_id, date, fulfillment_date, due_date, total, vat)
            VALUES ('SZ-1', ?1, ?2, '2025-01-01', '2025-01-01', '2025-01-10', '100', 27)
            "#,
    )
    .bind(issuer.id)
    .bind(customer.id)
    .execute(&pool)
    .await
    .unwrap();

    assert_eq!(repo.count_invoices(issuer.id).await.unwrap(), 1);
    assert_eq!(repo.count_invoices(customer.id).await.unwrap(), 1);
    assert_eq!(repo.count_invoices(idle.id).await.unwrap(), 0);

    assert!(repo.delete(idle.id).await.unwrap());
    assert!(!repo.delete(idle.id).await.unwrap());

    // Storage refuses too, even without the service-level check
    let result = repo.delete(customer.id).await;
    assert!(matches!(
      result,
      Err(ClientError::HasDependentInvoices {
        invoice_count: 1,
        ..
      })
    ));
  }
}
