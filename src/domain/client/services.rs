use std::sync::Arc;

use super::entities::{Client, NewClient};
use super::errors::{ClientError, ClientRejection};
use super::ports::ClientRepository;
use super::value_objects::{ClientAddress, ClientName, TaxNumber};

/// Client registration, lookup and guarded deletion
pub struct ClientRegistry {
  client_repo: Arc<dyn ClientRepository>,
}

impl ClientRegistry {
  pub fn new(client_repo: Arc<dyn ClientRepository>) -> Self {
    Self { client_repo }
  }

  /// Validates and stores a new client.
  ///
  /// All three fields must be filled before any format rule is checked, then
  /// the name, the tax number and the address are checked in that order.
  pub async fn register(
    &self,
    name: &str,
    address: &str,
    tax_number: &str,
  ) -> Result<Client, ClientError> {
    if [name, address, tax_number]
      .iter()
      .any(|value| value.trim().is_empty())
    {
      return Err(ClientRejection::MissingField.into());
    }

    let name = ClientName::new(name)?;
    let tax_number = TaxNumber::new(tax_number)?;
    let address = ClientAddress::new(address)?;

    let client = self
      .client_repo
      .create(NewClient::new(name, address, tax_number))
      .await?;

    tracing::info!(client_id = client.id, name = %client.name, "Client registered");
    Ok(client)
  }

  pub async fn find(&self, id: i64) -> Result<Client, ClientError> {
    self
      .client_repo
      .find_by_id(id)
      .await?
      .ok_or(ClientError::NotFound(id))
  }

  pub async fn exists(&self, id: i64) -> Result<bool, ClientError> {
    Ok(self.client_repo.find_by_id(id).await?.is_some())
  }

  pub async fn list(&self) -> Result<Vec<Client>, ClientError> {
    self.client_repo.find_all().await
  }

  /// Deletes a client that no invoice refers to.
  pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
    let invoice_count = self.client_repo.count_invoices(id).await?;
    if invoice_count > 0 {
      tracing::debug!(client_id = id, invoice_count, "Client still referenced by invoices");
      return Err(ClientError::HasDependentInvoices {
        client_id: id,
        invoice_count,
      });
    }

    if !self.client_repo.delete(id).await? {
      return Err(ClientError::NotFound(id));
    }

    tracing::info!(client_id = id, "Client deleted");
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::infrastructure::persistence::sqlite::{SqliteClientRepository, memory_pool};

  async fn registry() -> ClientRegistry {
    let pool = memory_pool().await;
    ClientRegistry::new(Arc::new(SqliteClientRepository::new(pool)))
  }

  #[tokio::test]
  async fn test_register_and_list() {
    let registry = registry().await;

    let client = registry
      .register("Teszt Kft.", "Budapest, Fő utca 1.", "12345678")
      .await
      .unwrap();
    assert!(client.id > 0);
    assert_eq!(client.name.value(), "Teszt Kft.");

    let clients = registry.list().await.unwrap();
    assert_eq!(clients.len(), 1);
    assert_eq!(registry.find(client.id).await.unwrap(), client);
  }

  #[tokio::test]
  async fn test_register_checks_missing_fields_first() {
    let registry = registry().await;

    // Invalid name, but the tax number is missing: missing wins
    let err = registry.register("Cég 2000", "Pécs", " ").await.unwrap_err();
    assert!(matches!(
      err,
      ClientError::Validation(ClientRejection::MissingField)
    ));
    assert_eq!(err.to_string(), "Hiányzó mező!");

    let err = registry
      .register("Cég 2000", "Pécs, -3", "abc")
      .await
      .unwrap_err();
    assert!(matches!(
      err,
      ClientError::Validation(ClientRejection::InvalidName)
    ));

    let err = registry
      .register("Cég", "Pécs, -3", "abc")
      .await
      .unwrap_err();
    assert!(matches!(
      err,
      ClientError::Validation(ClientRejection::InvalidTaxNumber)
    ));

    let err = registry
      .register("Cég", "Pécs, -3", "123")
      .await
      .unwrap_err();
    assert!(matches!(
      err,
      ClientError::Validation(ClientRejection::InvalidAddress)
    ));

    assert!(registry.list().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn test_duplicate_name_or_tax_number() {
    let registry = registry().await;
    registry
      .register("Teszt Kft.", "Budapest", "12345678")
      .await
      .unwrap();

    let err = registry
      .register("Teszt Kft.", "Győr", "87654321")
      .await
      .unwrap_err();
    assert!(matches!(err, ClientError::DuplicateIdentity));

    let err = registry
      .register("Másik Bt.", "Győr", "12345678")
      .await
      .unwrap_err();
    assert_eq!(err.to_string(), "Név vagy adószám már létezik!");
  }

  #[tokio::test]
  async fn test_delete_unknown_client() {
    let registry = registry().await;
    let err = registry.delete(42).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(42)));
    assert!(!registry.exists(42).await.unwrap());
  }

  #[tokio::test]
  async fn test_delete_unreferenced_client() {
    let registry = registry().await;
    let client = registry
      .register("Teszt Kft.", "Budapest", "12345678")
      .await
      .unwrap();

    registry.delete(client.id).await.unwrap();
    assert!(matches!(
      registry.find(client.id).await,
      Err(ClientError::NotFound(_))
    ));
  }
}
