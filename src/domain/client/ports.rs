use async_trait::async_trait;

use super::entities::{Client, NewClient};
use super::errors::ClientError;

#[async_trait]
pub trait ClientRepository: Send + Sync {
  /// Fails with `ClientError::DuplicateIdentity` when the name or the tax
  /// number is already taken.
  async fn create(&self, client: NewClient) -> Result<Client, ClientError>;
  async fn find_by_id(&self, id: i64) -> Result<Option<Client>, ClientError>;
  async fn find_all(&self) -> Result<Vec<Client>, ClientError>;
  /// Number of invoices naming the client as issuer or customer
  async fn count_invoices(&self, id: i64) -> Result<i64, ClientError>;
  /// Returns `false` when no row matched the id.
  async fn delete(&self, id: i64) -> Result<bool, ClientError>;
}
